use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::locale::{complaint_strings, Language};
use crate::model::{ComplaintDraft, Field, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

const MIN_PHONE_DIGITS: usize = 8;
const MAX_PHONE_DIGITS: usize = 15;

/// How strictly the phone number is checked beyond presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormat {
    /// Presence only.
    Any,
    /// Optional leading `+`, separators ignored, 8 to 15 digits.
    #[default]
    International,
}

impl PhoneFormat {
    #[must_use]
    pub fn accepts(self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self {
            Self::Any => true,
            Self::International => {
                let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
                let mut digits = 0usize;
                for c in body.chars() {
                    match c {
                        '0'..='9' => digits += 1,
                        ' ' | '-' | '(' | ')' => {}
                        _ => return false,
                    }
                }
                (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
            }
        }
    }
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    !raw.trim().is_empty() && EMAIL_PATTERN.is_match(raw)
}

/// Presence-only phone check. See [`validate_with`].
#[must_use]
pub fn validate(draft: &ComplaintDraft, language: Language) -> ValidationErrors {
    validate_with(draft, language, PhoneFormat::Any)
}

/// Pure check of a draft snapshot. Messages come from `language`'s dictionary.
#[must_use]
pub fn validate_with(
    draft: &ComplaintDraft,
    language: Language,
    phone_format: PhoneFormat,
) -> ValidationErrors {
    let t = &complaint_strings(language).errors;
    let mut errors = ValidationErrors::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(Field::FullName, t.fullname);
    }

    if draft.phone_number.trim().is_empty() {
        errors.insert(Field::PhoneNumber, t.phone);
    } else if !phone_format.accepts(&draft.phone_number) {
        errors.insert(Field::PhoneNumber, t.phone_format);
    }

    if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, t.email);
    }

    if draft.message.trim().is_empty() {
        errors.insert(Field::Message, t.message);
    }

    if draft.attachment_count() == 0 {
        errors.insert(Field::Attachments, t.attachments);
    }

    errors
}
