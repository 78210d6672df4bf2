//! Turns a validated draft into the multipart body the endpoint expects.
//!
//! Text parts, in order: `fullname`, `phone_number`, `email`, `message`,
//! `lang`, `lat`, `lng`. Then one file part per filled slot, named
//! `attachment1` to `attachment4` after the slot it came from.

use std::fmt;
use uuid::Uuid;

use crate::locale::Language;
use crate::model::{ComplaintDraft, Field, GeoPosition, SlotIndex};

pub const LANG_PART: &str = "lang";
pub const LAT_PART: &str = "lat";
pub const LNG_PART: &str = "lng";
/// Sent for `lat`/`lng` when no position is available.
pub const COORDINATE_PLACEHOLDER: &str = "0";

#[derive(Clone, PartialEq, Eq)]
pub struct TextPart {
    pub name: &'static str,
    pub value: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub uri: String,
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One attempt's request body. Built per attempt from the snapshot taken
/// when the attempt started.
#[derive(PartialEq, Eq)]
pub struct SubmissionPayload {
    language: Language,
    text: Vec<TextPart>,
    files: Vec<FilePart>,
}

impl SubmissionPayload {
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn text_parts(&self) -> &[TextPart] {
        &self.text
    }

    #[must_use]
    pub fn file_parts(&self) -> &[FilePart] {
        &self.files
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn file(&self, name: &str) -> Option<&FilePart> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Every part name in send order.
    #[must_use]
    pub fn part_names(&self) -> Vec<&str> {
        self.text
            .iter()
            .map(|p| p.name)
            .chain(self.files.iter().map(|f| f.name.as_str()))
            .collect()
    }

    /// `multipart/form-data` body, parts in send order.
    #[must_use]
    pub fn to_multipart(&self, boundary: &str) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.text {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            );
            body.extend_from_slice(part.value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        for file in &self.files {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    file.name,
                    quoted(&file.filename)
                )
                .as_bytes(),
            );
            body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.mime_type).as_bytes());
            body.extend_from_slice(&file.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }
}

fn quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Boundary for one attempt's body.
#[must_use]
pub fn multipart_boundary(attempt: Uuid) -> String {
    format!("----municipal-{}", attempt.simple())
}

#[must_use]
pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

impl fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionPayload")
            .field("language", &self.language)
            .field("parts", &self.part_names())
            .finish()
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("name", &self.name)
            .field("filename", &self.filename)
            .field("size", &self.data.len())
            .finish()
    }
}

impl fmt::Debug for TextPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPart")
            .field("name", &self.name)
            .field("len", &self.value.len())
            .finish()
    }
}

#[must_use]
pub fn file_part_name(slot: SlotIndex) -> String {
    format!("attachment{}", slot.ordinal())
}

/// Pure and deterministic. Field values are copied as typed; validation is
/// the caller's job.
#[must_use]
pub fn build_payload(
    draft: &ComplaintDraft,
    language: Language,
    location: Option<GeoPosition>,
) -> SubmissionPayload {
    let mut text: Vec<TextPart> = Field::TEXT_FIELDS
        .iter()
        .map(|&field| TextPart {
            name: field.as_str(),
            value: draft.text(field).unwrap_or_default().to_string(),
        })
        .collect();

    let (lat, lng) = match location {
        Some(position) => (position.latitude().to_string(), position.longitude().to_string()),
        None => (
            COORDINATE_PLACEHOLDER.to_string(),
            COORDINATE_PLACEHOLDER.to_string(),
        ),
    };
    text.push(TextPart {
        name: LANG_PART,
        value: language.code().to_string(),
    });
    text.push(TextPart {
        name: LAT_PART,
        value: lat,
    });
    text.push(TextPart {
        name: LNG_PART,
        value: lng,
    });

    let files = draft
        .attached()
        .map(|(slot, attachment)| FilePart {
            name: file_part_name(slot),
            uri: attachment.source_locator.clone(),
            filename: attachment.display_name.clone(),
            mime_type: attachment.mime_type.clone(),
            data: attachment.data.clone(),
        })
        .collect();

    SubmissionPayload {
        language,
        text,
        files,
    }
}
