//! The two fixed dictionaries (English and Arabic) the screens read from.
//!
//! There is no runtime loading: every string is static and each lookup is a
//! match on [`Language`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::English => Self::Arabic,
            Self::Arabic => Self::English,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Arabic)
    }

    /// Label of the toggle button, i.e. the name of the *other* language.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::English => "Arabic",
            Self::Arabic => "إنجليزي",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Inline per-field validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldErrorStrings {
    pub fullname: &'static str,
    pub phone: &'static str,
    pub phone_format: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub attachments: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplaintStrings {
    pub back: &'static str,
    pub header: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fullname: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub attach_file: &'static str,
    pub submit: &'static str,
    pub remove: &'static str,
    pub evidence: &'static str,
    pub errors: FieldErrorStrings,
    pub language_toggle: &'static str,
}

/// Texts of the single user-visible notification that ends an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStrings {
    pub correct_errors: &'static str,
    pub submitted: &'static str,
    pub rejected: &'static str,
    pub connectivity: &'static str,
    pub location_denied: &'static str,
    pub location_unavailable: &'static str,
    pub media_denied: &'static str,
    pub picker_failed: &'static str,
    pub in_progress: &'static str,
}

static COMPLAINT_EN: ComplaintStrings = ComplaintStrings {
    back: "back",
    header: "Waste & Damage Management Solution",
    title: "Complaint Report",
    description: "Please fill out the complaint report form for the waste and damage management system to ensure your concerns are addressed promptly.",
    fullname: "Full Name",
    phone: "Phone Number",
    email: "Email",
    message: "Write your message...",
    attach_file: "Attach Image",
    submit: "Submit",
    remove: "Remove",
    evidence: "Evidence Attachment",
    errors: FieldErrorStrings {
        fullname: "Full name is required",
        phone: "Phone number is required",
        phone_format: "Invalid phone number",
        email: "Invalid email format",
        message: "Message is required",
        attachments: "At least one image is required",
    },
    language_toggle: "Arabic",
};

static COMPLAINT_AR: ComplaintStrings = ComplaintStrings {
    back: "خلف",
    header: "حل إدارة النفايات والأضرار",
    title: "تقرير الشكوى",
    description: "يرجى ملء نموذج تقرير الشكوى لنظام إدارة النفايات والأضرار لضمان معالجة مخاوفك على الفور.",
    fullname: "الاسم الكامل",
    phone: "رقم الهاتف",
    email: "البريد الإلكتروني",
    message: "اكتب رسالتك...",
    attach_file: "إرفاق صورة",
    submit: "إرسال",
    remove: "إزالة",
    evidence: "إرفاق دليل",
    errors: FieldErrorStrings {
        fullname: "الاسم الكامل مطلوب",
        phone: "رقم الهاتف مطلوب",
        phone_format: "رقم الهاتف غير صالح",
        email: "تنسيق البريد الإلكتروني غير صالح",
        message: "الرسالة مطلوبة",
        attachments: "مطلوب صورة واحدة على الأقل",
    },
    language_toggle: "إنجليزي",
};

static NOTICE_EN: NoticeStrings = NoticeStrings {
    correct_errors: "Please correct the errors before submitting.",
    submitted: "Form submitted successfully!",
    rejected: "Submission failed. Please try again.",
    connectivity: "An error occurred. Please check your connection.",
    location_denied: "Location access is required. Please enable location permissions in Settings.",
    location_unavailable: "Unable to determine your location. Please try again.",
    media_denied: "Photo library access is required to attach images.",
    picker_failed: "The image could not be selected. Please try again.",
    in_progress: "Your report is already being submitted.",
};

static NOTICE_AR: NoticeStrings = NoticeStrings {
    correct_errors: "يرجى تصحيح الأخطاء قبل الإرسال.",
    submitted: "تم إرسال النموذج بنجاح!",
    rejected: "فشل الإرسال. يرجى المحاولة مرة أخرى.",
    connectivity: "حدث خطأ. يرجى التحقق من اتصالك.",
    location_denied: "الوصول إلى الموقع مطلوب. يرجى تفعيل أذونات الموقع من الإعدادات.",
    location_unavailable: "تعذر تحديد موقعك. يرجى المحاولة مرة أخرى.",
    media_denied: "الوصول إلى مكتبة الصور مطلوب لإرفاق الصور.",
    picker_failed: "تعذر اختيار الصورة. يرجى المحاولة مرة أخرى.",
    in_progress: "جاري إرسال تقريرك بالفعل.",
};

#[must_use]
pub fn complaint_strings(language: Language) -> &'static ComplaintStrings {
    match language {
        Language::English => &COMPLAINT_EN,
        Language::Arabic => &COMPLAINT_AR,
    }
}

#[must_use]
pub fn notice_strings(language: Language) -> &'static NoticeStrings {
    match language {
        Language::English => &NOTICE_EN,
        Language::Arabic => &NOTICE_AR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Arabic.code(), "ar");
        assert_eq!(Language::from_code("AR"), Some(Language::Arabic));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::English.toggle(), Language::Arabic);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
        assert!(Language::Arabic.is_rtl());
        assert!(!Language::English.is_rtl());
    }

    #[test]
    fn test_toggle_label_names_other_language() {
        assert_eq!(
            complaint_strings(Language::English).language_toggle,
            Language::English.toggle_label()
        );
        assert_eq!(
            complaint_strings(Language::Arabic).language_toggle,
            Language::Arabic.toggle_label()
        );
    }

    #[test]
    fn test_dictionaries_are_distinct() {
        let en = complaint_strings(Language::English);
        let ar = complaint_strings(Language::Arabic);
        assert_eq!(en.errors.email, "Invalid email format");
        assert_ne!(en.errors.email, ar.errors.email);
        assert_ne!(
            notice_strings(Language::English).submitted,
            notice_strings(Language::Arabic).submitted
        );
    }
}
