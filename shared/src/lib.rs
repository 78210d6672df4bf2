// lib.rs - Municipal services shared core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod content;
pub mod event;
pub mod locale;
pub mod model;
pub mod payload;
pub mod telemetry;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub use app::{App, ComplaintView, Model, SubmissionPhase, SubmitResult};
pub use capabilities::{Capabilities, Effect};
pub use config::SubmissionConfig;
pub use crux_core::App as CruxApp;
pub use event::Event;
pub use locale::Language;
pub use model::{Attachment, ComplaintDraft, Field, GeoPosition, SlotIndex, ValidationErrors};
pub use payload::{build_payload, SubmissionPayload};
pub use validation::{validate, validate_with, PhoneFormat};

pub const ATTACHMENT_SLOTS: usize = 4;
pub const ATTACHMENT_MIME_TYPE: &str = "image/jpeg";
pub const DEFAULT_ENDPOINT: &str = "https://sys.ajmalsa.com/api/observation";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MIN_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(5);
pub const MIN_LOCATION_TIMEOUT: Duration = Duration::from_millis(500);
pub const MAX_LOCATION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    LocationPermissionDenied,
    Location,
    MediaPermissionDenied,
    Picker,
    Network,
    ServerRejected,
    Deserialization,
    Busy,
    InvalidConfig,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::LocationPermissionDenied => "LOCATION_PERMISSION_DENIED",
            Self::Location => "LOCATION_ERROR",
            Self::MediaPermissionDenied => "MEDIA_PERMISSION_DENIED",
            Self::Picker => "PICKER_ERROR",
            Self::Network => "NETWORK_ERROR",
            Self::ServerRejected => "SERVER_REJECTED",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::Busy => "SUBMISSION_IN_PROGRESS",
            Self::InvalidConfig => "INVALID_CONFIG",
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Network | Self::Location | Self::Picker | Self::Busy => ErrorSeverity::Transient,

            Self::InvalidConfig => ErrorSeverity::Fatal,

            Self::Validation
            | Self::LocationPermissionDenied
            | Self::MediaPermissionDenied
            | Self::ServerRejected
            | Self::Deserialization => ErrorSeverity::Permanent,
        }
    }

    /// Whether the user may simply tap again. Nothing is retried automatically.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Network | Self::Location | Self::Picker | Self::Busy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    pub internal_message: Option<String>,
    pub context: HashMap<String, String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            internal_message: None,
            context: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable() && !matches!(self.severity, ErrorSeverity::Fatal)
    }

    /// The single notification text shown for this error.
    ///
    /// Server rejections surface the server's own message verbatim when one
    /// was provided; everything else maps to a fixed dictionary entry.
    #[must_use]
    pub fn user_facing_message(&self, language: Language) -> String {
        let t = locale::notice_strings(language);
        match self.kind {
            ErrorKind::Validation => t.correct_errors.into(),
            ErrorKind::LocationPermissionDenied => t.location_denied.into(),
            ErrorKind::Location => t.location_unavailable.into(),
            ErrorKind::MediaPermissionDenied => t.media_denied.into(),
            ErrorKind::Picker => t.picker_failed.into(),
            ErrorKind::ServerRejected if !self.message.trim().is_empty() => self.message.clone(),
            ErrorKind::ServerRejected => t.rejected.into(),
            ErrorKind::Busy => t.in_progress.into(),
            ErrorKind::Network | ErrorKind::Deserialization | ErrorKind::InvalidConfig => {
                t.connectivity.into()
            }
        }
    }

    /// `message` is the server-provided text, if any.
    #[must_use]
    pub fn from_http_status(status: u16, message: Option<&str>) -> Self {
        Self::new(ErrorKind::ServerRejected, message.unwrap_or_default())
            .with_context("http_status", status.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(internal) = &self.internal_message {
            write!(f, " (internal: {internal})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[must_use]
pub fn get_current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
    pub created_at_ms: u64,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at_ms: get_current_time_ms(),
            duration_ms: kind.default_duration_ms(),
        }
    }

    #[must_use]
    pub fn from_error(error: &AppError, language: Language) -> Self {
        let kind = match error.severity {
            ErrorSeverity::Transient => ToastKind::Warning,
            ErrorSeverity::Permanent | ErrorSeverity::Fatal => ToastKind::Error,
        };
        Self::new(error.user_facing_message(language), kind)
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) > self.duration_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl From<&ToastMessage> for ToastView {
    fn from(t: &ToastMessage) -> Self {
        Self {
            message: t.message.clone(),
            kind: t.kind,
            duration_ms: t.duration_ms,
        }
    }
}
