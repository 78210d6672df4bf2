use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::capabilities::{HttpError, LocationRequest, ValidatedUrl};
use crate::validation::PhoneFormat;
use crate::{
    AppError, ErrorKind, DEFAULT_ENDPOINT, DEFAULT_LOCATION_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
    MAX_LOCATION_TIMEOUT, MAX_REQUEST_TIMEOUT, MIN_LOCATION_TIMEOUT, MIN_REQUEST_TIMEOUT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] HttpError),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::new(ErrorKind::InvalidConfig, e.to_string())
    }
}

/// Settings for the submission workflow. Every field has a default, so a
/// partial TOML document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub endpoint: String,
    pub request_timeout_ms: u64,
    pub location_timeout_ms: u64,
    pub high_accuracy: bool,
    pub phone_format: PhoneFormat,
    pub allow_private_hosts: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: duration_ms(DEFAULT_REQUEST_TIMEOUT),
            location_timeout_ms: duration_ms(DEFAULT_LOCATION_TIMEOUT),
            high_accuracy: true,
            phone_format: PhoneFormat::default(),
            allow_private_hosts: false,
        }
    }
}

const fn duration_ms(d: Duration) -> u64 {
    // All bounds are a few minutes at most.
    d.as_millis() as u64
}

impl SubmissionConfig {
    /// Parses, clamps, then checks the endpoint.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        let config = config.validated();
        config.endpoint_url()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self.validated()
    }

    #[must_use]
    pub fn with_location_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.location_timeout_ms = timeout_ms;
        self.validated()
    }

    #[must_use]
    pub fn with_phone_format(mut self, phone_format: PhoneFormat) -> Self {
        self.phone_format = phone_format;
        self
    }

    #[must_use]
    pub fn allowing_private_hosts(mut self) -> Self {
        self.allow_private_hosts = true;
        self
    }

    #[must_use]
    pub fn validated(mut self) -> Self {
        self.request_timeout_ms = self.request_timeout_ms.clamp(
            duration_ms(MIN_REQUEST_TIMEOUT),
            duration_ms(MAX_REQUEST_TIMEOUT),
        );
        self.location_timeout_ms = self.location_timeout_ms.clamp(
            duration_ms(MIN_LOCATION_TIMEOUT),
            duration_ms(MAX_LOCATION_TIMEOUT),
        );
        self.endpoint = self.endpoint.trim().to_string();
        self
    }

    pub fn endpoint_url(&self) -> Result<ValidatedUrl, HttpError> {
        ValidatedUrl::with_policy(&self.endpoint, self.allow_private_hosts)
    }

    /// Applied by the shell's HTTP client to the submission request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub fn location_request(&self) -> LocationRequest {
        LocationRequest {
            high_accuracy: self.high_accuracy,
            timeout_ms: self.location_timeout_ms,
        }
    }
}
