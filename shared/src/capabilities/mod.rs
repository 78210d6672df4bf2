mod http;
mod location;
mod permissions;
mod picker;

pub use self::http::{
    interpret_response, outcome_from_http, send_submission, server_message, HttpError,
    SubmissionOutcome, ValidatedUrl, MAX_RESPONSE_BODY_SIZE,
};
pub use self::location::{
    position_from_fix, Location, LocationError, LocationFix, LocationOperation,
    LocationOutput, LocationRequest,
};
pub use self::permissions::{
    require_granted, PermissionKind, PermissionOperation, PermissionState, Permissions,
};
pub use self::picker::{
    attachment_from_pick, ImagePicker, PickImageOptions, PickedImage, PickerError,
    PickerOperation, PickerOutput, MAX_ATTACHMENT_SIZE_BYTES,
};

pub use crux_core::render::Render;
pub use crux_http::Http;

use thiserror::Error;

use crate::app::App;
use crate::event::Event;
use crate::{AppError, ErrorKind};

/// Everything the core asks of the shell. The derive generates the
/// matching `Effect` enum, one variant per capability.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub permissions: Permissions<Event>,
    pub location: Location<Event>,
    pub image_picker: ImagePicker<Event>,
}

/// Why a device resource (position or image) could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("location permission not granted ({0:?})")]
    LocationPermissionDenied(PermissionState),

    #[error("location unavailable: {0}")]
    LocationUnavailable(LocationError),

    #[error("media library permission not granted ({0:?})")]
    MediaPermissionDenied(PermissionState),

    #[error("image picker failed: {0}")]
    PickerFailed(PickerError),
}

impl From<AcquireError> for AppError {
    fn from(e: AcquireError) -> Self {
        let kind = match &e {
            AcquireError::LocationPermissionDenied(_) => ErrorKind::LocationPermissionDenied,
            AcquireError::LocationUnavailable(_) => ErrorKind::Location,
            AcquireError::MediaPermissionDenied(_) => ErrorKind::MediaPermissionDenied,
            AcquireError::PickerFailed(_) => ErrorKind::Picker,
        };
        AppError::new(kind, e.to_string())
    }
}

impl From<HttpError> for AppError {
    fn from(e: HttpError) -> Self {
        let kind = match &e {
            HttpError::InvalidResponse { .. } | HttpError::ResponseTooLarge { .. } => {
                ErrorKind::Deserialization
            }
            HttpError::InvalidUrl { .. } | HttpError::PrivateNetworkBlocked { .. } => {
                ErrorKind::InvalidConfig
            }
            HttpError::Transport { .. } => ErrorKind::Network,
        };
        AppError::new(kind, e.to_string())
    }
}

/// Pulls requests of one kind out of an update's effects.
#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use crux_core::Request;
    use crux_http::protocol::HttpRequest;

    #[must_use]
    pub fn permission_requests(effects: &[Effect]) -> Vec<&Request<PermissionOperation>> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Permissions(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn location_requests(effects: &[Effect]) -> Vec<&Request<LocationOperation>> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Location(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn picker_requests(effects: &[Effect]) -> Vec<&Request<PickerOperation>> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::ImagePicker(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn http_requests(effects: &[Effect]) -> Vec<&Request<HttpRequest>> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Http(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn renders(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Render(_)))
            .count()
    }

    /// Value of the first header called `name`, compared case-insensitively.
    #[must_use]
    pub fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
