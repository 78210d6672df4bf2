use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::{LocationError, PermissionState, PickerOutput, SubmissionOutcome};
use crate::config::SubmissionConfig;
use crate::model::{Field, GeoPosition, SlotIndex};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // --- Shell input ---
    /// Replaces the settings. Rejected configs leave the current ones in place.
    Configure(Box<SubmissionConfig>),
    LanguageToggled,
    FieldChanged {
        field: Field,
        value: String,
    },
    PickAttachmentPressed {
        slot: SlotIndex,
    },
    RemoveAttachmentPressed {
        slot: SlotIndex,
    },
    SubmitPressed,
    NoticeDismissed,

    // --- Capability responses ---
    #[serde(skip)]
    MediaPermissionAnswered {
        slot: SlotIndex,
        state: PermissionState,
    },
    #[serde(skip)]
    ImagePicked {
        slot: SlotIndex,
        output: Box<PickerOutput>,
    },
    #[serde(skip)]
    LocationPermissionAnswered {
        attempt: Uuid,
        state: PermissionState,
    },
    #[serde(skip)]
    PositionReceived {
        attempt: Uuid,
        result: Result<GeoPosition, LocationError>,
    },
    #[serde(skip)]
    SubmissionAnswered {
        attempt: Uuid,
        outcome: Box<SubmissionOutcome>,
    },
}

impl Event {
    /// Variant name only; field values may carry personal data.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Configure(_) => "configure",
            Self::LanguageToggled => "language_toggled",
            Self::FieldChanged { .. } => "field_changed",
            Self::PickAttachmentPressed { .. } => "pick_attachment_pressed",
            Self::RemoveAttachmentPressed { .. } => "remove_attachment_pressed",
            Self::SubmitPressed => "submit_pressed",
            Self::NoticeDismissed => "notice_dismissed",
            Self::MediaPermissionAnswered { .. } => "media_permission_answered",
            Self::ImagePicked { .. } => "image_picked",
            Self::LocationPermissionAnswered { .. } => "location_permission_answered",
            Self::PositionReceived { .. } => "position_received",
            Self::SubmissionAnswered { .. } => "submission_answered",
        }
    }
}
