use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AcquireError;
use crate::model::{Attachment, SlotIndex};

pub const MAX_ATTACHMENT_SIZE_BYTES: usize = 20 * 1024 * 1024;

/// What the shell shows: the photo library, images only, one item, no
/// editing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickImageOptions {
    pub allow_editing: bool,
    pub selection_limit: u8,
    pub max_size_bytes: usize,
}

impl Default for PickImageOptions {
    fn default() -> Self {
        Self {
            allow_editing: false,
            selection_limit: 1,
            max_size_bytes: MAX_ATTACHMENT_SIZE_BYTES,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedImage {
    /// Platform locator, kept for display and logs.
    pub uri: String,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

impl fmt::Debug for PickedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedImage")
            .field("uri", &self.uri)
            .field("size", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PickerError {
    #[error("image picker is not available: {0}")]
    Unavailable(String),

    #[error("selected item could not be read: {0}")]
    Unreadable(String),

    #[error("image of {size} bytes exceeds maximum of {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("image picker failed: {0}")]
    Other(String),
}

/// `Ok(None)` means the user cancelled.
pub type PickerOutput = Result<Option<PickedImage>, PickerError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PickerOperation {
    PickImage(PickImageOptions),
}

impl Operation for PickerOperation {
    type Output = PickerOutput;
}

pub struct ImagePicker<E> {
    context: CapabilityContext<PickerOperation, E>,
}

impl<Ev> Capability<Ev> for ImagePicker<Ev> {
    type Operation = PickerOperation;
    type MappedSelf<MappedEv> = ImagePicker<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        ImagePicker::new(self.context.map_event(f))
    }
}

impl<E> ImagePicker<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<PickerOperation, E>) -> Self {
        Self { context }
    }

    pub fn pick_image<F>(&self, options: PickImageOptions, callback: F)
    where
        F: FnOnce(PickerOutput) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let output = ctx
                .request_from_shell(PickerOperation::PickImage(options))
                .await;
            ctx.update_app(callback(output));
        });
    }
}

/// Turns the picker's answer into the attachment for `slot`. The draft is
/// not touched here. Empty or oversized images are refused.
pub fn attachment_from_pick(
    slot: SlotIndex,
    output: PickerOutput,
) -> Result<Option<Attachment>, AcquireError> {
    let image = match output {
        Ok(Some(image)) => image,
        Ok(None) => {
            debug!(slot = slot.ordinal(), "picker cancelled");
            return Ok(None);
        }
        Err(e) => {
            warn!(slot = slot.ordinal(), error = %e, "picker failed");
            return Err(AcquireError::PickerFailed(e));
        }
    };

    if image.data.is_empty() {
        return Err(AcquireError::PickerFailed(PickerError::Unreadable(
            "image is empty".to_string(),
        )));
    }
    if image.data.len() > MAX_ATTACHMENT_SIZE_BYTES {
        warn!(slot = slot.ordinal(), size = image.data.len(), "image too large");
        return Err(AcquireError::PickerFailed(PickerError::TooLarge {
            size: image.data.len(),
            max: MAX_ATTACHMENT_SIZE_BYTES,
        }));
    }

    info!(slot = slot.ordinal(), size = image.data.len(), "image picked");
    Ok(Some(Attachment::picked(slot, image.uri, image.data)))
}
