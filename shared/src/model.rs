use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::{ATTACHMENT_MIME_TYPE, ATTACHMENT_SLOTS};

// --- Form fields ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    PhoneNumber,
    Email,
    Message,
    Attachments,
}

impl Field {
    pub const TEXT_FIELDS: [Field; 4] = [
        Field::FullName,
        Field::PhoneNumber,
        Field::Email,
        Field::Message,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullname",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::Message => "message",
            Self::Attachments => "attachments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Attachment slots ---

/// Index of one of the fixed attachment slots. Only constructible in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SlotIndex(usize);

impl SlotIndex {
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < ATTACHMENT_SLOTS {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// 1-based position, as used in wire part names.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 + 1
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..ATTACHMENT_SLOTS).map(Self)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!("attachment slot {value} out of range [0, {ATTACHMENT_SLOTS})")
        })
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> Self {
        slot.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One picked image. The bytes are read by the shell at pick time, so the
/// payload never depends on a platform URI still resolving later.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub display_name: String,
    pub source_locator: String,
    pub mime_type: String,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn picked(slot: SlotIndex, uri: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            display_name: format!("image_{}.jpg", slot.get()),
            source_locator: uri.into(),
            mime_type: ATTACHMENT_MIME_TYPE.to_string(),
            data,
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("display_name", &self.display_name)
            .field("source_locator", &self.source_locator)
            .field("mime_type", &self.mime_type)
            .field("size", &self.data.len())
            .finish()
    }
}

// --- Draft ---

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub message: String,
    pub attachments: [Option<Attachment>; ATTACHMENT_SLOTS],
}

// Redact debug output because this holds user-provided personal data.
impl fmt::Debug for ComplaintDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplaintDraft")
            .field("full_name_present", &!self.full_name.is_empty())
            .field("phone_number_present", &!self.phone_number.is_empty())
            .field("email_present", &!self.email.is_empty())
            .field("message_len", &self.message.len())
            .field("attachments", &self.attachment_count())
            .finish()
    }
}

impl ComplaintDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field; `None` for [`Field::Attachments`].
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::Email => Some(&self.email),
            Field::Message => Some(&self.message),
            Field::Attachments => None,
        }
    }

    /// Returns `false` when `field` is not a text field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let target = match field {
            Field::FullName => &mut self.full_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            Field::Attachments => return false,
        };
        *target = value.into();
        true
    }

    #[must_use]
    pub fn attachment(&self, slot: SlotIndex) -> Option<&Attachment> {
        self.attachments[slot.get()].as_ref()
    }

    pub fn attach(&mut self, slot: SlotIndex, attachment: Attachment) {
        self.attachments[slot.get()] = Some(attachment);
    }

    pub fn remove_attachment(&mut self, slot: SlotIndex) -> Option<Attachment> {
        self.attachments[slot.get()].take()
    }

    /// Non-empty slots in slot order.
    pub fn attached(&self) -> impl Iterator<Item = (SlotIndex, &Attachment)> {
        SlotIndex::all().filter_map(move |slot| self.attachment(slot).map(|a| (slot, a)))
    }

    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.attachments.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears what `sent` carried. A field or slot edited since `sent` was
    /// taken keeps its new value.
    pub fn clear_submitted(&mut self, sent: &ComplaintDraft) {
        for field in Field::TEXT_FIELDS {
            if self.text(field) == sent.text(field) {
                self.set_field(field, String::new());
            }
        }
        for slot in SlotIndex::all() {
            if self.attachment(slot) == sent.attachment(slot) {
                self.attachments[slot.get()] = None;
            }
        }
    }
}

// --- Validation result ---

/// Field → message. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// --- Geolocation ---

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Latitude {0} is out of valid range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is out of valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("Coordinate value is not finite (NaN or Infinity)")]
    NonFinite,
}

/// Device position for one submission attempt. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

impl TryFrom<(f64, f64)> for GeoPosition {
    type Error = CoordinateError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lon)
    }
}
