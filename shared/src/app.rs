//! The complaint screen as a Crux app.
//!
//! One submission attempt runs as a chain of capability round trips:
//! location permission, one position fix, then one multipart `POST`. Every
//! response carries the id of the attempt it belongs to and is dropped if
//! that attempt is no longer current.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::capabilities::{
    attachment_from_pick, require_granted, send_submission, AcquireError, Capabilities,
    HttpError, LocationError, PermissionKind, PermissionState, PickImageOptions, PickerOutput,
    SubmissionOutcome,
};
use crate::config::SubmissionConfig;
use crate::event::Event;
use crate::locale::{complaint_strings, notice_strings, ComplaintStrings, Language};
use crate::model::{ComplaintDraft, Field, GeoPosition, SlotIndex, ValidationErrors};
use crate::payload::build_payload;
use crate::validation::validate_with;
use crate::{get_current_time_ms, AppError, ErrorKind, ToastKind, ToastMessage, ToastView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    CheckingPermission,
    FetchingLocation,
    Assembling,
    Sending,
}

/// Terminal state of one submit press.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    Invalid(ValidationErrors),
    LocationDenied(PermissionState),
    LocationUnavailable(LocationError),
    Succeeded(serde_json::Value),
    Rejected { status: u16, message: Option<String> },
    NetworkFailed(HttpError),
    /// Another attempt was still running; nothing was done.
    Busy,
}

impl SubmitResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Whether the attempt got as far as sending a request.
    #[must_use]
    pub fn reached_network(&self) -> bool {
        matches!(
            self,
            Self::Succeeded(_) | Self::Rejected { .. } | Self::NetworkFailed(_)
        )
    }

    #[must_use]
    pub fn error(&self) -> Option<AppError> {
        match self {
            Self::Succeeded(_) => None,
            Self::Invalid(errors) => Some(
                AppError::new(ErrorKind::Validation, "draft failed validation")
                    .with_context("invalid_fields", errors.len().to_string()),
            ),
            Self::LocationDenied(state) => {
                Some(AcquireError::LocationPermissionDenied(*state).into())
            }
            Self::LocationUnavailable(e) => {
                Some(AcquireError::LocationUnavailable(e.clone()).into())
            }
            Self::Rejected { status, message } => {
                Some(AppError::from_http_status(*status, message.as_deref()))
            }
            Self::NetworkFailed(e) => Some(e.clone().into()),
            Self::Busy => Some(AppError::new(
                ErrorKind::Busy,
                "a submission is already in flight",
            )),
        }
    }

    /// The one notification shown for this result.
    #[must_use]
    pub fn notice(&self, language: Language) -> ToastMessage {
        match self.error() {
            None => ToastMessage::new(notice_strings(language).submitted, ToastKind::Success),
            Some(e) => ToastMessage::from_error(&e, language),
        }
    }
}

impl From<SubmissionOutcome> for SubmitResult {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success(body) => Self::Succeeded(body),
            SubmissionOutcome::RejectedByServer { status, message } => {
                Self::Rejected { status, message }
            }
            SubmissionOutcome::NetworkFailure(e) => Self::NetworkFailed(e),
        }
    }
}

/// Snapshot taken when validation passed. The payload is built from this,
/// never from the live draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub id: Uuid,
    pub draft: ComplaintDraft,
    pub language: Language,
}

#[derive(Debug, Default)]
pub struct Model {
    pub config: SubmissionConfig,
    pub draft: ComplaintDraft,
    pub errors: ValidationErrors,
    pub language: Language,
    pub phase: SubmissionPhase,
    pub notice: Option<ToastMessage>,
    pub last_result: Option<SubmitResult>,
    /// At most one attempt is in flight.
    pub attempt: Option<Attempt>,
    /// Slot whose picker round trip has not answered yet.
    pub pending_pick: Option<SlotIndex>,
    pub view_timestamp_ms: u64,
}

impl Model {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.attempt.is_some()
    }

    #[must_use]
    pub fn attempt_id(&self) -> Option<Uuid> {
        self.attempt.as_ref().map(|a| a.id)
    }

    fn is_current(&self, attempt: Uuid) -> bool {
        let current = self.attempt_id() == Some(attempt);
        if !current {
            debug!(%attempt, "dropping response for a finished attempt");
        }
        current
    }

    fn show_error(&mut self, error: &AppError) {
        self.notice = Some(ToastMessage::from_error(error, self.language));
    }

    fn report(&mut self, result: SubmitResult) {
        self.notice = Some(result.notice(self.language));
        self.last_result = Some(result);
    }

    /// Ends the current attempt. Only success clears the draft, and only
    /// the parts that were actually sent.
    fn finish(&mut self, result: SubmitResult) {
        let attempt = self.attempt.take();
        self.phase = SubmissionPhase::Idle;
        match &result {
            SubmitResult::Succeeded(_) => info!("report accepted"),
            SubmitResult::Rejected { status, .. } => warn!(status, "report rejected"),
            SubmitResult::NetworkFailed(e) => warn!(error = %e, "report not delivered"),
            _ => {}
        }
        if result.is_success() {
            if let Some(attempt) = &attempt {
                self.draft.clear_submitted(&attempt.draft);
            }
            self.errors.clear();
        }
        self.report(result);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub slot: SlotIndex,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintView {
    pub language: Language,
    pub is_rtl: bool,
    pub strings: &'static ComplaintStrings,
    pub fields: Vec<FieldView>,
    pub attachments: Vec<SlotView>,
    pub attachments_error: Option<String>,
    pub toast: Option<ToastView>,
    pub phase: SubmissionPhase,
    pub is_submitting: bool,
}

#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ComplaintView;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        model.view_timestamp_ms = get_current_time_ms();
        debug!(event = event.name(), "update");

        match event {
            Event::Configure(config) => Self::configure(*config, model),
            Event::LanguageToggled => Self::toggle_language(model),
            Event::FieldChanged { field, value } => {
                if model.draft.set_field(field, value) {
                    model.errors.remove(field);
                } else {
                    debug!(%field, "not a text field");
                }
            }
            Event::PickAttachmentPressed { slot } => Self::start_pick(slot, model, caps),
            Event::MediaPermissionAnswered { slot, state } => {
                Self::media_permission_answered(slot, state, model, caps);
            }
            Event::ImagePicked { slot, output } => Self::image_picked(slot, *output, model),
            Event::RemoveAttachmentPressed { slot } => {
                model.draft.remove_attachment(slot);
            }
            Event::SubmitPressed => Self::start_attempt(model, caps),
            Event::LocationPermissionAnswered { attempt, state } => {
                Self::location_permission_answered(attempt, state, model, caps);
            }
            Event::PositionReceived { attempt, result } => {
                Self::position_received(attempt, result, model, caps);
            }
            Event::SubmissionAnswered { attempt, outcome } => {
                if model.is_current(attempt) {
                    model.finish(SubmitResult::from(*outcome));
                }
            }
            Event::NoticeDismissed => model.notice = None,
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ComplaintView {
        let strings = complaint_strings(model.language);

        let fields = Field::TEXT_FIELDS
            .iter()
            .map(|&field| FieldView {
                field,
                label: field_label(strings, field),
                value: model.draft.text(field).unwrap_or_default().to_string(),
                error: model.errors.get(field).map(str::to_string),
            })
            .collect();

        let attachments = SlotIndex::all()
            .map(|slot| SlotView {
                slot,
                display_name: model.draft.attachment(slot).map(|a| a.display_name.clone()),
            })
            .collect();

        ComplaintView {
            language: model.language,
            is_rtl: model.language.is_rtl(),
            strings,
            fields,
            attachments,
            attachments_error: model.errors.get(Field::Attachments).map(str::to_string),
            toast: model
                .notice
                .as_ref()
                .filter(|t| !t.is_expired(model.view_timestamp_ms))
                .map(ToastView::from),
            phase: model.phase,
            is_submitting: model.is_submitting(),
        }
    }
}

impl App {
    fn configure(config: SubmissionConfig, model: &mut Model) {
        let config = config.validated();
        match config.endpoint_url() {
            Ok(endpoint) => {
                info!(host = %endpoint.host(), "configured");
                model.config = config;
            }
            Err(e) => {
                warn!(error = %e, "config rejected");
                model.show_error(&AppError::from(e));
            }
        }
    }

    /// Errors already on screen are re-worded in the new language; no field
    /// is newly flagged.
    fn toggle_language(model: &mut Model) {
        model.language = model.language.toggle();

        let fresh = validate_with(&model.draft, model.language, model.config.phone_format);
        let flagged: Vec<Field> = model.errors.fields().collect();
        model.errors.clear();
        for field in flagged {
            if let Some(message) = fresh.get(field) {
                model.errors.insert(field, message);
            }
        }

        debug!(language = %model.language, "language toggled");
    }

    fn start_pick(slot: SlotIndex, model: &mut Model, caps: &Capabilities) {
        if let Some(pending) = model.pending_pick {
            debug!(%pending, "picker already open");
            return;
        }
        model.pending_pick = Some(slot);
        caps.permissions.request(PermissionKind::MediaLibrary, move |state| {
            Event::MediaPermissionAnswered { slot, state }
        });
    }

    fn media_permission_answered(
        slot: SlotIndex,
        state: PermissionState,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        if model.pending_pick != Some(slot) {
            return;
        }
        match require_granted(PermissionKind::MediaLibrary, state) {
            Ok(()) => {
                caps.image_picker.pick_image(PickImageOptions::default(), move |output| {
                    Event::ImagePicked {
                        slot,
                        output: Box::new(output),
                    }
                });
            }
            Err(e) => {
                model.pending_pick = None;
                model.show_error(&AppError::from(e));
            }
        }
    }

    /// A completed pick fills the slot and clears the attachments error.
    /// Anything else leaves the slot as it was.
    fn image_picked(slot: SlotIndex, output: PickerOutput, model: &mut Model) {
        if model.pending_pick != Some(slot) {
            return;
        }
        model.pending_pick = None;
        match attachment_from_pick(slot, output) {
            Ok(Some(attachment)) => {
                model.draft.attach(slot, attachment);
                model.errors.remove(Field::Attachments);
            }
            Ok(None) => {}
            Err(e) => model.show_error(&AppError::from(e)),
        }
    }

    fn start_attempt(model: &mut Model, caps: &Capabilities) {
        if model.is_submitting() {
            debug!("submit ignored, attempt already in flight");
            model.report(SubmitResult::Busy);
            return;
        }

        model.phase = SubmissionPhase::Validating;
        let errors = validate_with(&model.draft, model.language, model.config.phone_format);
        if !errors.is_empty() {
            info!(fields = ?errors.fields().collect::<Vec<_>>(), "draft invalid");
            model.errors = errors.clone();
            model.finish(SubmitResult::Invalid(errors));
            return;
        }
        model.errors.clear();

        let attempt = Attempt {
            id: Uuid::new_v4(),
            draft: model.draft.clone(),
            language: model.language,
        };
        let id = attempt.id;
        info!(attempt = %id, "attempt started");
        model.attempt = Some(attempt);

        model.phase = SubmissionPhase::CheckingPermission;
        caps.permissions.request(PermissionKind::Location, move |state| {
            Event::LocationPermissionAnswered { attempt: id, state }
        });
    }

    fn location_permission_answered(
        attempt: Uuid,
        state: PermissionState,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        if !model.is_current(attempt) {
            return;
        }
        if require_granted(PermissionKind::Location, state).is_err() {
            model.finish(SubmitResult::LocationDenied(state));
            return;
        }

        model.phase = SubmissionPhase::FetchingLocation;
        let request = model.config.location_request();
        caps.location.current_position(request, move |result| {
            Event::PositionReceived { attempt, result }
        });
    }

    fn position_received(
        attempt: Uuid,
        result: Result<GeoPosition, LocationError>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        if !model.is_current(attempt) {
            return;
        }
        let position = match result {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "position fix failed");
                model.finish(SubmitResult::LocationUnavailable(e));
                return;
            }
        };

        let endpoint = match model.config.endpoint_url() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                model.finish(SubmitResult::NetworkFailed(e));
                return;
            }
        };

        let Some(current) = &model.attempt else {
            return;
        };
        model.phase = SubmissionPhase::Assembling;
        let payload = build_payload(&current.draft, current.language, Some(position));

        model.phase = SubmissionPhase::Sending;
        send_submission(&caps.http, &endpoint, &payload, attempt);
    }
}

fn field_label(strings: &ComplaintStrings, field: Field) -> &'static str {
    match field {
        Field::FullName => strings.fullname,
        Field::PhoneNumber => strings.phone,
        Field::Email => strings.email,
        Field::Message => strings.message,
        Field::Attachments => strings.evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::testing::{
        http_requests, location_requests, permission_requests, picker_requests, renders,
    };
    use crate::capabilities::{
        Effect, LocationOperation, PermissionOperation, PickedImage, PickerError,
    };
    use crux_core::testing::AppTester;

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn riyadh() -> GeoPosition {
        GeoPosition::new(24.7136, 46.6753).unwrap()
    }

    fn image(uri: &str) -> PickerOutput {
        Ok(Some(PickedImage {
            uri: uri.to_string(),
            data: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }))
    }

    fn valid_model() -> Model {
        let mut model = Model::default();
        model.draft.set_field(Field::FullName, "Ali Hassan");
        model.draft.set_field(Field::PhoneNumber, "+966501234567");
        model.draft.set_field(Field::Email, "ali@example.com");
        model.draft.set_field(Field::Message, "Overflowing bin on Olaya St");
        model.draft.attach(
            slot(0),
            crate::model::Attachment::picked(slot(0), "ph://1", vec![0xFF]),
        );
        model
    }

    /// Presses submit and answers the location permission prompt.
    fn submit_to_location(app: &AppTester<App, Effect>, model: &mut Model) -> Uuid {
        app.update(Event::SubmitPressed, model);
        let attempt = model.attempt_id().unwrap();
        app.update(
            Event::LocationPermissionAnswered {
                attempt,
                state: PermissionState::Granted,
            },
            model,
        );
        attempt
    }

    mod form_tests {
        use super::*;

        #[test]
        fn test_editing_clears_that_fields_error() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();

            app.update(Event::SubmitPressed, &mut model);
            assert!(matches!(model.last_result, Some(SubmitResult::Invalid(_))));
            assert_eq!(model.errors.len(), 5);

            app.update(
                Event::FieldChanged {
                    field: Field::Email,
                    value: "a".into(),
                },
                &mut model,
            );
            assert!(!model.errors.contains(Field::Email));
            assert_eq!(model.errors.len(), 4);
        }

        #[test]
        fn test_attachments_is_not_a_text_field() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            app.update(Event::SubmitPressed, &mut model);

            app.update(
                Event::FieldChanged {
                    field: Field::Attachments,
                    value: "x".into(),
                },
                &mut model,
            );
            assert!(model.errors.contains(Field::Attachments));
        }

        #[test]
        fn test_toggle_rewords_existing_errors_only() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            app.update(Event::SubmitPressed, &mut model);
            app.update(
                Event::FieldChanged {
                    field: Field::FullName,
                    value: "Ali".into(),
                },
                &mut model,
            );

            app.update(Event::LanguageToggled, &mut model);

            assert_eq!(model.language, Language::Arabic);
            assert!(!model.errors.contains(Field::FullName));
            assert_eq!(model.errors.get(Field::Message), Some("الرسالة مطلوبة"));
            assert!(app.view(&model).is_rtl);
        }

        #[test]
        fn test_invalid_submit_sets_notice_without_effects() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();

            let update = app.update(Event::SubmitPressed, &mut model);

            let notice = model.notice.clone().unwrap();
            assert_eq!(notice.message, "Please correct the errors before submitting.");
            assert_eq!(notice.kind, ToastKind::Error);
            assert!(permission_requests(&update.effects).is_empty());
            assert!(http_requests(&update.effects).is_empty());
            assert_eq!(renders(&update.effects), 1);
            assert_eq!(model.phase, SubmissionPhase::Idle);
            assert!(!model.is_submitting());
        }

        #[test]
        fn test_rejected_config_keeps_previous() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            let bad = SubmissionConfig::default().with_endpoint("http://10.0.0.5/api");

            app.update(Event::Configure(Box::new(bad)), &mut model);

            assert_eq!(model.config, SubmissionConfig::default());
            assert_eq!(
                model.notice.unwrap().message,
                "An error occurred. Please check your connection."
            );
        }

        #[test]
        fn test_config_is_clamped_on_apply() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            let config = SubmissionConfig {
                location_timeout_ms: 1,
                ..SubmissionConfig::default()
            };

            app.update(Event::Configure(Box::new(config)), &mut model);

            assert_eq!(model.config.location_timeout_ms, 500);
        }
    }

    mod attachment_tests {
        use super::*;

        #[test]
        fn test_pick_asks_permission_then_opens_picker() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();

            let update = app.update(Event::PickAttachmentPressed { slot: slot(1) }, &mut model);
            let requests = permission_requests(&update.effects);
            assert_eq!(requests.len(), 1);
            assert_eq!(
                requests[0].operation,
                PermissionOperation::Request(PermissionKind::MediaLibrary)
            );
            assert!(picker_requests(&update.effects).is_empty());

            let update = app.update(
                Event::MediaPermissionAnswered {
                    slot: slot(1),
                    state: PermissionState::Granted,
                },
                &mut model,
            );
            assert_eq!(picker_requests(&update.effects).len(), 1);
        }

        #[test]
        fn test_pick_fills_slot_and_clears_error() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            app.update(Event::SubmitPressed, &mut model);
            app.update(Event::PickAttachmentPressed { slot: slot(1) }, &mut model);

            app.update(
                Event::ImagePicked {
                    slot: slot(1),
                    output: Box::new(image("ph://IMG_1")),
                },
                &mut model,
            );

            assert_eq!(model.draft.attachment_count(), 1);
            assert_eq!(
                model.draft.attachment(slot(1)).unwrap().display_name,
                "image_1.jpg"
            );
            assert!(!model.errors.contains(Field::Attachments));
            assert!(model.pending_pick.is_none());
        }

        #[test]
        fn test_media_denied_leaves_slot() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();
            model.draft.attach(
                slot(0),
                crate::model::Attachment::picked(slot(0), "ph://1", vec![1]),
            );

            app.update(Event::PickAttachmentPressed { slot: slot(0) }, &mut model);
            let update = app.update(
                Event::MediaPermissionAnswered {
                    slot: slot(0),
                    state: PermissionState::Denied,
                },
                &mut model,
            );

            assert!(picker_requests(&update.effects).is_empty());
            assert_eq!(model.draft.attachment(slot(0)).unwrap().source_locator, "ph://1");
            assert_eq!(
                model.notice.clone().unwrap().message,
                "Photo library access is required to attach images."
            );
            assert!(model.pending_pick.is_none());
        }

        #[test]
        fn test_cancel_and_failure_leave_slot_empty() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();

            app.update(Event::PickAttachmentPressed { slot: slot(3) }, &mut model);
            app.update(
                Event::ImagePicked {
                    slot: slot(3),
                    output: Box::new(Ok(None)),
                },
                &mut model,
            );
            assert_eq!(model.draft.attachment_count(), 0);
            assert!(model.notice.is_none());

            app.update(Event::PickAttachmentPressed { slot: slot(3) }, &mut model);
            app.update(
                Event::ImagePicked {
                    slot: slot(3),
                    output: Box::new(Err(PickerError::Unavailable("no library".into()))),
                },
                &mut model,
            );
            assert_eq!(model.draft.attachment_count(), 0);
            assert!(model.notice.is_some());
        }

        #[test]
        fn test_second_pick_waits_for_first() {
            let app = AppTester::<App, Effect>::default();
            let mut model = Model::default();

            app.update(Event::PickAttachmentPressed { slot: slot(0) }, &mut model);
            let update = app.update(Event::PickAttachmentPressed { slot: slot(1) }, &mut model);

            assert!(permission_requests(&update.effects).is_empty());
            assert_eq!(model.pending_pick, Some(slot(0)));

            app.update(
                Event::ImagePicked {
                    slot: slot(1),
                    output: Box::new(image("ph://stray")),
                },
                &mut model,
            );
            assert!(model.draft.attachment(slot(1)).is_none());
        }

        #[test]
        fn test_remove_is_unconditional() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();

            app.update(Event::RemoveAttachmentPressed { slot: slot(0) }, &mut model);
            app.update(Event::RemoveAttachmentPressed { slot: slot(0) }, &mut model);

            assert_eq!(model.draft.attachment_count(), 0);
        }
    }

    mod attempt_tests {
        use super::*;

        #[test]
        fn test_valid_submit_asks_location_permission() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();

            let update = app.update(Event::SubmitPressed, &mut model);

            let requests = permission_requests(&update.effects);
            assert_eq!(requests.len(), 1);
            assert_eq!(
                requests[0].operation,
                PermissionOperation::Request(PermissionKind::Location)
            );
            assert_eq!(model.phase, SubmissionPhase::CheckingPermission);
            assert!(app.view(&model).is_submitting);
        }

        #[test]
        fn test_granted_requests_one_fix() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            app.update(Event::SubmitPressed, &mut model);
            let attempt = model.attempt_id().unwrap();

            let update = app.update(
                Event::LocationPermissionAnswered {
                    attempt,
                    state: PermissionState::Granted,
                },
                &mut model,
            );

            let requests = location_requests(&update.effects);
            assert_eq!(requests.len(), 1);
            let LocationOperation::CurrentPosition(request) = &requests[0].operation;
            assert!(request.high_accuracy);
            assert_eq!(request.timeout_ms, 5000);
            assert_eq!(model.phase, SubmissionPhase::FetchingLocation);
        }

        #[test]
        fn test_location_denied_ends_attempt() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            app.update(Event::SubmitPressed, &mut model);
            let attempt = model.attempt_id().unwrap();

            let update = app.update(
                Event::LocationPermissionAnswered {
                    attempt,
                    state: PermissionState::Denied,
                },
                &mut model,
            );

            assert!(location_requests(&update.effects).is_empty());
            assert_eq!(
                model.last_result,
                Some(SubmitResult::LocationDenied(PermissionState::Denied))
            );
            assert_eq!(
                model.notice.clone().unwrap().message,
                "Location access is required. Please enable location permissions in Settings."
            );
            assert!(!model.is_submitting());
            assert!(!model.draft.is_empty());
        }

        #[test]
        fn test_position_sends_one_post() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            let attempt = submit_to_location(&app, &mut model);

            let update = app.update(
                Event::PositionReceived {
                    attempt,
                    result: Ok(riyadh()),
                },
                &mut model,
            );

            let requests = http_requests(&update.effects);
            assert_eq!(requests.len(), 1);
            assert!(requests[0].operation.method.eq_ignore_ascii_case("POST"));
            assert_eq!(requests[0].operation.url, crate::DEFAULT_ENDPOINT);
            assert_eq!(model.phase, SubmissionPhase::Sending);
        }

        #[test]
        fn test_position_failure_is_unavailable() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            let attempt = submit_to_location(&app, &mut model);

            let update = app.update(
                Event::PositionReceived {
                    attempt,
                    result: Err(LocationError::Timeout { timeout_ms: 5000 }),
                },
                &mut model,
            );

            assert!(http_requests(&update.effects).is_empty());
            assert_eq!(
                model.last_result,
                Some(SubmitResult::LocationUnavailable(LocationError::Timeout {
                    timeout_ms: 5000
                }))
            );
            assert!(!model.is_submitting());
        }

        #[test]
        fn test_submit_while_in_flight_is_busy() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            let attempt = submit_to_location(&app, &mut model);

            let update = app.update(Event::SubmitPressed, &mut model);

            assert!(permission_requests(&update.effects).is_empty());
            assert_eq!(model.last_result, Some(SubmitResult::Busy));
            assert_eq!(
                model.notice.clone().unwrap().message,
                "Your report is already being submitted."
            );
            assert_eq!(model.attempt_id(), Some(attempt));
            assert_eq!(model.phase, SubmissionPhase::FetchingLocation);
        }

        #[test]
        fn test_stale_responses_are_dropped() {
            let app = AppTester::<App, Effect>::default();
            let mut model = valid_model();
            let attempt = submit_to_location(&app, &mut model);

            let update = app.update(
                Event::PositionReceived {
                    attempt: Uuid::new_v4(),
                    result: Ok(riyadh()),
                },
                &mut model,
            );
            assert!(http_requests(&update.effects).is_empty());

            app.update(
                Event::SubmissionAnswered {
                    attempt: Uuid::new_v4(),
                    outcome: Box::new(SubmissionOutcome::Success(serde_json::json!({}))),
                },
                &mut model,
            );
            assert_eq!(model.attempt_id(), Some(attempt));
            assert!(model.last_result.is_none());
        }
    }

    mod result_tests {
        use super::*;

        #[test]
        fn test_notice_per_result() {
            let en = Language::English;
            assert_eq!(
                SubmitResult::Succeeded(serde_json::json!({})).notice(en).message,
                "Form submitted successfully!"
            );
            assert_eq!(
                SubmitResult::Rejected {
                    status: 422,
                    message: Some("Duplicate report".into())
                }
                .notice(en)
                .message,
                "Duplicate report"
            );
            assert_eq!(
                SubmitResult::Rejected {
                    status: 500,
                    message: None
                }
                .notice(en)
                .message,
                "Submission failed. Please try again."
            );
            let transport = HttpError::Transport {
                message: "timed out".into(),
            };
            assert_eq!(
                SubmitResult::NetworkFailed(transport).notice(en).message,
                "An error occurred. Please check your connection."
            );
            assert_eq!(
                SubmitResult::LocationDenied(PermissionState::Denied)
                    .notice(en)
                    .kind,
                ToastKind::Error
            );
        }

        #[test]
        fn test_reached_network() {
            assert!(!SubmitResult::Busy.reached_network());
            assert!(!SubmitResult::LocationDenied(PermissionState::Denied).reached_network());
            let transport = HttpError::Transport {
                message: "reset".into(),
            };
            assert!(SubmitResult::NetworkFailed(transport).reached_network());
        }
    }

    #[test]
    fn test_view_lists_fields_and_slots() {
        let app = AppTester::<App, Effect>::default();
        let mut model = Model::default();
        app.update(
            Event::FieldChanged {
                field: Field::FullName,
                value: "Ali".into(),
            },
            &mut model,
        );

        let view = app.view(&model);

        assert_eq!(view.fields.len(), 4);
        assert_eq!(view.fields[0].label, "Full Name");
        assert_eq!(view.fields[0].value, "Ali");
        assert_eq!(view.attachments.len(), 4);
        assert!(view.attachments.iter().all(|s| s.display_name.is_none()));
        assert!(!view.is_submitting);
        assert_eq!(view.strings.submit, "Submit");
    }
}
