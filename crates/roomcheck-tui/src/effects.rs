/// Effects module handles side effects (HTTP calls, dialog presentation).
/// Effects are triggered by Actions and dispatch new Actions with results.
use crate::actions::{Action, Icon, PickerConfig};
use crate::dispatcher::Dispatcher;
use crate::notifier::{DialogBody, DialogRequest, DialogResult, Notifier};
use crate::stores::BookingStore;
use crate::stores::booking_store::WorkflowState;
use chrono::Local;
use roomcheck_api::AvailabilityApi;
use roomcheck_core::get_roomcheck_setting;
use roomcheck_core::models::{AvailabilityOutcome, DateRange};
use std::sync::Arc;
use tokio::task;

/// Capability for mounting the date-range picker against the dialog's two
/// date fields. Injected so tests can observe the mount without a terminal.
pub trait DatePicker: Send + Sync {
    fn mount(&self, config: PickerConfig);
}

/// Production picker mount: hands the configuration to the booking store
pub struct CalendarPicker {
    dispatcher: Dispatcher,
}

impl CalendarPicker {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl DatePicker for CalendarPicker {
    fn mount(&self, config: PickerConfig) {
        self.dispatcher.dispatch(Action::PickerMounted(config));
    }
}

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    api: Arc<dyn AvailabilityApi>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn DatePicker>,
    booking_store: Option<BookingStore>,
}

impl Effects {
    pub fn new(
        dispatcher: Dispatcher,
        api: Arc<dyn AvailabilityApi>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn DatePicker>,
    ) -> Self {
        Self {
            dispatcher,
            api,
            notifier,
            picker,
            booking_store: None,
        }
    }

    pub fn set_booking_store(&mut self, store: BookingStore) {
        self.booking_store = Some(store);
    }

    /// Handle an action and execute any necessary side effects
    pub fn handle(&self, action: &Action) {
        match action {
            Action::OpenAvailabilityDialog {
                room_id,
                csrf_token,
            } => {
                self.open_date_dialog(room_id.clone(), csrf_token.clone());
            }
            Action::ConfirmDialog => {
                self.resolve_confirmation();
            }
            Action::CancelDialog => {
                self.notifier.resolve(DialogResult::Cancelled);
            }
            Action::DismissNotice => {
                self.notifier.resolve(DialogResult::Acknowledged);
            }
            Action::SubmitAvailability { .. } => {
                self.submit_availability();
            }
            Action::AvailabilityChecked(outcome) => {
                self.present_outcome(outcome);
            }
            Action::AvailabilityFailed(e) => {
                log::error!("Availability check failed: {}", e.to_string());
                self.notifier.error(
                    "Could not reach the booking server. Please try again later.",
                    "Something went wrong",
                    &e.to_string(),
                );
            }
            Action::WorkflowCancelled => {
                // Backing out is not an error; the run just ends
                log::debug!("Availability check cancelled by user");
            }

            _ => {
                // Most actions don't require side effects
            }
        }
    }

    /// Open the custom date dialog: presentation first, then the picker
    /// mount (open hook) and field enablement (visible hook)
    fn open_date_dialog(&self, room_id: String, csrf_token: String) {
        let mut request = DialogRequest::new(
            "Choose your dates",
            DialogBody::DateRangeForm {
                room_id: room_id.clone(),
                csrf_token: csrf_token.clone(),
            },
        );

        let picker = self.picker.clone();
        let config = PickerConfig {
            format: get_roomcheck_setting!(ROOMCHECK_DATE_FORMAT),
            min_date: Local::now().date_naive(),
            open_on_focus: true,
        };
        request.on_open = Some(Box::new(move || {
            picker.mount(config.clone());
        }));

        let visible_dispatcher = self.dispatcher.clone();
        request.on_visible = Some(Box::new(move || {
            visible_dispatcher.dispatch(Action::DialogVisible);
        }));

        let result_dispatcher = self.dispatcher.clone();
        request.on_result = Some(Box::new(move |result| match result {
            DialogResult::Input(values) => {
                let start = values.first().cloned().unwrap_or_default();
                let end = values.get(1).cloned().unwrap_or_default();
                result_dispatcher.dispatch(Action::SubmitAvailability {
                    room_id,
                    csrf_token,
                    start,
                    end,
                });
            }
            DialogResult::Cancelled | DialogResult::Acknowledged => {
                result_dispatcher.dispatch(Action::WorkflowCancelled);
            }
        }));

        self.notifier.custom(request);
    }

    /// Feed the form's current values into the dialog's single resolution.
    /// Validation runs before resolving: the dialog only resolves once, so
    /// a rejected confirm must leave the callback armed for the retry.
    fn resolve_confirmation(&self) {
        let Some(store) = &self.booking_store else {
            return;
        };
        if let WorkflowState::DialogOpen(dialog) = store.get_state() {
            if !dialog.fields_enabled {
                return;
            }
            let start = dialog.start_input.clone();
            let end = dialog.end_input.clone();

            // A fully empty confirmation resolves and maps to cancellation
            // inside the notifier; anything else must parse first. The
            // booking store re-runs the same parse as its transition gate.
            if !(start.trim().is_empty() && end.trim().is_empty()) {
                let format = dialog.date_format();
                if let Err(e) = DateRange::parse(&start, &end, &format, dialog.min_date()) {
                    self.dispatcher
                        .dispatch(Action::DialogValidationFailed(e.to_string()));
                    return;
                }
            }

            self.notifier
                .resolve(DialogResult::Input(vec![start, end]));
        }
    }

    /// Fire the availability check for a validated submission. The store
    /// only sits in `Submitting` when validation passed, so a rejected
    /// confirm sends nothing.
    fn submit_availability(&self) {
        let Some(store) = &self.booking_store else {
            return;
        };
        let request = match store.get_state() {
            WorkflowState::Submitting(request) => request,
            _ => {
                log::debug!("Submission rejected by validation; nothing to send");
                return;
            }
        };

        let dispatcher = self.dispatcher.clone();
        let api = self.api.clone();

        task::spawn(async move {
            log::info!("Checking availability for room {}", request.room_id);
            match api.check(&request).await {
                Ok(outcome) => {
                    dispatcher.dispatch(Action::AvailabilityChecked(outcome));
                }
                Err(e) => {
                    dispatcher.dispatch(Action::AvailabilityFailed(e));
                }
            }
        });
    }

    fn present_outcome(&self, outcome: &AvailabilityOutcome) {
        match outcome {
            AvailabilityOutcome::Available { .. } => {
                // The link is the dialog's own affordance, so no confirm button
                let link = outcome.booking_link().unwrap_or_default();
                let mut request = DialogRequest::new(
                    "",
                    DialogBody::BookingOffer {
                        message: "Room is available".to_string(),
                        link,
                    },
                );
                request.icon = Icon::Success;
                request.show_confirm_button = false;
                self.notifier.custom(request);
            }
            AvailabilityOutcome::Unavailable => {
                self.notifier.error("Room is not available", "", "");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::DateField;
    use crate::dispatcher::ActionReceiver;
    use crate::notifier::ModalNotifier;
    use crate::stores::NoticesStore;
    use async_trait::async_trait;
    use roomcheck_core::exceptions::GenericError;
    use roomcheck_core::models::AvailabilityRequest;
    use std::sync::Mutex;
    use std::time::Duration;

    struct StubApi {
        reply: Result<AvailabilityOutcome, GenericError>,
        calls: Arc<Mutex<Vec<AvailabilityRequest>>>,
    }

    #[async_trait]
    impl AvailabilityApi for StubApi {
        async fn check(
            &self,
            request: &AvailabilityRequest,
        ) -> Result<AvailabilityOutcome, GenericError> {
            self.calls.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    /// Minimal stand-in for the app loop: drains pending actions through
    /// the stores and effects, exactly in dispatch order.
    struct Harness {
        dispatcher: Dispatcher,
        receiver: ActionReceiver,
        booking: BookingStore,
        notices: NoticesStore,
        effects: Effects,
        api_calls: Arc<Mutex<Vec<AvailabilityRequest>>>,
    }

    impl Harness {
        fn new(reply: Result<AvailabilityOutcome, GenericError>) -> Self {
            let (dispatcher, rx) = Dispatcher::new();
            let receiver = ActionReceiver::new(rx);
            let booking = BookingStore::new();
            let notices = NoticesStore::new();
            let api_calls = Arc::new(Mutex::new(Vec::new()));
            let api = Arc::new(StubApi {
                reply,
                calls: api_calls.clone(),
            });
            let notifier = Arc::new(ModalNotifier::new(dispatcher.clone()));
            let picker = Arc::new(CalendarPicker::new(dispatcher.clone()));
            let mut effects = Effects::new(dispatcher.clone(), api, notifier, picker);
            effects.set_booking_store(booking.clone());
            Self {
                dispatcher,
                receiver,
                booking,
                notices,
                effects,
                api_calls,
            }
        }

        fn drain(&mut self) {
            while let Some(action) = self.receiver.try_recv() {
                self.booking.reduce(&action);
                self.notices.reduce(&action);
                self.effects.handle(&action);
            }
        }

        /// Drain, give any spawned availability check a chance to finish,
        /// then drain its result
        async fn settle(&mut self) {
            self.drain();
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.drain();
        }

        fn open_dialog(&mut self) {
            self.dispatcher.dispatch(Action::OpenAvailabilityDialog {
                room_id: "7".to_string(),
                csrf_token: "abc".to_string(),
            });
            self.drain();
        }

        fn type_into(&mut self, field: DateField, text: &str) {
            self.dispatcher.dispatch(Action::FocusField(field));
            for c in text.chars() {
                self.dispatcher.dispatch(Action::InputChar(c));
            }
            self.drain();
        }
    }

    fn available_reply() -> Result<AvailabilityOutcome, GenericError> {
        Ok(AvailabilityOutcome::Available {
            room_id: "7".to_string(),
            start_date: "2033-06-01".to_string(),
            end_date: "2033-06-05".to_string(),
        })
    }

    #[tokio::test]
    async fn test_dialog_opens_with_picker_then_enabled_fields() {
        let mut h = Harness::new(available_reply());
        h.open_dialog();

        match h.booking.get_state() {
            WorkflowState::DialogOpen(dialog) => {
                assert!(dialog.fields_enabled);
                let picker = dialog.picker.expect("picker should be mounted");
                assert_eq!(picker.format, "%Y-%m-%d");
                assert!(picker.open_on_focus);
                assert_eq!(picker.min_date, Local::now().date_naive());
            }
            other => panic!("expected DialogOpen, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancelling_never_sends_a_request() {
        let mut h = Harness::new(available_reply());
        h.open_dialog();
        h.dispatcher.dispatch(Action::CancelDialog);
        h.settle().await;

        assert!(h.api_calls.lock().unwrap().is_empty());
        assert!(matches!(h.booking.get_state(), WorkflowState::Resolved));
        assert!(!h.notices.has_notice());
    }

    #[tokio::test]
    async fn test_empty_confirmation_is_treated_as_cancel() {
        let mut h = Harness::new(available_reply());
        h.open_dialog();
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        assert!(h.api_calls.lock().unwrap().is_empty());
        assert!(matches!(h.booking.get_state(), WorkflowState::Resolved));
    }

    #[tokio::test]
    async fn test_confirmed_dates_reach_the_server_and_offer_a_booking() {
        let mut h = Harness::new(available_reply());
        h.open_dialog();
        h.type_into(DateField::Start, "2033-06-01");
        h.type_into(DateField::End, "2033-06-05");
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        let calls = h.api_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].form_fields("%Y-%m-%d"),
            vec![
                ("start", "2033-06-01".to_string()),
                ("end", "2033-06-05".to_string()),
                ("csrf_token", "abc".to_string()),
                ("room_id", "7".to_string()),
            ]
        );
        drop(calls);

        let notice = h.notices.get_state().notice.expect("success notice shown");
        assert_eq!(notice.icon, Icon::Success);
        assert_eq!(
            notice.link,
            Some("/book-room?id=7&s=2033-06-01&e=2033-06-05".to_string())
        );
        assert!(!notice.show_confirm_button);
        assert!(matches!(h.booking.get_state(), WorkflowState::Resolved));
    }

    #[tokio::test]
    async fn test_unavailable_room_shows_fixed_error_without_link() {
        let mut h = Harness::new(Ok(AvailabilityOutcome::Unavailable));
        h.open_dialog();
        h.type_into(DateField::Start, "2033-06-01");
        h.type_into(DateField::End, "2033-06-05");
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        let notice = h.notices.get_state().notice.expect("error notice shown");
        assert_eq!(notice.icon, Icon::Error);
        assert_eq!(notice.message, "Room is not available");
        assert_eq!(notice.link, None);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_instead_of_hanging() {
        let mut h = Harness::new(Err(GenericError::TransportError(
            "connection refused".to_string(),
        )));
        h.open_dialog();
        h.type_into(DateField::Start, "2033-06-01");
        h.type_into(DateField::End, "2033-06-05");
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        // The workflow left Submitting and the user can see what happened
        assert!(matches!(h.booking.get_state(), WorkflowState::Resolved));
        let notice = h.notices.get_state().notice.expect("failure notice shown");
        assert_eq!(notice.icon, Icon::Error);
        assert!(notice.footer.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_invalid_range_stays_in_dialog_and_sends_nothing() {
        let mut h = Harness::new(available_reply());
        h.open_dialog();
        h.type_into(DateField::Start, "2033-06-05");
        h.type_into(DateField::End, "2033-06-01");
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        assert!(h.api_calls.lock().unwrap().is_empty());
        match h.booking.get_state() {
            WorkflowState::DialogOpen(dialog) => {
                assert_eq!(
                    dialog.error_message,
                    Some("Departure cannot be before arrival".to_string())
                );
            }
            other => panic!("expected DialogOpen, got {:?}", other),
        }

        // Fixing the departure date lets the same dialog confirm again
        for _ in 0.."2033-06-01".len() {
            h.dispatcher.dispatch(Action::DeleteChar);
        }
        h.type_into(DateField::End, "2033-06-07");
        h.dispatcher.dispatch(Action::ConfirmDialog);
        h.settle().await;

        assert_eq!(h.api_calls.lock().unwrap().len(), 1);
        assert!(matches!(h.booking.get_state(), WorkflowState::Resolved));
    }
}
