/// Notifier facade: the four presentation modes the workflow talks through.
/// The production implementation renders by dispatching actions to the
/// notices/booking stores; tests substitute a recording double.
use crate::actions::{Action, Icon, Notice, Toast, ToastPosition};
use crate::dispatcher::Dispatcher;
use log::debug;
use roomcheck_core::get_roomcheck_setting;
use std::sync::{Arc, Mutex};

/// Lifecycle hook run around dialog presentation
pub type Hook = Box<dyn FnMut() + Send>;

/// Consumes the dialog's single resolution
pub type ResultHook = Box<dyn FnOnce(DialogResult) + Send>;

/// What a custom dialog displays
pub enum DialogBody {
    /// Plain text lines
    Lines(Vec<String>),
    /// The arrival/departure date-range form
    DateRangeForm { room_id: String, csrf_token: String },
    /// A message plus a booking link acting as the dialog's own affordance
    BookingOffer { message: String, link: String },
}

/// The one value a dialog lifecycle resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResult {
    /// Dismissed or cancelled; also the mapping for empty input (see below)
    Cancelled,
    /// Confirmed a dialog that has no input fields
    Acknowledged,
    /// Confirmed with the form's field values
    Input(Vec<String>),
}

/// Everything needed to show one custom interactive dialog
pub struct DialogRequest {
    pub title: String,
    pub icon: Icon,
    pub body: DialogBody,
    pub footer: String,
    /// When false the body supplies its own confirm affordance
    pub show_confirm_button: bool,
    /// Runs before the dialog becomes visible
    pub on_open: Option<Hook>,
    /// Runs once the dialog is fully visible
    pub on_visible: Option<Hook>,
    /// Receives the dialog's resolution, at most once
    pub on_result: Option<ResultHook>,
}

impl DialogRequest {
    pub fn new(title: impl Into<String>, body: DialogBody) -> Self {
        Self {
            title: title.into(),
            icon: Icon::None,
            body,
            footer: String::new(),
            show_confirm_button: true,
            on_open: None,
            on_visible: None,
            on_result: None,
        }
    }
}

pub trait Notifier: Send + Sync {
    /// Fire-and-forget transient notification
    fn toast(&self, message: &str, icon: Icon, position: ToastPosition);

    /// Blocking informational dialog with a success indicator
    fn success(&self, message: &str, title: &str, footer: &str);

    /// Blocking informational dialog with an error indicator
    fn error(&self, message: &str, title: &str, footer: &str);

    /// Blocking interactive dialog with lifecycle hooks and a result callback
    fn custom(&self, request: DialogRequest);

    /// Deliver the active dialog's resolution. Only the first call per
    /// dialog lifecycle reaches the callback.
    fn resolve(&self, result: DialogResult);
}

/// Production Notifier: presentation goes through the dispatcher, the
/// pending result callback is held until the dialog resolves.
#[derive(Clone)]
pub struct ModalNotifier {
    dispatcher: Dispatcher,
    pending: Arc<Mutex<Option<ResultHook>>>,
}

impl ModalNotifier {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            pending: Arc::new(Mutex::new(None)),
        }
    }
}

impl Notifier for ModalNotifier {
    fn toast(&self, message: &str, icon: Icon, position: ToastPosition) {
        let total_ms = get_roomcheck_setting!(ROOMCHECK_TOAST_TIMER_MS, usize) as u64;
        self.dispatcher.dispatch(Action::ShowToast(Toast {
            message: message.to_string(),
            icon,
            position,
            remaining_ms: total_ms,
            total_ms,
            hovered: false,
        }));
    }

    fn success(&self, message: &str, title: &str, footer: &str) {
        self.dispatcher.dispatch(Action::ShowNotice(Notice {
            icon: Icon::Success,
            title: title.to_string(),
            message: message.to_string(),
            footer: footer.to_string(),
            link: None,
            show_confirm_button: true,
        }));
    }

    fn error(&self, message: &str, title: &str, footer: &str) {
        self.dispatcher.dispatch(Action::ShowNotice(Notice {
            icon: Icon::Error,
            title: title.to_string(),
            message: message.to_string(),
            footer: footer.to_string(),
            link: None,
            show_confirm_button: true,
        }));
    }

    fn custom(&self, mut request: DialogRequest) {
        {
            let mut pending = self.pending.lock().unwrap();
            if pending.is_some() {
                debug!("Replacing an unresolved dialog callback");
            }
            *pending = request.on_result.take();
        }

        // Presentation is dispatched before the hooks run so the stores see
        // the dialog before any mount/enable actions the hooks emit.
        match request.body {
            DialogBody::DateRangeForm {
                room_id,
                csrf_token,
            } => {
                self.dispatcher.dispatch(Action::DialogOpened {
                    room_id,
                    csrf_token,
                    title: request.title,
                });
            }
            DialogBody::Lines(lines) => {
                self.dispatcher.dispatch(Action::ShowNotice(Notice {
                    icon: request.icon,
                    title: request.title,
                    message: lines.join("\n"),
                    footer: request.footer,
                    link: None,
                    show_confirm_button: request.show_confirm_button,
                }));
            }
            DialogBody::BookingOffer { message, link } => {
                self.dispatcher.dispatch(Action::ShowNotice(Notice {
                    icon: request.icon,
                    title: request.title,
                    message,
                    footer: request.footer,
                    link: Some(link),
                    show_confirm_button: request.show_confirm_button,
                }));
            }
        }

        if let Some(mut hook) = request.on_open.take() {
            hook();
        }
        if let Some(mut hook) = request.on_visible.take() {
            hook();
        }
    }

    fn resolve(&self, result: DialogResult) {
        // Whitespace-only confirmation counts as backing out
        let result = match result {
            DialogResult::Input(values) if values.iter().all(|v| v.trim().is_empty()) => {
                DialogResult::Cancelled
            }
            other => other,
        };

        let callback = self.pending.lock().unwrap().take();
        match callback {
            Some(callback) => callback(result),
            None => debug!("Dialog already resolved; dropping {:?}", result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn notifier() -> (ModalNotifier, crate::dispatcher::ActionReceiver) {
        let (dispatcher, rx) = Dispatcher::new();
        (
            ModalNotifier::new(dispatcher),
            crate::dispatcher::ActionReceiver::new(rx),
        )
    }

    fn form_request() -> DialogRequest {
        DialogRequest::new(
            "Choose your dates",
            DialogBody::DateRangeForm {
                room_id: "7".to_string(),
                csrf_token: "abc".to_string(),
            },
        )
    }

    #[test]
    fn test_result_callback_fires_exactly_once() {
        let (notifier, _rx) = notifier();
        let calls = Arc::new(AtomicUsize::new(0));

        let mut request = form_request();
        let counter = calls.clone();
        request.on_result = Some(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        notifier.custom(request);

        notifier.resolve(DialogResult::Input(vec![
            "2024-06-01".to_string(),
            "2024-06-05".to_string(),
        ]));
        notifier.resolve(DialogResult::Input(vec![
            "2024-06-01".to_string(),
            "2024-06-05".to_string(),
        ]));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_whitespace_confirmation_maps_to_cancelled() {
        let (notifier, _rx) = notifier();
        let seen = Arc::new(Mutex::new(None));

        let mut request = form_request();
        let sink = seen.clone();
        request.on_result = Some(Box::new(move |result| {
            *sink.lock().unwrap() = Some(result);
        }));
        notifier.custom(request);

        notifier.resolve(DialogResult::Input(vec![
            "   ".to_string(),
            "".to_string(),
        ]));

        assert_eq!(*seen.lock().unwrap(), Some(DialogResult::Cancelled));
    }

    #[test]
    fn test_partial_input_passes_through() {
        let (notifier, _rx) = notifier();
        let seen = Arc::new(Mutex::new(None));

        let mut request = form_request();
        let sink = seen.clone();
        request.on_result = Some(Box::new(move |result| {
            *sink.lock().unwrap() = Some(result);
        }));
        notifier.custom(request);

        // One empty field is a validation problem, not a cancellation
        notifier.resolve(DialogResult::Input(vec![
            "2024-06-01".to_string(),
            "".to_string(),
        ]));

        assert_eq!(
            *seen.lock().unwrap(),
            Some(DialogResult::Input(vec![
                "2024-06-01".to_string(),
                "".to_string(),
            ]))
        );
    }

    #[test]
    fn test_hooks_run_in_order_after_presentation() {
        let (notifier, mut rx) = notifier();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut request = form_request();
        let open_log = order.clone();
        request.on_open = Some(Box::new(move || {
            open_log.lock().unwrap().push("open");
        }));
        let visible_log = order.clone();
        request.on_visible = Some(Box::new(move || {
            visible_log.lock().unwrap().push("visible");
        }));
        notifier.custom(request);

        assert_eq!(*order.lock().unwrap(), vec!["open", "visible"]);
        assert!(matches!(rx.try_recv(), Some(Action::DialogOpened { .. })));
    }

    #[test]
    fn test_resolve_without_dialog_is_a_noop() {
        let (notifier, _rx) = notifier();
        notifier.resolve(DialogResult::Cancelled);
    }

    #[test]
    fn test_toast_carries_configured_timer() {
        let (notifier, mut rx) = notifier();
        notifier.toast("saved", Icon::Success, ToastPosition::TopEnd);

        match rx.try_recv() {
            Some(Action::ShowToast(toast)) => {
                assert_eq!(toast.message, "saved");
                assert_eq!(toast.remaining_ms, toast.total_ms);
                assert!(!toast.hovered);
            }
            other => panic!("expected ShowToast, got {:?}", other),
        }
    }

    #[test]
    fn test_success_dialog_shape() {
        let (notifier, mut rx) = notifier();
        notifier.success("All set", "Done", "see you soon");

        match rx.try_recv() {
            Some(Action::ShowNotice(notice)) => {
                assert_eq!(notice.icon, Icon::Success);
                assert_eq!(notice.title, "Done");
                assert_eq!(notice.footer, "see you soon");
                assert!(notice.show_confirm_button);
            }
            other => panic!("expected ShowNotice, got {:?}", other),
        }
    }

    #[test]
    fn test_error_dialog_shape() {
        let (notifier, mut rx) = notifier();
        notifier.error("Room is not available", "", "");

        match rx.try_recv() {
            Some(Action::ShowNotice(notice)) => {
                assert_eq!(notice.icon, Icon::Error);
                assert_eq!(notice.message, "Room is not available");
                assert_eq!(notice.link, None);
            }
            other => panic!("expected ShowNotice, got {:?}", other),
        }
    }
}
