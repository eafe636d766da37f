/// Store for Notifier presentation state: the transient toast and the
/// blocking notice dialog. The toast countdown runs on units of elapsed
/// time fed in through `ToastTick`, which keeps the timer testable.
use crate::actions::{Action, Notice, Toast};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct NoticesState {
    /// Self-dismissing notification, at most one at a time
    pub toast: Option<Toast>,

    /// Blocking dialog, at most one at a time
    pub notice: Option<Notice>,
}

/// Store that holds toast and notice state
#[derive(Clone)]
pub struct NoticesStore {
    state: Arc<RwLock<NoticesState>>,
}

impl NoticesStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(NoticesState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> NoticesState {
        self.state.read().unwrap().clone()
    }

    pub fn has_notice(&self) -> bool {
        self.state.read().unwrap().notice.is_some()
    }

    pub fn has_toast(&self) -> bool {
        self.state.read().unwrap().toast.is_some()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::ShowToast(toast) => {
                state.toast = Some(toast.clone());
            }

            Action::ToastHover(hovered) => {
                if let Some(toast) = &mut state.toast {
                    toast.hovered = *hovered;
                }
            }

            Action::ToastTick(elapsed_ms) => {
                let expired = match &mut state.toast {
                    Some(toast) if !toast.hovered => {
                        toast.remaining_ms = toast.remaining_ms.saturating_sub(*elapsed_ms);
                        toast.remaining_ms == 0
                    }
                    _ => false,
                };
                if expired {
                    state.toast = None;
                }
            }

            Action::ShowNotice(notice) => {
                state.notice = Some(notice.clone());
            }

            Action::DismissNotice => {
                state.notice = None;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}
