/// UIStore manages session-wide UI state (room context, overlays, exit flag)
use crate::actions::Action;
use std::sync::{Arc, RwLock};

/// Internal state for UI
#[derive(Debug, Clone)]
pub struct UIState {
    /// Room the whole session is about
    pub room_id: String,

    /// Anti-forgery token echoed back to the server on submit
    pub csrf_token: String,

    /// Whether the help overlay is visible
    pub show_help: bool,

    /// Whether the application log overlay is visible
    pub show_logs: bool,

    /// Whether the application should exit
    pub should_exit: bool,
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new(room_id: String, csrf_token: String) -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState {
                room_id,
                csrf_token,
                show_help: false,
                show_logs: false,
                should_exit: false,
            })),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::ToggleLogs => {
                state.show_logs = !state.show_logs;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap().should_exit
    }
}
