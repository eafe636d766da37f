/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use chrono::NaiveDate;
use roomcheck_core::exceptions::GenericError;
use roomcheck_core::models::AvailabilityOutcome;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// User asked to check availability for the ambient room
    OpenAvailabilityDialog { room_id: String, csrf_token: String },

    /// User moved focus to a date field inside the dialog
    FocusField(DateField),

    /// User typed a character into the focused date field
    InputChar(char),

    /// User deleted the character before the cursor
    DeleteChar,

    /// User moved the calendar cursor by the given number of days
    CalendarMove(i64),

    /// User picked the highlighted calendar date for the focused field
    CalendarPick,

    /// User confirmed the dialog
    ConfirmDialog,

    /// User cancelled/dismissed the dialog
    CancelDialog,

    /// User dismissed the currently shown notice
    DismissNotice,

    /// User toggled the help overlay
    ToggleHelp,

    /// User toggled the application log overlay
    ToggleLogs,

    /// Application should exit
    Quit,

    // ===== Presentation Actions (emitted by the Notifier) =====
    /// Show a transient toast notification
    ShowToast(Toast),

    /// Show a blocking notice dialog
    ShowNotice(Notice),

    /// The dialog form was opened (fields still disabled)
    DialogOpened {
        room_id: String,
        csrf_token: String,
        title: String,
    },

    // ===== System/Effect Actions =====
    /// The date-range picker was mounted against the form fields
    PickerMounted(PickerConfig),

    /// The dialog is fully visible; fields may be enabled
    DialogVisible,

    /// Pointer moved over or off the toast area
    ToastHover(bool),

    /// A unit of time elapsed for the toast countdown
    ToastTick(u64),

    /// Confirmed dates are ready to be submitted to the server
    SubmitAvailability {
        room_id: String,
        csrf_token: String,
        start: String,
        end: String,
    },

    /// Confirmation was rejected by validation; shown inline in the dialog
    DialogValidationFailed(String),

    /// The user backed out before submitting; the run ends silently
    WorkflowCancelled,

    /// The server answered the availability check
    AvailabilityChecked(AvailabilityOutcome),

    /// The availability check failed in transit or returned garbage
    AvailabilityFailed(GenericError),
}

/// The two inputs of the date-range form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn other(&self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Indicator shown on toasts and notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    None,
}

/// Screen corner a toast is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopEnd,
    TopStart,
    BottomEnd,
    BottomStart,
}

/// A transient, self-dismissing notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub icon: Icon,
    pub position: ToastPosition,
    /// Milliseconds left before auto-dismissal
    pub remaining_ms: u64,
    /// Original lifetime, kept for the progress bar
    pub total_ms: u64,
    /// While true the countdown does not advance
    pub hovered: bool,
}

/// A blocking informational dialog (success/error/booking offer)
#[derive(Debug, Clone)]
pub struct Notice {
    pub icon: Icon,
    pub title: String,
    pub message: String,
    pub footer: String,
    /// Booking link rendered as the dialog's own action
    pub link: Option<String>,
    /// When false the body supplies its own affordance (e.g. the link)
    pub show_confirm_button: bool,
}

/// Configuration the date-range picker is mounted with
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// chrono format string for parsing and display
    pub format: String,
    /// Earliest selectable date
    pub min_date: NaiveDate,
    /// Whether focusing a field pops the calendar open
    pub open_on_focus: bool,
}
