/// Keyboard and mouse input handling and key mapping
use crate::actions::{Action, DateField};
use crate::stores::{BookingStore, NoticesStore, UIStore};
use crate::ui::toast_area;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    booking_store: &BookingStore,
    notices_store: &NoticesStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();

    // A blocking notice sits on top of everything else
    if notices_store.has_notice() {
        return match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
            _ => None,
        };
    }

    if ui_state.show_help || ui_state.show_logs {
        return match key_event.code {
            KeyCode::Esc | KeyCode::Char('?') if ui_state.show_help => Some(Action::ToggleHelp),
            KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('l') if ui_state.show_logs => {
                Some(Action::ToggleLogs)
            }
            _ => None,
        };
    }

    // No interaction while the availability request is in flight
    if booking_store.is_submitting() {
        return None;
    }

    if booking_store.is_dialog_open() {
        return handle_dialog_keys(key_event, booking_store);
    }

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::ToggleLogs),

        // Start a new availability check
        KeyCode::Enter | KeyCode::Char('a') => Some(Action::OpenAvailabilityDialog {
            room_id: ui_state.room_id,
            csrf_token: ui_state.csrf_token,
        }),

        _ => None,
    }
}

fn handle_dialog_keys(key_event: KeyEvent, booking_store: &BookingStore) -> Option<Action> {
    use crate::stores::booking_store::WorkflowState;

    let calendar_open = match booking_store.get_state() {
        WorkflowState::DialogOpen(dialog) => dialog.calendar_open,
        _ => false,
    };

    match key_event.code {
        KeyCode::Esc => Some(Action::CancelDialog),

        // Enter picks from the calendar while it is open, confirms otherwise
        KeyCode::Enter if calendar_open => Some(Action::CalendarPick),
        KeyCode::Enter => Some(Action::ConfirmDialog),

        KeyCode::Tab => {
            let field = match booking_store.get_state() {
                WorkflowState::DialogOpen(dialog) => dialog.focused_field.other(),
                _ => DateField::Start,
            };
            Some(Action::FocusField(field))
        }

        // Calendar navigation
        KeyCode::Left if calendar_open => Some(Action::CalendarMove(-1)),
        KeyCode::Right if calendar_open => Some(Action::CalendarMove(1)),
        KeyCode::Up if calendar_open => Some(Action::CalendarMove(-7)),
        KeyCode::Down if calendar_open => Some(Action::CalendarMove(7)),

        // Manual date entry
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) if !c.is_control() => Some(Action::InputChar(c)),

        _ => None,
    }
}

/// Handle mouse movement for the toast hover-pause behavior
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    screen: Rect,
    notices_store: &NoticesStore,
) -> Option<Action> {
    if !matches!(
        mouse_event.kind,
        MouseEventKind::Moved | MouseEventKind::Drag(_)
    ) {
        return None;
    }

    let toast = notices_store.get_state().toast?;
    let area = toast_area(screen, toast.position);
    let hovered = area.contains(Position {
        x: mouse_event.column,
        y: mouse_event.row,
    });

    // Only dispatch on transitions to keep the action stream quiet
    if hovered != toast.hovered {
        Some(Action::ToastHover(hovered))
    } else {
        None
    }
}
