/// Store for the availability workflow: one explicit state value per run.
/// Illegal transitions (submitting twice, editing while submitting) fall out
/// of the match arms instead of needing runtime flags.
use crate::actions::{Action, DateField, PickerConfig};
use chrono::{Duration, Local, NaiveDate};
use roomcheck_core::get_roomcheck_setting;
use roomcheck_core::models::{AvailabilityRequest, DateRange};
use std::sync::{Arc, RwLock};

/// Form state while the date dialog is on screen
#[derive(Debug, Clone)]
pub struct DialogState {
    pub room_id: String,
    pub csrf_token: String,
    pub title: String,
    pub start_input: String,
    pub end_input: String,
    pub focused_field: DateField,
    /// Fields stay disabled until the picker is mounted and the dialog is
    /// fully visible
    pub fields_enabled: bool,
    pub picker: Option<PickerConfig>,
    pub calendar_open: bool,
    /// Calendar cursor
    pub selected_date: NaiveDate,
    /// Inline validation error shown under the form
    pub error_message: Option<String>,
}

impl DialogState {
    fn new(room_id: String, csrf_token: String, title: String) -> Self {
        Self {
            room_id,
            csrf_token,
            title,
            start_input: String::new(),
            end_input: String::new(),
            focused_field: DateField::Start,
            fields_enabled: false,
            picker: None,
            calendar_open: false,
            selected_date: Local::now().date_naive(),
            error_message: None,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focused_field {
            DateField::Start => &mut self.start_input,
            DateField::End => &mut self.end_input,
        }
    }

    pub fn date_format(&self) -> String {
        match &self.picker {
            Some(picker) => picker.format.clone(),
            None => get_roomcheck_setting!(ROOMCHECK_DATE_FORMAT),
        }
    }

    pub fn min_date(&self) -> NaiveDate {
        match &self.picker {
            Some(picker) => picker.min_date,
            None => Local::now().date_naive(),
        }
    }
}

/// The workflow's four states
#[derive(Debug, Clone)]
pub enum WorkflowState {
    Idle,
    DialogOpen(DialogState),
    Submitting(AvailabilityRequest),
    Resolved,
}

/// Store that holds the availability workflow state
#[derive(Clone)]
pub struct BookingStore {
    state: Arc<RwLock<WorkflowState>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(WorkflowState::Idle)),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> WorkflowState {
        self.state.read().unwrap().clone()
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(*self.state.read().unwrap(), WorkflowState::DialogOpen(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.state.read().unwrap(), WorkflowState::Submitting(_))
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::DialogOpened {
                room_id,
                csrf_token,
                title,
            } => {
                if matches!(*state, WorkflowState::Idle | WorkflowState::Resolved) {
                    *state = WorkflowState::DialogOpen(DialogState::new(
                        room_id.clone(),
                        csrf_token.clone(),
                        title.clone(),
                    ));
                } else {
                    log::debug!("Ignoring dialog open while a run is in flight");
                }
            }

            Action::PickerMounted(config) => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    dialog.selected_date = config.min_date;
                    dialog.picker = Some(config.clone());
                }
            }

            Action::DialogVisible => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    dialog.fields_enabled = true;
                    // The start field holds initial focus; pop the calendar
                    // open for it if the picker is configured that way
                    dialog.calendar_open = dialog
                        .picker
                        .as_ref()
                        .map(|p| p.open_on_focus)
                        .unwrap_or(false);
                }
            }

            Action::FocusField(field) => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    if dialog.fields_enabled {
                        dialog.focused_field = *field;
                        let format = dialog.date_format();
                        let current = dialog.focused_input_mut().clone();
                        dialog.selected_date =
                            NaiveDate::parse_from_str(current.trim(), &format)
                                .unwrap_or(dialog.min_date());
                        dialog.calendar_open = dialog
                            .picker
                            .as_ref()
                            .map(|p| p.open_on_focus)
                            .unwrap_or(false);
                    }
                }
            }

            Action::InputChar(c) => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    if dialog.fields_enabled {
                        dialog.focused_input_mut().push(*c);
                        dialog.error_message = None;
                    }
                }
            }

            Action::DeleteChar => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    if dialog.fields_enabled {
                        dialog.focused_input_mut().pop();
                        dialog.error_message = None;
                    }
                }
            }

            Action::CalendarMove(days) => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    if dialog.calendar_open {
                        let moved = dialog.selected_date + Duration::days(*days);
                        // The picker never offers dates before its minimum
                        dialog.selected_date = moved.max(dialog.min_date());
                    }
                }
            }

            Action::CalendarPick => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    if dialog.calendar_open {
                        let format = dialog.date_format();
                        let picked = dialog.selected_date.format(&format).to_string();
                        *dialog.focused_input_mut() = picked;
                        dialog.error_message = None;
                        match dialog.focused_field {
                            DateField::Start => {
                                // Range picker behavior: arrival chosen,
                                // move on to departure
                                dialog.focused_field = DateField::End;
                            }
                            DateField::End => {
                                dialog.calendar_open = false;
                            }
                        }
                    }
                }
            }

            Action::SubmitAvailability {
                room_id,
                csrf_token,
                start,
                end,
            } => {
                let next = match &mut *state {
                    WorkflowState::DialogOpen(dialog) => {
                        let format = dialog.date_format();
                        match DateRange::parse(start, end, &format, dialog.min_date()) {
                            Ok(dates) => Some(WorkflowState::Submitting(AvailabilityRequest {
                                room_id: room_id.clone(),
                                csrf_token: csrf_token.clone(),
                                dates,
                            })),
                            Err(e) => {
                                dialog.error_message = Some(e.to_string());
                                None
                            }
                        }
                    }
                    _ => None,
                };
                if let Some(next) = next {
                    *state = next;
                }
            }

            Action::DialogValidationFailed(message) => {
                if let WorkflowState::DialogOpen(dialog) = &mut *state {
                    dialog.error_message = Some(message.clone());
                }
            }

            Action::CancelDialog => {
                if matches!(*state, WorkflowState::DialogOpen(_)) {
                    *state = WorkflowState::Resolved;
                }
            }

            Action::WorkflowCancelled => {
                if matches!(*state, WorkflowState::DialogOpen(_)) {
                    *state = WorkflowState::Resolved;
                }
            }

            Action::AvailabilityChecked(_) | Action::AvailabilityFailed(_) => {
                if matches!(*state, WorkflowState::Submitting(_)) {
                    *state = WorkflowState::Resolved;
                }
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}
