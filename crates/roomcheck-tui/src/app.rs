/// Main application struct and event loop
use crate::actions::{Action, Icon, ToastPosition};
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::{CalendarPicker, Effects};
use crate::keyboard;
use crate::logger::LogBuffer;
use crate::notifier::{ModalNotifier, Notifier};
use crate::stores::{BookingStore, NoticesStore, UIStore};
use crate::ui::render_layout;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use roomcheck_api::AvailabilityClient;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Milliseconds between event-loop ticks. Also drives the toast timer.
const TICK_MS: u64 = 16;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for UI chrome (overlays, exit flag)
    ui_store: UIStore,

    /// Store for the availability workflow state machine
    booking_store: BookingStore,

    /// Store for toasts and result dialogs
    notices_store: NoticesStore,

    /// Log buffer for capturing application logs
    log_buffer: LogBuffer,

    /// Effects handler for side effects
    effects: Effects,

    /// Notifier shared with the effects layer
    notifier: Arc<dyn Notifier>,
}

impl App {
    pub fn new(
        room_id: String,
        csrf_token: String,
    ) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer = crate::logger::init_memory_logger()?;

        let ui_store = UIStore::new(room_id, csrf_token);
        let booking_store = BookingStore::new();
        let notices_store = NoticesStore::new();

        let api = Arc::new(AvailabilityClient::new().map_err(|e| e.to_string())?);
        let notifier: Arc<dyn Notifier> = Arc::new(ModalNotifier::new(dispatcher.clone()));
        let picker = Arc::new(CalendarPicker::new(dispatcher.clone()));
        let mut effects = Effects::new(dispatcher.clone(), api, notifier.clone(), picker);
        effects.set_booking_store(booking_store.clone());

        Ok((
            Self {
                dispatcher,
                ui_store,
                booking_store,
                notices_store,
                log_buffer,
                effects,
                notifier,
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("roomcheck TUI started");

        self.notifier.toast(
            "Press Enter to choose your dates",
            Icon::None,
            ToastPosition::TopEnd,
        );

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.ui_store,
                    &self.booking_store,
                    &self.notices_store,
                    &self.log_buffer,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            // Use tokio::select to handle both UI events and actions
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(TICK_MS)) => {
                    // Advance any visible toast's countdown
                    if self.notices_store.has_toast() {
                        self.dispatcher.dispatch(Action::ToastTick(TICK_MS));
                    }

                    if event::poll(Duration::from_millis(0))? {
                        match event::read()? {
                            Event::Key(key_event) => {
                                // Only process key press events (not release)
                                if key_event.kind == KeyEventKind::Press {
                                    if let Some(action) = keyboard::handle_key_event(
                                        key_event,
                                        &self.ui_store,
                                        &self.booking_store,
                                        &self.notices_store,
                                    ) {
                                        self.dispatcher.dispatch(action);
                                    }
                                }
                            }
                            Event::Mouse(mouse_event) => {
                                let size = terminal.size()?;
                                let screen = Rect::new(0, 0, size.width, size.height);
                                if let Some(action) = keyboard::handle_mouse_event(
                                    mouse_event,
                                    screen,
                                    &self.notices_store,
                                ) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                            _ => {}
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        // Ticks fire every frame and would drown the log buffer
        if !matches!(action, Action::ToastTick(_)) {
            log::debug!("Handling action: {:?}", action);
        }

        self.ui_store.reduce(action);
        self.booking_store.reduce(action);
        self.notices_store.reduce(action);

        self.effects.handle(action);
    }
}
