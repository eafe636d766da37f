use std::io;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod notifier;
mod stores;
mod ui;

// Reusable widgets
mod common;
mod tui;

pub use app::App;

/// Main entry point for the availability-check TUI. `room_id` and
/// `csrf_token` come from the caller and live for the whole session.
pub async fn tui_main(room_id: String, csrf_token: String) -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let mut terminal = tui::init()?;

    // Create the application and action receiver (this initializes the logger)
    let app_result = App::new(room_id, csrf_token);

    let (mut app, action_receiver) = match app_result {
        Ok(app) => app,
        Err(e) => {
            // Make sure to restore terminal before showing error
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, format!("{}", e)));
        }
    };

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
