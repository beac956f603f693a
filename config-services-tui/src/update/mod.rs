//!
//! src/update/mod.rs
//! Update layer: the only place that changes `App`
//!
//!     mod.rs     top-level dispatch, fetch results, overlays
//!     grid.rs    cursor movement and row button presses
//!
//! `update` never performs I/O. Work that needs the backend is returned as a
//! `Command`; the main loop executes it and the outcome comes back later as
//! another message.
//!
//!     mount()                         → Command::FetchConfigs { seq: 1 }
//!     AppMessage::ConfigsLoaded {..}  → records stored, or status line set
//!

mod grid;

use config_services_client::{ClientError, ConfigRecord};

use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::App;

/// Initial command issued when the screen is mounted.
pub fn mount(app: &mut App) -> Command {
    let seq = app.fetch.begin();
    log::info!("Mounting Edit Config screen, fetch #{seq}");
    Command::FetchConfigs { seq }
}

/// Apply `msg` to the state; returns a command for the main loop, if any.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Grid(grid_msg) => {
            // Overlays swallow grid input
            if !app.modal.is_open() {
                grid::update(app, grid_msg);
            }
        }

        AppMessage::Refresh => {
            let seq = app.fetch.begin();
            log::debug!("Refresh requested, fetch #{seq}");
            app.set_status(t().status.refreshing);
            return Some(Command::FetchConfigs { seq });
        }

        AppMessage::ConfigsLoaded { seq, result } => {
            if !app.fetch.is_current(seq) {
                log::debug!("Discarding superseded fetch #{seq}");
                return None;
            }
            match result {
                Ok(records) => configs_loaded(app, records),
                Err(e) => configs_failed(app, &e),
            }
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.screen.clear_selection();
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
        }

        AppMessage::Noop => {}
    }
    None
}

fn configs_loaded(app: &mut App, records: Vec<ConfigRecord>) {
    log::info!("Loaded {} config records", records.len());
    app.fetch.succeed();
    app.set_status(format!("{} {}", t().status.loaded, records.len()));
    app.set_records(records);
}

fn configs_failed(app: &mut App, error: &ClientError) {
    if error.is_expected() {
        log::warn!("Config fetch failed: {error}");
    } else {
        log::error!("Config fetch failed: {error}");
    }

    let text = error.to_string();
    app.fetch.fail(text.clone());
    app.set_status(format!("{} {text}", t().status.fetch_failed));

    // Retrying will not help these; surface them where they cannot be missed.
    if matches!(
        error,
        ClientError::Unauthorized { .. } | ClientError::InvalidConfig { .. }
    ) {
        app.modal.show_error(t().modal.fetch_error_title, &text);
    }
}
