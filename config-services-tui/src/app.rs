//!
//! app.rs
//! Main loop
//!
//! Roughly every 100 ms, or sooner when a key arrives:
//!
//! loop {
//!     drain finished backend work (rx) → update
//!     terminal.draw(|f| view::render(&app, f))
//!     if app.should_quit { break }
//!     poll_event(100ms)
//!         key     → handle_event → update
//!         timeout → AppMessage::Tick → update
//!     any Command returned by update → AdminService::execute
//! }
//!

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

use crate::backend::AdminService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Run the screen until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    admin: &AdminService,
    mut rx: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    admin.execute(update::mount(app));

    loop {
        // 1. apply finished background work
        loop {
            match rx.try_recv() {
                Ok(msg) => dispatch(app, admin, msg),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        // 2. render
        terminal.draw(|frame| view::render(app, frame))?;

        // 3. quit?
        if app.should_quit {
            log::info!("Quit requested");
            break;
        }

        // 4. input
        let msg = match event::poll_event(POLL_TIMEOUT)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };
        dispatch(app, admin, msg);
    }

    Ok(())
}

fn dispatch(app: &mut App, admin: &AdminService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        admin.execute(command);
    }
}
