//! Top-level messages

use config_services_client::{ClientError, ConfigRecord};

use super::GridMessage;

/// Top-level message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Grid messages (cursor movement, button presses)
    Grid(GridMessage),

    /// Re-issue the configs fetch
    Refresh,

    /// Result of the configs fetch tagged with its sequence number
    ConfigsLoaded {
        seq: u64,
        result: Result<Vec<ConfigRecord>, ClientError>,
    },

    /// Close the overlay, or drop the selection when none is open
    GoBack,

    /// Show the key binding overlay
    ShowHelp,

    /// Poll timed out without input; advances the spinner
    Tick,

    /// Ignored input
    Noop,
}
