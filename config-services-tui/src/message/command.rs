//! Side effects requested by the update layer

/// Work the main loop performs on behalf of `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch every config record; the result comes back as
    /// `AppMessage::ConfigsLoaded` with the same `seq`.
    FetchConfigs { seq: u64 },
}
