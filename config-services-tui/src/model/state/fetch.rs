//! Bookkeeping for the configs fetch

/// Tracks the latest fetch so that superseded responses can be dropped.
#[derive(Debug, Default)]
pub struct FetchState {
    latest_seq: u64,
    in_flight: bool,
    last_error: Option<String>,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.in_flight = true;
        self.latest_seq
    }

    /// Whether a response tagged `seq` belongs to the latest fetch.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.last_error = None;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.in_flight = false;
        self.last_error = Some(error.into());
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_fetch_is_current() {
        let mut fetch = FetchState::new();
        let first = fetch.begin();
        let second = fetch.begin();
        assert!(!fetch.is_current(first));
        assert!(fetch.is_current(second));
        assert!(fetch.in_flight());
    }

    #[test]
    fn failure_is_remembered_until_success() {
        let mut fetch = FetchState::new();
        fetch.begin();
        fetch.fail("connection refused");
        assert!(!fetch.in_flight());
        assert_eq!(fetch.last_error(), Some("connection refused"));

        fetch.begin();
        fetch.succeed();
        assert_eq!(fetch.last_error(), None);
    }
}
