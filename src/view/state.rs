//! Page view state machine
//!
//! `Loading → Ready | Failed`. A refresh moves back to `Loading` explicitly;
//! nothing else does.

use crate::client::FetchResult;

/// State of one page's data
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// A fetch is outstanding. Holds whatever was shown before it started.
    Loading { records: Vec<T> },
    /// The last fetch succeeded
    Ready { records: Vec<T> },
    /// The last fetch failed; the previous records are kept
    Failed { message: String, records: Vec<T> },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading {
            records: Vec::new(),
        }
    }
}

impl<T> ViewState<T> {
    /// Initial state: loading, nothing to show yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        match self {
            ViewState::Loading { records }
            | ViewState::Ready { records }
            | ViewState::Failed { records, .. } => records,
        }
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            ViewState::Loading { records }
            | ViewState::Ready { records }
            | ViewState::Failed { records, .. } => records,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// Error message of a failed fetch
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Start a refetch, keeping the current records on screen
    pub fn reload(self) -> Self {
        ViewState::Loading {
            records: self.into_records(),
        }
    }

    /// Replace the records wholesale and clear any error
    pub fn succeed(self, records: Vec<T>) -> Self {
        ViewState::Ready { records }
    }

    /// Record a failure without touching the records
    pub fn fail(self, message: impl Into<String>) -> Self {
        ViewState::Failed {
            message: message.into(),
            records: self.into_records(),
        }
    }

    /// Apply the outcome of a fetch
    pub fn apply(self, outcome: FetchResult<Vec<T>>) -> Self {
        match outcome {
            Ok(records) => self.succeed(records),
            Err(e) => self.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;

    #[test]
    fn test_initial_state() {
        let state: ViewState<u32> = ViewState::new();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_success_replaces_records() {
        let state = ViewState::new().succeed(vec![1, 2]);
        let state = state.reload().succeed(vec![3]);
        assert_eq!(state, ViewState::Ready { records: vec![3] });
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_keeps_records() {
        let state = ViewState::new().succeed(vec![1, 2]).reload();
        assert!(state.is_loading());
        assert_eq!(state.records(), &[1, 2]);

        let state = state.apply(Err(FetchError::Status { status: 500 }));
        assert_eq!(state.error(), Some("HTTP error! status: 500"));
        assert_eq!(state.records(), &[1, 2]);
    }

    #[test]
    fn test_first_load_failure_is_empty() {
        let state: ViewState<u32> =
            ViewState::new().apply(Err(FetchError::Network("connection refused".to_string())));
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.error(), Some("Network error: connection refused"));
    }
}
