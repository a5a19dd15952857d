//! View State Holder
//!
//! Owns one page's [`ViewState`] and runs its fetches on Tokio tasks.
//!
//! - a fetch is keyed to the resolved URL: activating again with the same URL
//!   is a no-op, a different URL starts a new fetch
//! - fetch tasks only hold a [`Weak`] reference, so a response arriving after
//!   the holder was dropped is discarded
//! - a generation counter discards the result of a fetch superseded by a
//!   later [`refresh`](ViewStateHolder::refresh)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::state::ViewState;
use crate::client::RecordSource;
use crate::models::{resolve_all, FromRecord};

/// Per-page state container
pub struct ViewStateHolder<T> {
    inner: Arc<HolderInner<T>>,
}

struct HolderInner<T> {
    state: watch::Sender<ViewState<T>>,
    /// URL of the most recently started fetch
    requested_url: Mutex<Option<String>>,
    generation: AtomicU64,
}

impl<T> ViewStateHolder<T>
where
    T: FromRecord + Send + Sync + 'static,
{
    /// Fresh holder in the initial `Loading` state
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::new());
        Self {
            inner: Arc::new(HolderInner {
                state,
                requested_url: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// Start the page's fetch unless one was already started for `url`.
    ///
    /// Returns the fetch task, or `None` when nothing was started.
    pub fn activate(
        &self,
        source: Arc<dyn RecordSource>,
        url: impl Into<String>,
    ) -> Option<JoinHandle<()>> {
        let url = url.into();
        {
            let mut requested = lock_url(&self.inner.requested_url);
            if requested.as_deref() == Some(url.as_str()) {
                tracing::debug!(url = %url, "Fetch already started for this URL");
                return None;
            }
            *requested = Some(url.clone());
        }

        let generation = self.next_generation();
        self.inner.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            take_and(ViewState::reload)(state);
            true
        });

        Some(self.spawn_fetch(source, url, generation))
    }

    /// Reset to `Loading` and fetch again, even for the same URL
    pub fn refresh(&self, source: Arc<dyn RecordSource>, url: impl Into<String>) -> JoinHandle<()> {
        let url = url.into();
        *lock_url(&self.inner.requested_url) = Some(url.clone());
        let generation = self.next_generation();
        self.inner.state.send_modify(take_and(ViewState::reload));
        self.spawn_fetch(source, url, generation)
    }

    /// Wait until the current fetch has settled and return the state.
    ///
    /// Only meaningful after [`activate`](Self::activate) or
    /// [`refresh`](Self::refresh); a holder that never fetched stays loading.
    pub async fn settled(&self) -> ViewState<T>
    where
        T: Clone,
    {
        let mut rx = self.subscribe();
        let settled = rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| (*state).clone());
        match settled {
            Ok(state) => state,
            Err(_) => self.snapshot(),
        }
    }

    /// Supersede every fetch started so far. Must run before the state is
    /// reset so an older task can no longer pass its generation check.
    fn next_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn spawn_fetch(
        &self,
        source: Arc<dyn RecordSource>,
        url: String,
        generation: u64,
    ) -> JoinHandle<()> {
        let holder = Arc::downgrade(&self.inner);
        tokio::spawn(run_fetch(holder, source, url, generation))
    }
}

impl<T> Default for ViewStateHolder<T>
where
    T: FromRecord + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

async fn run_fetch<T>(
    holder: Weak<HolderInner<T>>,
    source: Arc<dyn RecordSource>,
    url: String,
    generation: u64,
) where
    T: FromRecord + Send + Sync + 'static,
{
    let outcome = source
        .fetch_records(&url)
        .await
        .map(|records| resolve_all::<T>(&records));

    let Some(inner) = holder.upgrade() else {
        tracing::debug!(url = %url, "Page deactivated, discarding response");
        return;
    };

    tracing::debug!(url = %url, generation, "Applying fetch result");

    let count = outcome.as_ref().map(Vec::len).map_err(ToString::to_string);

    // The generation is compared under the watch lock, so a refresh either
    // lands before this check or after the write.
    let applied = inner.state.send_if_modified(|state| {
        if inner.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        take_and(move |state: ViewState<T>| state.apply(outcome))(state);
        true
    });

    match (applied, count) {
        (false, _) => {
            tracing::debug!(url = %url, generation, "Superseded fetch, discarding response")
        }
        (true, Ok(count)) => tracing::info!(url = %url, count, "Records loaded"),
        (true, Err(error)) => tracing::warn!(url = %url, error = %error, "Failed to load records"),
    }
}

/// Adapt a by-value transition to `watch::Sender::send_modify`
fn take_and<T>(
    transition: impl FnOnce(ViewState<T>) -> ViewState<T>,
) -> impl FnOnce(&mut ViewState<T>) {
    move |state| *state = transition(std::mem::take(state))
}

fn lock_url(url: &Mutex<Option<String>>) -> std::sync::MutexGuard<'_, Option<String>> {
    // The guarded value is a plain Option; a poisoned lock still holds a valid one.
    url.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{FetchError, FetchResult};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(Option<String>);

    impl FromRecord for Named {
        fn from_record(record: &Value) -> Self {
            Named(record.get("name").and_then(Value::as_str).map(String::from))
        }
    }

    /// Replays canned responses in call order; can hold the first call open.
    struct FakeSource {
        responses: Mutex<VecDeque<FetchResult<Vec<Value>>>>,
        calls: AtomicUsize,
        hold_first: Option<Arc<Notify>>,
    }

    impl FakeSource {
        fn new(responses: Vec<FetchResult<Vec<Value>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
                hold_first: None,
            }
        }

        fn holding_first(responses: Vec<FetchResult<Vec<Value>>>, gate: Arc<Notify>) -> Self {
            Self {
                hold_first: Some(gate),
                ..Self::new(responses)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordSource for FakeSource {
        async fn fetch_records(&self, _url: &str) -> FetchResult<Vec<Value>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()));

            if call == 0 {
                if let Some(gate) = &self.hold_first {
                    gate.notified().await;
                }
            }
            response
        }
    }

    fn named(names: &[&str]) -> Vec<Value> {
        names.iter().map(|n| json!({ "name": n })).collect()
    }

    const URL: &str = "http://localhost:8000/api/teams/";

    #[tokio::test]
    async fn test_activate_success() {
        let source = Arc::new(FakeSource::new(vec![Ok(named(&["Marvel", "DC"]))]));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();
        assert!(holder.snapshot().is_loading());

        holder.activate(source.clone(), URL).unwrap().await.unwrap();

        let state = holder.snapshot();
        assert_eq!(
            state,
            ViewState::Ready {
                records: vec![Named(Some("Marvel".into())), Named(Some("DC".into()))]
            }
        );
    }

    #[tokio::test]
    async fn test_status_error_fails_with_empty_records() {
        let source = Arc::new(FakeSource::new(vec![Err(FetchError::Status { status: 500 })]));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();

        holder.activate(source, URL);
        let state = holder.settled().await;

        assert_eq!(state.error(), Some("HTTP error! status: 500"));
        assert!(state.records().is_empty());
    }

    #[tokio::test]
    async fn test_same_url_fetches_once() {
        let source = Arc::new(FakeSource::new(vec![Ok(named(&["Marvel"]))]));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();

        holder.activate(source.clone(), URL).unwrap().await.unwrap();
        assert!(holder.activate(source.clone(), URL).is_none());
        assert_eq!(source.calls(), 1);

        holder
            .activate(source.clone(), "http://other:8000/api/teams/")
            .unwrap()
            .await
            .unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_records() {
        let source = Arc::new(FakeSource::new(vec![
            Ok(named(&["Marvel", "DC"])),
            Err(FetchError::Network("connection reset".to_string())),
        ]));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();

        holder.activate(source.clone(), URL).unwrap().await.unwrap();
        let handle = holder.refresh(source.clone(), URL);
        assert!(holder.snapshot().is_loading());
        assert_eq!(holder.snapshot().records().len(), 2);

        handle.await.unwrap();
        let state = holder.snapshot();
        assert_eq!(state.error(), Some("Network error: connection reset"));
        assert_eq!(state.records().len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_holder_discards_late_response() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeSource::holding_first(
            vec![Ok(named(&["Marvel"]))],
            gate.clone(),
        ));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();
        let rx = holder.subscribe();

        let handle = holder.activate(source.clone(), URL).unwrap();
        drop(holder);
        gate.notify_one();
        handle.await.unwrap();

        assert_eq!(source.calls(), 1);
        assert!(rx.borrow().is_loading());
        assert!(rx.borrow().records().is_empty());
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_discarded() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeSource::holding_first(
            vec![Ok(named(&["stale"])), Ok(named(&["fresh"]))],
            gate.clone(),
        ));
        let holder: ViewStateHolder<Named> = ViewStateHolder::new();

        let first = holder.activate(source.clone(), URL).unwrap();
        holder.refresh(source.clone(), URL).await.unwrap();

        gate.notify_one();
        first.await.unwrap();

        assert_eq!(
            holder.snapshot(),
            ViewState::Ready {
                records: vec![Named(Some("fresh".into()))]
            }
        );
    }
}
