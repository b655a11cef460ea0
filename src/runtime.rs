use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::db::{KeyValueStore, SEARCH_TERM_KEY};
use crate::hn_client::{StoryQuery, StorySource};
use crate::state::{update, Effect, Msg, SearchState};

/// Owns the search state and carries out the effects `update` asks for.
///
/// Fetches run on their own thread and report back over a channel, which the
/// UI drains once per frame with [`Runtime::poll`].
pub struct Runtime {
    state: SearchState,
    source: Arc<dyn StorySource>,
    store: Box<dyn KeyValueStore>,
    completions_tx: Sender<Msg>,
    completions_rx: Receiver<Msg>,
}

impl Runtime {
    /// Reads the remembered search term and builds the initial state.
    ///
    /// Call `dispatch(Msg::Startup)` afterwards to issue the first fetch.
    pub fn new(source: Arc<dyn StorySource>, store: Box<dyn KeyValueStore>, light_on: bool) -> Self {
        let stored_term = match store.get(SEARCH_TERM_KEY) {
            Ok(term) => term,
            Err(e) => {
                tracing::warn!(error = %e, "could not read remembered search term");
                None
            }
        };

        let (completions_tx, completions_rx) = channel();

        Self {
            state: SearchState::new(stored_term, light_on),
            source,
            store,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            self.execute(effect);
        }
    }

    /// Applies every finished fetch. Returns true if any arrived.
    pub fn poll(&mut self) -> bool {
        let mut received = false;
        while let Ok(msg) = self.completions_rx.try_recv() {
            self.dispatch(msg);
            received = true;
        }
        received
    }

    /// Blocks until one fetch finishes or `timeout` passes.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match self.completions_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::Fetch { request_id, query } => self.spawn_fetch(request_id, query),
            Effect::PersistSearchTerm(term) => {
                if let Err(e) = self.store.set(SEARCH_TERM_KEY, &term) {
                    tracing::warn!(error = %e, "could not save search term");
                }
            }
            Effect::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(%url, error = %e, "failed to open URL");
                }
            }
        }
    }

    fn spawn_fetch(&self, request_id: u64, query: StoryQuery) {
        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();

        thread::spawn(move || {
            let result = source.fetch_stories(&query);
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(Msg::FetchCompleted { request_id, result });
        });
    }
}
