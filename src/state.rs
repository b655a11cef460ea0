//! Search session state and its transitions.
//!
//! [`update`] is the single entry point: it takes the current [`SearchState`]
//! and a [`Msg`], and returns the next state plus the [`Effect`]s the runtime
//! has to carry out. Nothing in here touches the network, the settings store
//! or the browser.
//!
//! ```text
//! Idle --Startup/Submit/Reset--> Loading --FetchCompleted--> Idle
//! ```
//!
//! Every fetch gets a request id. Only the completion matching the most
//! recently issued id is applied, so a slow response to an older search can
//! never overwrite a newer one.

use crate::error::FetchError;
use crate::hn_client::StoryQuery;
use crate::listing::{filter_stories, sort_stories};
use crate::models::{SortField, StoryRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text in the search box; persisted on submit.
    pub search_term: String,
    /// Lowercased filter text, applied at render time only.
    pub filter_query: String,
    pub sort_field: SortField,
    /// Light presentation when true, dark otherwise.
    pub light_on: bool,
    /// Fetched hits, kept ordered by `sort_field`.
    pub stories: Vec<StoryRecord>,
    pub loading: bool,
    /// Id of the last fetch issued; zero before the first one.
    pub latest_request: u64,
    /// Message from the last failed fetch, until dismissed or superseded.
    pub fetch_error: Option<String>,
}

impl SearchState {
    /// State at launch, before [`Msg::Startup`] is processed.
    pub fn new(stored_term: Option<String>, light_on: bool) -> Self {
        Self {
            search_term: stored_term.unwrap_or_default(),
            light_on,
            ..Self::default()
        }
    }

    /// Rows to render: the sorted list narrowed by the filter text.
    pub fn visible_stories(&self) -> Vec<&StoryRecord> {
        filter_stories(&self.stories, &self.filter_query)
    }

    pub fn can_submit(&self) -> bool {
        !self.search_term.is_empty()
    }

    fn begin_fetch(&mut self, query: StoryQuery) -> Effect {
        self.latest_request += 1;
        self.loading = true;
        Effect::Fetch {
            request_id: self.latest_request,
            query,
        }
    }
}

/// Everything that can happen to a search session.
#[derive(Debug)]
pub enum Msg {
    /// Application launched; restore the last search or show the latest stories.
    Startup,
    SearchTermChanged(String),
    FilterChanged(String),
    SubmitSearch,
    /// Back to the latest stories, forgetting the remembered search.
    Reset,
    SortBy(SortField),
    ToggleTheme,
    FetchCompleted {
        request_id: u64,
        result: Result<Vec<StoryRecord>, FetchError>,
    },
    DismissError,
    OpenLink(String),
}

/// Side effects requested by [`update`], executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { request_id: u64, query: StoryQuery },
    /// Write the remembered search term (empty string clears it).
    PersistSearchTerm(String),
    OpenLink(String),
}

pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        Msg::Startup => {
            let query = if state.search_term.is_empty() {
                StoryQuery::Latest
            } else {
                StoryQuery::Search(state.search_term.clone())
            };
            tracing::debug!(?query, "starting session");
            effects.push(state.begin_fetch(query));
        }

        Msg::SearchTermChanged(term) => {
            state.search_term = term;
        }

        Msg::FilterChanged(text) => {
            state.filter_query = text.to_lowercase();
        }

        Msg::SubmitSearch => {
            if !state.can_submit() {
                return (state, effects);
            }
            effects.push(Effect::PersistSearchTerm(state.search_term.clone()));
            let query = StoryQuery::Search(state.search_term.clone());
            effects.push(state.begin_fetch(query));
        }

        Msg::Reset => {
            effects.push(state.begin_fetch(StoryQuery::Latest));
            state.search_term.clear();
            state.filter_query.clear();
            effects.push(Effect::PersistSearchTerm(String::new()));
        }

        Msg::SortBy(field) => {
            state.stories = sort_stories(&state.stories, field);
            state.sort_field = field;
        }

        Msg::ToggleTheme => {
            state.light_on = !state.light_on;
        }

        Msg::FetchCompleted { request_id, result } => {
            if request_id != state.latest_request {
                tracing::debug!(
                    request_id,
                    latest = state.latest_request,
                    "discarding stale response"
                );
                return (state, effects);
            }

            state.loading = false;
            match result {
                Ok(hits) => {
                    state.stories = sort_stories(&hits, state.sort_field);
                    state.fetch_error = None;
                }
                Err(e) => {
                    // Keep showing the previous list
                    tracing::warn!(request_id, error = %e, "fetch failed");
                    state.fetch_error = Some(e.to_string());
                }
            }
        }

        Msg::DismissError => {
            state.fetch_error = None;
        }

        Msg::OpenLink(url) => {
            effects.push(Effect::OpenLink(url));
        }
    }

    (state, effects)
}
