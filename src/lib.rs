//! HN Search: a native client for the Hacker News Algolia search API.
//!
//! The library holds everything except the window: the HTTP client, the
//! client-side sort and filter, the search state machine, the runtime that
//! executes its effects, the remembered-search store and the egui view.
//!
//! ```text
//! view ──Msg──▶ runtime ──update()──▶ state
//!                 │  ▲
//!        Effect::Fetch  Msg::FetchCompleted
//!                 ▼  │
//!              worker thread ──▶ hn_client
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod hn_client;
pub mod listing;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod state;
pub mod theme;
pub mod view;

pub use config::Config;
pub use db::{KeyValueStore, MemoryStore, SqliteStore, SEARCH_TERM_KEY};
pub use error::{ConfigError, FetchError, StoreError};
pub use hn_client::{HackerNewsClient, StoryQuery, StorySource};
pub use listing::{filter_stories, sort_stories};
pub use models::{SortField, StoryRecord};
pub use runtime::Runtime;
pub use state::{update, Effect, Msg, SearchState};
