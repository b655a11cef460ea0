#![allow(dead_code)]

use std::sync::Mutex;

use hn_search::{FetchError, StoryQuery, StoryRecord, StorySource};

pub fn story(title: &str, author: &str, points: i64, created_at: &str, id: &str) -> StoryRecord {
    StoryRecord {
        title: title.to_string(),
        author: author.to_string(),
        url: None,
        points,
        created_at: created_at.to_string(),
        object_id: id.to_string(),
    }
}

pub fn foo_bar() -> Vec<StoryRecord> {
    vec![
        story("Foo", "alice", 5, "2021-01-01T00:00:00Z", "1"),
        story("Bar", "bob", 9, "2020-01-01T00:00:00Z", "2"),
    ]
}

pub fn mixed() -> Vec<StoryRecord> {
    vec![
        story("Rust 2.0 released", "steveklabnik", 812, "2023-05-01T12:00:00Z", "10"),
        story("Ask HN: Favorite editor?", "pg", 43, "2022-11-20T08:30:00Z", "11"),
        story("rustc internals", "Manishearth", 120, "2023-01-15T00:00:00Z", "12"),
        story("A tour of Zig", "andrewrk", 43, "2021-07-04T16:45:00Z", "13"),
        story("Show HN: tiny db", "rusty", 7, "2024-02-29T23:59:59Z", "14"),
        story("", "ghost", 0, "2019-03-03T03:03:03Z", "15"),
    ]
}

/// Answers every query with the same canned result and remembers what it was asked.
pub struct FakeSource {
    queries: Mutex<Vec<StoryQuery>>,
    fail_with: Option<u16>,
    hits: Vec<StoryRecord>,
}

impl FakeSource {
    pub fn returning(hits: Vec<StoryRecord>) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            fail_with: None,
            hits,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            fail_with: Some(status),
            hits: Vec::new(),
        }
    }

    pub fn queries(&self) -> Vec<StoryQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl StorySource for FakeSource {
    fn fetch_stories(&self, query: &StoryQuery) -> Result<Vec<StoryRecord>, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.fail_with {
            Some(status) => Err(FetchError::Status(status)),
            None => Ok(self.hits.clone()),
        }
    }
}
