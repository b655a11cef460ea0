//! Client-side ordering and narrowing of the fetched result list.
//!
//! Both functions are pure: they never touch the list held in state. Sorting
//! returns a fresh vector that replaces it; filtering returns borrowed rows
//! for a single render.

use std::cmp::Ordering;

use crate::models::{SortField, StoryRecord};

/// Orders `list` by `field`.
///
/// `points` and `created_at` sort descending, `title` and `author` ascending by
/// plain string comparison. `created_at` is ISO-8601, so comparing the strings
/// orders by time. The sort is stable, so sorting twice by the same field
/// changes nothing.
pub fn sort_stories(list: &[StoryRecord], field: SortField) -> Vec<StoryRecord> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by(a, b, field);
        if field.is_descending() {
            ord.reverse()
        } else {
            ord
        }
    });
    sorted
}

fn compare_by(a: &StoryRecord, b: &StoryRecord, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Author => a.author.cmp(&b.author),
        SortField::Points => a.points.cmp(&b.points),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Rows whose title or author starts with `query`, ignoring case.
///
/// An empty query keeps every row.
pub fn filter_stories<'a>(list: &'a [StoryRecord], query: &str) -> Vec<&'a StoryRecord> {
    let query = query.to_lowercase();
    list.iter()
        .filter(|story| {
            story.title.to_lowercase().starts_with(&query)
                || story.author.to_lowercase().starts_with(&query)
        })
        .collect()
}
