use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Discussion page for an item, also used as the link target when a story has no url.
pub const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// One hit from the search API.
///
/// Some hits come back with `null` titles or points (deleted or flagged
/// items), so those fields decode leniently instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "objectID")]
    pub object_id: String,
}

impl StoryRecord {
    /// Where the "link" column points: the story url, or its discussion page.
    pub fn link_url(&self) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.discussion_url(),
        }
    }

    pub fn discussion_url(&self) -> String {
        format!("{}{}", ITEM_URL, self.object_id)
    }

    /// Date part of `created_at`, e.g. `2021-01-01`.
    pub fn created_date(&self) -> &str {
        self.created_at
            .split('T')
            .next()
            .unwrap_or_default()
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Envelope returned by both search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<StoryRecord>,
}

/// Column the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Author,
    #[default]
    Points,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Title,
        SortField::Author,
        SortField::Points,
        SortField::CreatedAt,
    ];

    /// Numeric and date columns list the largest/newest first.
    pub fn is_descending(self) -> bool {
        matches!(self, SortField::Points | SortField::CreatedAt)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Points => "points",
            SortField::CreatedAt => "created_at",
        }
    }

    /// Column heading shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            SortField::CreatedAt => "date",
            other => other.as_str(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
