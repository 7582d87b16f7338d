//! Event domain models

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Offset used when the query omits it or it is not a number.
pub const DEFAULT_OFFSET: usize = 0;

/// Page size used when the query omits it or it is not a positive number.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// One show day in a listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShowDay {
    /// Human-readable day, e.g. "Wednesday, August 17th"
    pub day: String,
    /// Comma-separated show times for that day
    pub times: String,
}

/// Listing entry returned by the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[schema(example = "11111")]
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub description: String,
    pub venue_name: String,
    pub venue_location: String,
    pub show_dates: Vec<ShowDay>,
    #[schema(example = "TICKETS $12.50+")]
    pub cta_text: String,
}

/// Identifier of a detail record. Serialized as a bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EventId {
    Numeric(u64),
    Text(String),
}

impl EventId {
    /// Exact textual match against a raw path segment.
    ///
    /// `Numeric(123)` matches `"123"` only; `"0123"`, `" 123"` and `""` do
    /// not match.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Numeric(n) => n.to_string() == raw,
            Self::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    /// Latitude, longitude
    #[schema(value_type = Vec<f64>, example = json!([32.2, -110.6]))]
    pub position: [f64; 2],
    pub location: String,
    pub address: String,
    pub logo_url: String,
    pub web_url: String,
    pub phone_number: String,
}

/// A dated performance with its ticket link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowTime {
    /// ISO-8601 timestamp with offset, kept verbatim
    #[schema(example = "2020-08-17T15:00:27.87+00:20")]
    pub date: String,
    pub ticket_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub avatar_url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OtherShow {
    pub image: String,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Full event record returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub name: String,
    pub id: EventId,
    pub image_url: String,
    pub date_start: String,
    pub date_end: String,
    pub venue: Venue,
    pub show_dates: Vec<ShowTime>,
    pub details: Vec<String>,
    pub description_text: Vec<String>,
    pub video_link: String,
    pub performers: Vec<Performer>,
    pub other_shows: Vec<OtherShow>,
    pub social_links: SocialLinks,
}

/// Raw pagination query, exactly as the client sent it.
///
/// Values stay textual so that junk input degrades to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based index of the first entry (default 0)
    #[param(value_type = Option<u64>, example = 0)]
    pub offset: Option<String>,
    /// Maximum entries to return (default 2)
    #[param(value_type = Option<u64>, example = 2)]
    pub page_size: Option<String>,
}

impl PageQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "offset" => &mut query.offset,
                "pageSize" => &mut query.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Normalized pagination request. `page_size` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    page_size: usize,
}

impl PageRequest {
    /// A `page_size` of zero is replaced by [`DEFAULT_PAGE_SIZE`].
    pub fn new(offset: usize, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { offset, page_size }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_PAGE_SIZE)
    }
}

impl From<&PageQuery> for PageRequest {
    fn from(query: &PageQuery) -> Self {
        let offset = query
            .offset
            .as_deref()
            .and_then(leading_number)
            .unwrap_or(DEFAULT_OFFSET);
        let page_size = query
            .page_size
            .as_deref()
            .and_then(leading_number)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(offset, page_size)
    }
}

/// Permissive integer parse: leading whitespace and an optional `+` are
/// skipped, then the leading run of ASCII digits is read. Saturates at
/// `usize::MAX`. `"3abc"` gives 3; `"abc"`, `"-1"` and `""` give `None`.
fn leading_number(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let mut digits = unsigned.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    Some(digits.fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    }))
}

/// One page of the event listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    /// Entries in this page, in dataset order
    pub results: Vec<EventSummary>,
    /// Size of the full dataset
    pub total: usize,
    /// Offset to request next; never exceeds `total`
    pub offset: usize,
    /// Whether entries exist past this page
    pub has_more: bool,
}
