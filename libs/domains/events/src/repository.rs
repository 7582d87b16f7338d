//! Event repository trait

use crate::models::{EventDetail, EventSummary};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the event dataset.
///
/// Implementations hand out shared, immutable data; nothing a request does
/// can change what the next request sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every listing entry, in display order
    async fn summaries(&self) -> Arc<[EventSummary]>;

    /// Detail record whose id matches `id` exactly
    async fn find_detail(&self, id: &str) -> Option<EventDetail>;
}
