//! Event service layer

use crate::error::{EventError, EventResult};
use crate::models::{EventDetail, EventPage, PageRequest};
use crate::pagination::window;
use crate::repository::EventRepository;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Listing and lookup over an [`EventRepository`]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of the listing. Never fails; out-of-range requests yield
    /// an empty page.
    #[instrument(skip(self))]
    pub async fn list_events(&self, request: PageRequest) -> EventPage {
        let summaries = self.repository.summaries().await;
        let page = window(&summaries[..], request);
        debug!(
            returned = page.items.len(),
            total = page.total,
            has_more = page.has_more,
            "Listed events"
        );

        EventPage {
            results: page.items.to_vec(),
            total: page.total,
            offset: page.next_offset,
            has_more: page.has_more,
        }
    }

    /// Detail record for `id`, matched exactly against its textual form
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> EventResult<EventDetail> {
        self.repository
            .find_detail(id)
            .await
            .ok_or_else(|| EventError::NotFound { id: id.to_string() })
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventSummary, ShowDay};
    use crate::repository::MockEventRepository;
    use crate::seed::SeedEventRepository;

    fn summary(id: &str) -> EventSummary {
        EventSummary {
            id: id.to_string(),
            name: format!("Comic {id}"),
            avatar_url: String::new(),
            description: String::new(),
            venue_name: String::new(),
            venue_location: String::new(),
            show_dates: vec![ShowDay {
                day: "Friday".to_string(),
                times: "8:00 PM".to_string(),
            }],
            cta_text: String::new(),
        }
    }

    fn mock_with(ids: &[&str]) -> MockEventRepository {
        let data: Arc<[EventSummary]> = ids.iter().map(|id| summary(id)).collect();
        let mut mock = MockEventRepository::new();
        mock.expect_summaries()
            .returning(move || Arc::clone(&data));
        mock
    }

    fn ids(page: &EventPage) -> Vec<&str> {
        page.results.iter().map(|s| s.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_events_first_page() {
        let service = EventService::new(mock_with(&["a", "b", "c"]));
        let page = service.list_events(PageRequest::default()).await;

        assert_eq!(ids(&page), ["a", "b"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.offset, 2);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_list_events_past_end() {
        let service = EventService::new(mock_with(&["a", "b", "c"]));
        let page = service.list_events(PageRequest::new(7, 2)).await;

        assert!(page.results.is_empty());
        assert_eq!(page.offset, 3);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_list_events_is_idempotent() {
        let service = EventService::new(SeedEventRepository::new());
        let request = PageRequest::new(1, 2);

        let first = service.list_events(request).await;
        let second = service.list_events(request).await;
        assert_eq!(first, second);

        let full = service.list_events(PageRequest::new(0, 100)).await;
        assert_eq!(full.results.len(), 4);
    }

    #[tokio::test]
    async fn test_get_event_found() {
        let detail = SeedEventRepository::new().find_detail("123").await.unwrap();
        let expected = detail.clone();

        let mut mock = MockEventRepository::new();
        mock.expect_find_detail()
            .withf(|id| id == "123")
            .times(1)
            .returning(move |_| Some(detail.clone()));

        let service = EventService::new(mock);
        assert_eq!(service.get_event("123").await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let mut mock = MockEventRepository::new();
        mock.expect_find_detail().returning(|_| None);

        let service = EventService::new(mock);
        let err = service.get_event("999").await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { id } if id == "999"));
    }

    #[tokio::test]
    async fn test_get_event_rejects_near_misses() {
        let service = EventService::new(SeedEventRepository::new());
        for id in ["", "abc", "0123", "123 ", "11111"] {
            assert!(service.get_event(id).await.is_err(), "id {id:?} should miss");
        }
        assert!(service.get_event("124").await.is_ok());
    }
}
