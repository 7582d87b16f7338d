//! HTTP handlers for Events API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_helpers::errors::responses::{InternalServerErrorResponse, NotFoundResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{
    EventDetail, EventId, EventPage, EventSummary, OtherShow, PageQuery, PageRequest, Performer,
    ShowDay, ShowTime, SocialLinks, Venue,
};
use crate::repository::EventRepository;
use crate::service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, get_event),
    components(
        schemas(
            EventPage, EventSummary, ShowDay, EventDetail, EventId, Venue,
            ShowTime, Performer, OtherShow, SocialLinks
        ),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Events", description = "Paginated event listing and event details")
    )
)]
pub struct ApiDoc;

/// Create the events router
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events))
        .route("/{id}", get(get_event))
        .with_state(shared_service)
}

/// List events one page at a time
///
/// Missing or non-numeric `offset`/`pageSize` fall back to 0 and 2.
#[utoipa::path(
    get,
    path = "",
    tag = "Events",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of events", body = EventPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<EventPage> {
    let query = PageQuery::from_pairs(pairs);
    let page = service.list_events(PageRequest::from(&query)).await;
    Json(page)
}

/// Get an event by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id, matched exactly", example = "123")
    ),
    responses(
        (status = 200, description = "Event found", body = EventDetail),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(id): Path<String>,
) -> EventResult<Json<EventDetail>> {
    let event = service.get_event(&id).await?;
    Ok(Json(event))
}
