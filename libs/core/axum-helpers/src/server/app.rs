use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{handle_panic, method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::{Config, SwaggerUi};

/// Swagger UI location, relative to the API prefix.
pub const DOCS_PATH: &str = "/docs";

/// Raw OpenAPI document location, relative to the API prefix.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - API routes nested under `prefix` (merged at the root when `prefix` is
///   empty or `/`)
/// - Swagger UI at `{prefix}/docs`, backed by `{prefix}/api-docs/openapi.json`
/// - JSON envelope fallbacks for unmatched routes (404) and unsupported
///   methods (405)
/// - Trailing-slash tolerance on API routes (`/events/` serves `/events`).
///   Docs routes are matched first and untouched, since Swagger UI
///   redirects `/docs` to `/docs/`.
/// - Panic capture returning a 500 envelope
/// - Common middleware (tracing, security headers, CORS, compression)
///
/// Domain routers apply their own state before being passed in.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
pub fn create_router<T>(prefix: &str, apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    let prefix = prefix.trim_end_matches('/');
    let docs = SwaggerUi::new(format!("{prefix}{DOCS_PATH}"))
        .url(format!("{prefix}{OPENAPI_JSON_PATH}"), T::openapi())
        .config(Config::default().try_it_out_enabled(true));

    let api_router = if prefix.is_empty() {
        Router::new().merge(apis)
    } else {
        Router::new().nest(prefix, apis)
    };
    let api_router = api_router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .merge(docs)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback_service(NormalizePath::trim_trailing_slash(api_router))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// This provides:
/// - Graceful shutdown with configurable timeout
/// - Cleanup coordination
/// - Proper error handling and logging
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration
/// * `shutdown_timeout` - Maximum time to wait for cleanup after the signal
/// * `cleanup` - Async cleanup run once shutdown starts
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API", version = "0.0.1"))]
    struct TestDoc;

    fn app(prefix: &str) -> Router {
        let apis = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route(
                "/explode",
                get(|| async {
                    if true {
                        panic!("handler exploded");
                    }
                    "unreachable"
                }),
            );
        create_router::<TestDoc>(prefix, apis, CorsLayer::permissive())
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn message(body: &[u8]) -> String {
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        json["error"]["message"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_prefix() {
        let (status, body) = send(app("/mock"), "GET", "/mock/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pong");

        let (status, _) = send(app("/mock"), "GET", "/ping").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_prefix_merges_at_root() {
        let (status, _) = send(app(""), "GET", "/ping").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app("/"), "GET", "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_api_route() {
        let (status, body) = send(app("/mock"), "GET", "/mock/ping/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pong");

        let (status, body) = send(app(""), "GET", "/ping/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pong");
    }

    #[tokio::test]
    async fn test_docs_keep_their_trailing_slash() {
        let (status, _) = send(app("/mock"), "GET", "/mock/docs/").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app("/mock"), "GET", "/mock/docs").await;
        assert!(status.is_redirection());
    }

    #[tokio::test]
    async fn test_unmatched_route_returns_envelope() {
        let (status, body) = send(app("/mock"), "GET", "/mock/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message(&body), "Not Found");
    }

    #[tokio::test]
    async fn test_wrong_method_returns_405_envelope() {
        let (status, body) = send(app("/mock"), "DELETE", "/mock/ping").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(message(&body), "Method Not Allowed");
    }

    #[tokio::test]
    async fn test_panic_becomes_500_envelope() {
        let (status, body) = send(app("/mock"), "GET", "/mock/explode").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message(&body), "handler exploded");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = send(app("/mock"), "GET", "/mock/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "Test API");
    }
}
