//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the mock API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loltix API Documentation",
        version = "1.0.0",
        description = "LolTix",
        license(name = "None", url = "https://loltix.com"),
        contact(name = "Swagger", url = "https://swagger.io", email = "Info@SmartBear.com")
    ),
    servers(
        (url = "http://api.loltix.com:8000/mock", description = "Mock server")
    ),
    nest(
        (path = "/events", api = domain_events::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Events", description = "Paginated event listing and event details"),
        (name = "Users", description = "User management")
    )
)]
pub struct ApiDoc;
