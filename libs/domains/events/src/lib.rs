//! Events Domain
//!
//! Read-only event listing and detail lookup over a fixed seed dataset.
//!
//! - [`pagination::window`] cuts an offset/page-size window out of the
//!   listing and reports the next offset and whether more entries exist
//! - [`EventService::get_event`] resolves a detail record by exact id
//!
//! # Example
//!
//! ```ignore
//! use domain_events::{handlers, EventService, SeedEventRepository};
//!
//! let service = EventService::new(SeedEventRepository::new());
//! let router = handlers::router(service); // mount at /events
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::*;
pub use pagination::{Window, window};
pub use repository::EventRepository;
pub use seed::SeedEventRepository;
pub use service::EventService;
