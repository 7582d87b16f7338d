//! Users Domain
//!
//! Stateless user endpoints for the mock API. Nothing is persisted:
//! `POST /` echoes the submitted user back and `GET /` returns two fixed
//! sample users.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_users::handlers;
//!
//! let router = handlers::router(); // mount at /users
//! ```

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{SampleUsers, User};
