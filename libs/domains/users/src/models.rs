//! User models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as submitted by the client. Both fields are optional and no
/// identity is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "name": "Alex", "email": "fake@gmail.com" }))]
pub struct User {
    /// Name of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Fixed pair returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleUsers {
    pub user_one: User,
    pub user_two: User,
}

impl Default for SampleUsers {
    fn default() -> Self {
        Self {
            user_one: User::new("Alex", "fake@gmail.com"),
            user_two: User::new("Chad", "fakeagain@gmail.com"),
        }
    }
}
