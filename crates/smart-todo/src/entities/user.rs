//! User and session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account details as the server returns them (no credentials).
///
/// The client holds a read-only cached copy after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Client-held record of the authenticated user following login.
///
/// Persisted to the session file; cleared on logout without a server call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
