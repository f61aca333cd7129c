//! Client settings.

use serde::{Deserialize, Serialize};

/// Default API base path when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Persisted client settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Base URL of the Smart To-Do API
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "apiUrl")]
    pub api_url: Option<String>,
}
