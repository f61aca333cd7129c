//! Task entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Task category values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Work,
    Personal,
    Study,
    #[default]
    Other,
}

impl Category {
    /// Display name, as sent on the wire
    pub fn name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Study => "Study",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "study" => Ok(Self::Study),
            "other" => Ok(Self::Other),
            _ => Err(ClientError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// A to-do item as the server returns it.
///
/// Owned by the server; the client holds an in-memory snapshot fetched
/// wholesale per command and mutates only via round trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-issued identifier
    #[serde(alias = "_id")]
    pub id: String,

    /// Brief, descriptive title
    pub title: String,

    /// Task category
    #[serde(default)]
    pub category: Category,

    /// Completion flag, toggled independently of the deadline
    #[serde(default, rename = "isCompleted")]
    pub is_completed: bool,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Optional reminder time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<DateTime<Utc>>,

    /// Server-side creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Overdue means past deadline and still pending. Computed client-side
    /// and never persisted.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed && self.deadline.is_some_and(|d| d < now)
    }
}
