//! Domain facades for the Smart To-Do client.
//!
//! These facades combine the REST adapters with session state and the pure
//! view logic the screens share.

mod auth;
mod config;
mod session;
mod tasks;
mod views;

pub use auth::AuthDomain;
pub use config::{client_dir, ConfigStore};
pub use session::SessionStore;
pub use tasks::TasksDomain;
pub use views::{
    recent_tasks, sort_tasks, CategoryFilter, SortKey, SortOrder, StatusFilter, TaskFilter,
    TaskStats,
};
