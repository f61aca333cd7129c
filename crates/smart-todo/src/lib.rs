//! Smart To-Do terminal client.
//!
//! A thin client for the Smart To-Do REST API: authentication, a dashboard
//! of task statistics, and CRUD over personal to-do items with category,
//! deadline, and reminder metadata. All business logic lives server-side;
//! this crate fetches wholesale, derives views in memory, and mutates only
//! via round trips.

pub mod api;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod ui;

pub use errors::{ClientError, ClientResult};
