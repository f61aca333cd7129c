//! REST adapters for the remote Smart To-Do API.

mod client;

pub use client::{
    ApiClient, AuthResponse, Credentials, NewUser, ProfileUpdate, TaskPayload,
};
