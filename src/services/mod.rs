//! Application service layer.
//!
//! Services hold the logic that sits between the CLI and the HTTP client.

mod user_service;

pub use user_service::UserService;
