//! Data models for the user API.

pub mod user;

pub use user::User;
