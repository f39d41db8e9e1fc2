//! Kata Lab - string calculator kata and async user-fetch exercises.
//!
//! # Architecture
//!
//! - **calculator**: Delimited-number summation with custom delimiters
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **models**: The `User` record served by the user API
//! - **client**: Blocking HTTP client for the user API and its async wrapper
//! - **services**: Cached user lookups
//! - **cache**: TTL cache used by the services
//! - **metrics**: HTTP request counters

pub mod cache;
pub mod calculator;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;

pub use cache::TimedCache;
pub use calculator::{add, Calculator, DelimiterSpec};
pub use client::{AsyncUserClient, AsyncUserClientImpl, UserClient};
pub use config::Config;
pub use error::{CalculatorError, ConfigError, UserApiError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::User;
pub use services::UserService;
