//! Meal Proxy Backend Library
//!
//! This library implements a small backend-for-frontend that proxies the
//! TheMealDB recipe lookup API, normalizes its responses, and exposes a REST
//! surface to the meal app frontend. It includes modules for the remote API
//! client, the search aggregation service, HTTP endpoints, configuration,
//! and error handling.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served to the frontend
//! - `config` - Configuration management and environment variables
//! - `error` - Error types, status mapping, and failure reporting
//! - `meal` - High-level meal search and aggregation service
//! - `server` - HTTP server setup, routing, and CORS
//! - `state` - Shared application state wired from configuration
//! - `themealdb` - TheMealDB Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use mealproxy::{Res, config, server};
//!
//! #[tokio::main]
//! async fn main() -> Res<()> {
//!     config::load_env();
//!     server::start_api_server(None).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod meal;
pub mod server;
pub mod state;
pub mod themealdb;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for setup and wiring code
/// using a boxed dynamic error trait object. Request-path code uses the
/// typed errors in [`crate::error`] instead; this alias is for places where
/// the concrete failure type does not matter, such as server startup.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
