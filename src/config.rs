//! Configuration management for the meal proxy backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage application configuration including the TheMealDB API location,
//! the server port, and the frontend origins allowed by CORS.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

use dotenv;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Intended to run once at startup, before any accessor in this module is
/// called. A missing `.env` file is not an error: in deployed environments
/// the variables are expected to come from the process environment instead.
///
/// # Example
///
/// ```
/// use mealproxy::config;
///
/// config::load_env();
/// let port = config::backend_port();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the base URL of the TheMealDB API.
///
/// Retrieves the `MEAL_API_BASE_URL` environment variable which contains the
/// base URL for TheMealDB endpoints, without the API key path segment.
///
/// # Panics
///
/// Panics if the `MEAL_API_BASE_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let base = meal_api_base_url(); // e.g., "https://www.themealdb.com/api/json/v1"
/// ```
pub fn meal_api_base_url() -> String {
    env::var("MEAL_API_BASE_URL").expect("MEAL_API_BASE_URL must be set")
}

/// Returns the TheMealDB API key.
///
/// Retrieves the `MEAL_API_KEY` environment variable. TheMealDB embeds the
/// key as a path segment between the base URL and the endpoint, so the key
/// is combined with [`meal_api_base_url`] when the client is constructed.
///
/// # Panics
///
/// Panics if the `MEAL_API_KEY` environment variable is not set.
///
/// # Example
///
/// ```
/// let key = meal_api_key(); // e.g., "1" for the public test key
/// ```
pub fn meal_api_key() -> String {
    env::var("MEAL_API_KEY").expect("MEAL_API_KEY must be set")
}

/// Returns the port the HTTP server binds to.
///
/// Retrieves the `BACKEND_PORT` environment variable. Falls back to `5555`
/// when the variable is unset or does not parse as a port number.
///
/// # Example
///
/// ```
/// let port = backend_port(); // e.g., 5555
/// ```
pub fn backend_port() -> u16 {
    env::var("BACKEND_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5555)
}

/// Returns the development frontend origin allowed by CORS.
///
/// Retrieves the `FRONTEND_URL_DEV` environment variable.
///
/// # Panics
///
/// Panics if the `FRONTEND_URL_DEV` environment variable is not set.
///
/// # Example
///
/// ```
/// let origin = frontend_url_dev(); // e.g., "http://localhost:5173"
/// ```
pub fn frontend_url_dev() -> String {
    env::var("FRONTEND_URL_DEV").expect("FRONTEND_URL_DEV must be set")
}

/// Returns the production frontend origin allowed by CORS.
///
/// Retrieves the `FRONTEND_URL_PROD` environment variable.
///
/// # Panics
///
/// Panics if the `FRONTEND_URL_PROD` environment variable is not set.
///
/// # Example
///
/// ```
/// let origin = frontend_url_prod(); // e.g., "https://meals.example.com"
/// ```
pub fn frontend_url_prod() -> String {
    env::var("FRONTEND_URL_PROD").expect("FRONTEND_URL_PROD must be set")
}
