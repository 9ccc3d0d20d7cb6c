//! # TheMealDB Integration Module
//!
//! This module provides the HTTP client for the TheMealDB Web API, the
//! single upstream source this backend proxies. It handles URL construction,
//! request dispatch, and response decoding for every lookup the service
//! offers, and hides the API-key path segment TheMealDB requires.
//!
//! ## Endpoints
//!
//! The client covers the lookup endpoints consumed by the meal service:
//!
//! - `search.php?s=` - free-text meal search
//! - `filter.php?c=` - filter by category
//! - `filter.php?a=` - filter by area
//! - `filter.php?i=` - filter by ingredient
//! - `lookup.php?i=` - lookup a single meal by id
//! - `random.php` - fetch a random meal
//!
//! ## Response Handling
//!
//! Every endpoint answers with a `{"meals": [...]}` envelope where `meals`
//! is `null` when nothing matched; the client flattens that to an empty
//! item list. Items are kept as raw JSON values because TheMealDB is not
//! consistent about which fields each endpoint returns; the shape check in
//! [`crate::utils`] decides what is usable downstream.
//!
//! ## Error Handling
//!
//! Non-success HTTP statuses and transport failures are converted into
//! [`crate::error::TransportError`], carrying the upstream status code when
//! one was received. The client does not retry; the calling layer decides
//! whether a failed lookup is fatal for the request.

mod client;

pub use client::TheMealDbClient;
