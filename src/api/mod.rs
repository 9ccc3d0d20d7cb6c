//! # API Module
//!
//! This module provides the HTTP endpoints the meal app frontend talks to.
//! Every endpoint is a thin wrapper around [`crate::meal::MealService`]:
//! extract the request parameters, call the service, and wrap the outcome in
//! the response envelope the frontend expects.
//!
//! ## Endpoints
//!
//! - [`search_meals`] - `GET /meals` with optional `query`, `category`,
//!   `area`, and `ingredient` filters; answers the aggregated result
//! - [`fetch_suggestions`] - `GET /meals/suggestions?category=` with up to
//!   4 meals in the category
//! - [`fetch_random_meal`] - `GET /meals/random` with a single meal
//! - [`search_by_id`] - `GET /meals/{id}` with the meal for the id
//! - [`health`] - `GET /health` status probe for monitoring
//!
//! ## Response Envelope
//!
//! Successful responses carry `{"statusCode": 200, "message": ..., "data": ...}`;
//! failures carry the same envelope without `data`. Status codes mirror the
//! upstream failure where one exists, 404 when a single-meal lookup found
//! nothing.
//!
//! ## Related Modules
//!
//! - [`crate::meal`] - the service the handlers delegate to
//! - [`crate::server`] - the router wiring these handlers up

mod health;
mod meals;

pub use health::health;
pub use meals::{fetch_random_meal, fetch_suggestions, search_by_id, search_meals};
