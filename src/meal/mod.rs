//! High-level meal search operations built on top of the remote lookup
//! client. The service owns the multi-criteria aggregation logic and the
//! single-call operations the HTTP endpoints expose.

mod service;

pub use service::{MealLookup, MealService};
