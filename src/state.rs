use std::sync::Arc;

use crate::{
    config,
    error::TracingReporter,
    meal::MealService,
    themealdb::TheMealDbClient,
};

/// Shared application state handed to every request handler.
pub struct AppState {
    pub meals: MealService<TheMealDbClient, TracingReporter>,
}

impl AppState {
    /// Builds the state from the environment: the TheMealDB client from the
    /// configured base URL and key, failures reported through `tracing`.
    pub fn from_env() -> Arc<Self> {
        let client = TheMealDbClient::new(&config::meal_api_base_url(), &config::meal_api_key());

        Arc::new(Self {
            meals: MealService::new(client, TracingReporter),
        })
    }
}
