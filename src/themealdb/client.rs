use reqwest::Client;
use serde_json::Value;

use crate::{error::TransportError, meal::MealLookup, types::MealsResponse};

/// HTTP client for the TheMealDB Web API.
///
/// Holds a shared `reqwest` client and the fully resolved base URL,
/// including the API key path segment TheMealDB expects between the base
/// URL and the endpoint name. One instance is created at startup and shared
/// across requests.
#[derive(Debug, Clone)]
pub struct TheMealDbClient {
    http: Client,
    base_url: String,
}

impl TheMealDbClient {
    /// Creates a client for the given API base URL and key.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API, e.g. `https://www.themealdb.com/api/json/v1`
    /// * `api_key` - Key appended as a path segment, e.g. `1` for the public test key
    ///
    /// # Example
    ///
    /// ```
    /// let client = TheMealDbClient::new("https://www.themealdb.com/api/json/v1", "1");
    /// ```
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}/{}", base_url.trim_end_matches('/'), api_key),
        }
    }

    /// Sends a GET request to the given endpoint and decodes the response.
    ///
    /// Builds the endpoint URL from the configured base, appends the query
    /// parameters, and unwraps the `meals` envelope. A `null` envelope is
    /// flattened to an empty item list.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request cannot be sent, the
    /// upstream answers with a non-success status, or the body cannot be
    /// decoded.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Value>, TransportError> {
        let api_url = format!("{uri}/{endpoint}", uri = &self.base_url);

        let response = self
            .http
            .get(&api_url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<MealsResponse>().await?;

        Ok(json.meals.unwrap_or_default())
    }
}

impl MealLookup for TheMealDbClient {
    /// Searches for meals by the given query string.
    async fn search(&self, query: &str) -> Result<Vec<Value>, TransportError> {
        self.fetch("search.php", &[("s", query)]).await
    }

    /// Filters meals by the given category.
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Value>, TransportError> {
        self.fetch("filter.php", &[("c", category)]).await
    }

    /// Filters meals by the given area.
    async fn filter_by_area(&self, area: &str) -> Result<Vec<Value>, TransportError> {
        self.fetch("filter.php", &[("a", area)]).await
    }

    /// Filters meals by the given ingredient.
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Value>, TransportError> {
        self.fetch("filter.php", &[("i", ingredient)]).await
    }

    /// Fetches a meal by the given id; the result set has 0 or 1 items.
    async fn lookup_by_id(&self, id: &str) -> Result<Vec<Value>, TransportError> {
        self.fetch("lookup.php", &[("i", id)]).await
    }

    /// Fetches a random meal; the result set typically has 1 item.
    async fn fetch_random(&self) -> Result<Vec<Value>, TransportError> {
        self.fetch("random.php", &[]).await
    }
}
