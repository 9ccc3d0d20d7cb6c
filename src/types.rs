use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

// TheMealDB wraps every endpoint response in a `meals` envelope; `null`
// stands for the empty result set.
#[derive(Debug, Clone, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredient: Option<String>,
}

impl SearchCriteria {
    /// Number of filters actually requested. Missing fields and empty
    /// strings do not count.
    pub fn requested_filters(&self) -> usize {
        [&self.query, &self.category, &self.area, &self.ingredient]
            .iter()
            .filter(|field| matches!(field, Some(value) if !value.is_empty()))
            .count()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsParams {
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            status_code: 200,
            message: message.to_string(),
            data,
        }
    }
}
