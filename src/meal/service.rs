use serde_json::Value;

use crate::{
    error::{AppError, ErrorReporter, TransportError},
    types::{MealSummary, SearchCriteria},
    utils::{self, ShapeCheck},
};

/// Remote source of meal lookups, one operation per search dimension.
///
/// Implemented by [`crate::themealdb::TheMealDbClient`] in production and by
/// stubs in tests. Each operation returns the raw item list of one remote
/// call or a [`TransportError`] when the call could not be completed.
#[allow(async_fn_in_trait)]
pub trait MealLookup {
    async fn search(&self, query: &str) -> Result<Vec<Value>, TransportError>;
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Value>, TransportError>;
    async fn filter_by_area(&self, area: &str) -> Result<Vec<Value>, TransportError>;
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Value>, TransportError>;
    async fn lookup_by_id(&self, id: &str) -> Result<Vec<Value>, TransportError>;
    async fn fetch_random(&self) -> Result<Vec<Value>, TransportError>;
}

/// Meal search service combining the remote lookup client with the
/// aggregation rules the frontend depends on.
///
/// Both collaborators are passed in explicitly, so the service carries no
/// hidden wiring and tests can substitute either one.
pub struct MealService<C, R> {
    client: C,
    reporter: R,
}

impl<C: MealLookup, R: ErrorReporter> MealService<C, R> {
    pub fn new(client: C, reporter: R) -> Self {
        Self { client, reporter }
    }

    /// Searches for meals matching the provided criteria.
    ///
    /// Issues one remote call per requested filter, all concurrently, and
    /// joins them once every call has settled. A failed call is handed to
    /// the error reporter and contributes an empty result set; it never
    /// fails the search as a whole. Surviving items are concatenated in
    /// call-issue order (query, category, area, ingredient), filtered down
    /// to well-shaped meals, and then combined:
    ///
    /// - one filter or none: duplicates removed by id, first occurrence kept
    /// - several filters: only meals whose id occurred once per requested
    ///   filter are kept, so the result is the intersection of all filters
    ///   and a single failed filter yields an empty result
    ///
    /// # Arguments
    ///
    /// * `criteria` - The search filters; empty fields are not requested
    ///
    /// # Returns
    ///
    /// The matching meals, possibly empty. This operation does not fail.
    pub async fn search_meals(&self, criteria: &SearchCriteria) -> Vec<MealSummary> {
        let requested = criteria.requested_filters();

        let (by_query, by_category, by_area, by_ingredient) = tokio::join!(
            async {
                match given(&criteria.query) {
                    Some(query) => Some(self.client.search(query).await),
                    None => None,
                }
            },
            async {
                match given(&criteria.category) {
                    Some(category) => Some(self.client.filter_by_category(category).await),
                    None => None,
                }
            },
            async {
                match given(&criteria.area) {
                    Some(area) => Some(self.client.filter_by_area(area).await),
                    None => None,
                }
            },
            async {
                match given(&criteria.ingredient) {
                    Some(ingredient) => Some(self.client.filter_by_ingredient(ingredient).await),
                    None => None,
                }
            },
        );

        let mut meals: Vec<MealSummary> = Vec::new();
        for outcome in [by_query, by_category, by_area, by_ingredient] {
            let Some(result) = outcome else {
                continue; // filter not requested
            };

            match result {
                Ok(items) => meals.extend(well_shaped(&items)),
                Err(err) => self.reporter.report(&err),
            }
        }

        if requested > 1 {
            utils::intersect_meals(meals, requested)
        } else {
            utils::remove_duplicate_meals(&mut meals);
            meals
        }
    }

    /// Fetches up to 4 meal suggestions within the given category.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to fetch meal suggestions for
    ///
    /// # Errors
    ///
    /// Propagates the transport error when the remote call fails.
    pub async fn fetch_suggestions(&self, category: &str) -> Result<Vec<MealSummary>, AppError> {
        let items = self.client.filter_by_category(category).await?;

        let mut suggestions: Vec<MealSummary> = well_shaped(&items).collect();
        suggestions.truncate(4);

        Ok(suggestions)
    }

    /// Fetches a single random meal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the remote call yields no
    /// well-shaped meal, and propagates the transport error when the call
    /// itself fails.
    pub async fn fetch_random_meal(&self) -> Result<MealSummary, AppError> {
        let items = self.client.fetch_random().await?;

        well_shaped(&items).next().ok_or(AppError::NotFound)
    }

    /// Fetches the meal with the given id.
    ///
    /// Unlike the other operations this returns the first item as-is, with
    /// no shape check; absent fields come out empty.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the meal to fetch
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no meal has the given id, and
    /// propagates the transport error when the remote call fails.
    pub async fn search_by_id(&self, id: &str) -> Result<MealSummary, AppError> {
        let items = self.client.lookup_by_id(id).await?;

        let meal = items.first().ok_or(AppError::NotFound)?;

        Ok(utils::coerce_meal(meal))
    }
}

fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn well_shaped(items: &[Value]) -> impl Iterator<Item = MealSummary> + '_ {
    items.iter().filter_map(|item| match utils::validate_meal(item) {
        ShapeCheck::Valid(meal) => Some(meal),
        // malformed items are dropped, not reported
        ShapeCheck::Invalid(_) => None,
    })
}
