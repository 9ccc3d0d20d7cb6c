use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    error::AppError,
    state::AppState,
    types::{ApiEnvelope, MealSummary, SearchCriteria, SuggestionsParams},
};

pub async fn search_meals(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<SearchCriteria>,
) -> Json<ApiEnvelope<Vec<MealSummary>>> {
    let meals = state.meals.search_meals(&criteria).await;

    Json(ApiEnvelope::ok("Meals successfully retrieved", meals))
}

pub async fn fetch_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionsParams>,
) -> Result<Json<ApiEnvelope<Vec<MealSummary>>>, AppError> {
    let suggestions = state.meals.fetch_suggestions(&params.category).await?;

    Ok(Json(ApiEnvelope::ok(
        "Meal suggestions successfully retrieved",
        suggestions,
    )))
}

pub async fn fetch_random_meal(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiEnvelope<MealSummary>>, AppError> {
    let meal = state.meals.fetch_random_meal().await?;

    Ok(Json(ApiEnvelope::ok(
        "Random meal successfully retrieved",
        meal,
    )))
}

pub async fn search_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<MealSummary>>, AppError> {
    let meal = state.meals.search_by_id(&id).await?;

    Ok(Json(ApiEnvelope::ok("Meal successfully retrieved", meal)))
}
