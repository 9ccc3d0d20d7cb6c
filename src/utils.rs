use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::types::MealSummary;

/// Outcome of checking a raw TheMealDB item against the minimal shape the
/// frontend relies on: non-empty `idMeal`, `strMeal`, and `strMealThumb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeCheck {
    Valid(MealSummary),
    Invalid(&'static str),
}

pub fn validate_meal(raw: &Value) -> ShapeCheck {
    let Some(id) = non_empty_str(raw, "idMeal") else {
        return ShapeCheck::Invalid("missing or empty idMeal");
    };
    let Some(name) = non_empty_str(raw, "strMeal") else {
        return ShapeCheck::Invalid("missing or empty strMeal");
    };
    let Some(thumbnail_url) = non_empty_str(raw, "strMealThumb") else {
        return ShapeCheck::Invalid("missing or empty strMealThumb");
    };

    ShapeCheck::Valid(MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: thumbnail_url.to_string(),
    })
}

/// Reads a raw item into a summary without any shape check; absent fields
/// come out as empty strings. Used by the by-id lookup only.
pub fn coerce_meal(raw: &Value) -> MealSummary {
    MealSummary {
        id: str_or_empty(raw, "idMeal"),
        name: str_or_empty(raw, "strMeal"),
        thumbnail_url: str_or_empty(raw, "strMealThumb"),
    }
}

pub fn remove_duplicate_meals(meals: &mut Vec<MealSummary>) {
    let mut seen_ids = HashSet::new();
    meals.retain(|meal| seen_ids.insert(meal.id.clone()));
}

/// Keeps the meals whose id occurred exactly `requested` times across the
/// concatenated per-filter results, deduplicated to the first occurrence.
/// An id that a failed filter could not contribute never reaches the target
/// count, so a single failed filter empties the intersection.
pub fn intersect_meals(meals: Vec<MealSummary>, requested: usize) -> Vec<MealSummary> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    for meal in &meals {
        *occurrences.entry(meal.id.clone()).or_insert(0) += 1;
    }

    let mut seen_ids = HashSet::new();
    meals
        .into_iter()
        .filter(|meal| occurrences[&meal.id] == requested)
        .filter(|meal| seen_ids.insert(meal.id.clone()))
        .collect()
}

fn non_empty_str<'a>(raw: &'a Value, field: &str) -> Option<&'a str> {
    raw.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn str_or_empty(raw: &Value, field: &str) -> String {
    raw.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
