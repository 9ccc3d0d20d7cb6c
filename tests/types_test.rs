use mealproxy::types::{ApiEnvelope, MealSummary, MealsResponse, SearchCriteria};
use serde_json::json;

#[test]
fn test_meal_summary_uses_themealdb_field_names_on_the_wire() {
    let meal = MealSummary {
        id: "52959".to_string(),
        name: "Baked salmon".to_string(),
        thumbnail_url: "https://www.themealdb.com/images/media/meals/1548772327.jpg".to_string(),
    };

    let wire = serde_json::to_value(&meal).unwrap();

    // The frontend expects the upstream names unchanged
    assert_eq!(
        wire,
        json!({
            "idMeal": "52959",
            "strMeal": "Baked salmon",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
        })
    );
}

#[test]
fn test_meals_response_null_envelope_is_empty() {
    let response: MealsResponse = serde_json::from_value(json!({"meals": null})).unwrap();
    assert!(response.meals.is_none());

    let response: MealsResponse =
        serde_json::from_value(json!({"meals": [{"idMeal": "1"}]})).unwrap();
    assert_eq!(response.meals.unwrap().len(), 1);
}

#[test]
fn test_search_criteria_counts_only_non_empty_filters() {
    let criteria = SearchCriteria {
        query: Some("chicken".to_string()),
        category: Some("".to_string()),
        area: None,
        ingredient: Some("Rice".to_string()),
    };

    // The empty category does not count
    assert_eq!(criteria.requested_filters(), 2);

    assert_eq!(SearchCriteria::default().requested_filters(), 0);
}

#[test]
fn test_api_envelope_serializes_camel_case() {
    let envelope = ApiEnvelope::ok("Meals successfully retrieved", vec!["x"]);

    let wire = serde_json::to_value(&envelope).unwrap();

    assert_eq!(
        wire,
        json!({
            "statusCode": 200,
            "message": "Meals successfully retrieved",
            "data": ["x"],
        })
    );
}
