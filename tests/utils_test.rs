use mealproxy::types::MealSummary;
use mealproxy::utils::*;
use serde_json::json;

// Helper function to create a test meal summary
fn create_test_meal(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
    }
}

#[test]
fn test_validate_meal_accepts_well_shaped_item() {
    let raw = json!({
        "idMeal": "52959",
        "strMeal": "Baked salmon with fennel & tomatoes",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
        "strCategory": "Seafood"
    });

    let checked = validate_meal(&raw);

    // Extra fields are ignored, the three required ones are mapped
    assert_eq!(
        checked,
        ShapeCheck::Valid(MealSummary {
            id: "52959".to_string(),
            name: "Baked salmon with fennel & tomatoes".to_string(),
            thumbnail_url: "https://www.themealdb.com/images/media/meals/1548772327.jpg"
                .to_string(),
        })
    );
}

#[test]
fn test_validate_meal_rejects_missing_fields() {
    // Missing id
    let raw = json!({"strMeal": "Meal", "strMealThumb": "thumb.jpg"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty idMeal")
    );

    // Missing name
    let raw = json!({"idMeal": "1", "strMealThumb": "thumb.jpg"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty strMeal")
    );

    // Missing thumbnail
    let raw = json!({"idMeal": "1", "strMeal": "Meal"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty strMealThumb")
    );
}

#[test]
fn test_validate_meal_rejects_empty_and_non_string_fields() {
    // Empty string id is as unusable as a missing one
    let raw = json!({"idMeal": "", "strMeal": "Meal", "strMealThumb": "thumb.jpg"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty idMeal")
    );

    // Numeric id is not a string id
    let raw = json!({"idMeal": 52959, "strMeal": "Meal", "strMealThumb": "thumb.jpg"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty idMeal")
    );

    // null name
    let raw = json!({"idMeal": "1", "strMeal": null, "strMealThumb": "thumb.jpg"});
    assert_eq!(
        validate_meal(&raw),
        ShapeCheck::Invalid("missing or empty strMeal")
    );
}

#[test]
fn test_coerce_meal_does_not_reject_anything() {
    // A complete item maps all three fields
    let raw = json!({"idMeal": "42", "strMeal": "Meal", "strMealThumb": "thumb.jpg"});
    let meal = coerce_meal(&raw);
    assert_eq!(meal.id, "42");
    assert_eq!(meal.name, "Meal");
    assert_eq!(meal.thumbnail_url, "thumb.jpg");

    // A malformed item still comes through, with empty fields
    let raw = json!({"strSource": "somewhere"});
    let meal = coerce_meal(&raw);
    assert_eq!(meal.id, "");
    assert_eq!(meal.name, "");
    assert_eq!(meal.thumbnail_url, "");
}

#[test]
fn test_remove_duplicate_meals() {
    let mut meals = vec![
        create_test_meal("id1", "Meal 1"),
        create_test_meal("id2", "Meal 2"),
        create_test_meal("id1", "Meal 1 Duplicate"), // Duplicate
        create_test_meal("id3", "Meal 3"),
    ];

    remove_duplicate_meals(&mut meals);

    // Should have 3 unique meals
    assert_eq!(meals.len(), 3);

    // Should contain the first occurrence of each unique ID
    let ids: Vec<&String> = meals.iter().map(|m| &m.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
    assert_eq!(meals[0].name, "Meal 1");
}

#[test]
fn test_intersect_meals_keeps_ids_present_in_every_filter() {
    // Two filters: first returned 1,2,3 and second returned 2,3,4
    let meals = vec![
        create_test_meal("1", "One"),
        create_test_meal("2", "Two"),
        create_test_meal("3", "Three"),
        create_test_meal("2", "Two"),
        create_test_meal("3", "Three"),
        create_test_meal("4", "Four"),
    ];

    let intersection = intersect_meals(meals, 2);

    // Only 2 and 3 appear in both, in first-occurrence order
    let ids: Vec<&String> = intersection.iter().map(|m| &m.id).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn test_intersect_meals_requires_exact_occurrence_count() {
    // Id 7 occurs twice in the first filter and once in the second, so the
    // tally overshoots the target of 2 and the id is dropped
    let meals = vec![
        create_test_meal("7", "Seven"),
        create_test_meal("7", "Seven"),
        create_test_meal("7", "Seven"),
    ];

    let intersection = intersect_meals(meals, 2);

    assert!(intersection.is_empty());
}

#[test]
fn test_intersect_meals_empty_input() {
    let intersection = intersect_meals(Vec::new(), 3);

    // No occurrences, no result
    assert!(intersection.is_empty());
}
