use std::io::Write;

use tempfile::NamedTempFile;

use restaurant_rs::clock::FixedClock;
use restaurant_rs::config::load_restaurant;
use restaurant_rs::error::RestaurantError;

fn write_definition(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_loaded_restaurant_behaves_like_built_one() {
    let file = write_definition(
        r#"{
            "name": "Amelie's cafe",
            "location": "Chennai",
            "opening_time": "10:30:00",
            "closing_time": "22:00:00",
            "menu": [
                {"name": "Sweet corn soup", "price": 119},
                {"name": "Vegetable lasagne", "price": 269}
            ]
        }"#,
    );

    let restaurant = load_restaurant(file.path())
        .unwrap()
        .with_clock(FixedClock(chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap()));

    assert!(restaurant.is_restaurant_open());
    assert_eq!(
        restaurant
            .calculate_order_total(&["Sweet corn soup", "Vegetable lasagne"])
            .unwrap(),
        388
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_restaurant(dir.path().join("absent.json"));
    assert!(matches!(result, Err(RestaurantError::Io(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    let file = write_definition(r#"{"name": "Broken""#);
    assert!(matches!(
        load_restaurant(file.path()),
        Err(RestaurantError::Json(_))
    ));
}

#[test]
fn test_bad_time_is_json_error() {
    let file = write_definition(
        r#"{
            "name": "Amelie's cafe",
            "location": "Chennai",
            "opening_time": "half past ten",
            "closing_time": "22:00:00"
        }"#,
    );
    assert!(matches!(
        load_restaurant(file.path()),
        Err(RestaurantError::Json(_))
    ));
}

#[test]
fn test_inverted_hours_are_invalid_input() {
    let file = write_definition(
        r#"{
            "name": "Amelie's cafe",
            "location": "Chennai",
            "opening_time": "22:00:00",
            "closing_time": "10:30:00"
        }"#,
    );
    assert!(matches!(
        load_restaurant(file.path()),
        Err(RestaurantError::InvalidInput(_))
    ));
}
