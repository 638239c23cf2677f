//! End-to-end flow: train once, then run estimates the way the UI does.

use homeworth::application::predictor::PricePredictor;
use homeworth::application::trainer::train;
use homeworth::domain::currency::format_inr;
use homeworth::domain::features::FeatureField;
use std::collections::HashMap;

fn inputs(values: [&str; FeatureField::COUNT]) -> HashMap<FeatureField, String> {
    FeatureField::ALL
        .iter()
        .zip(values)
        .map(|(field, value)| (*field, value.to_string()))
        .collect()
}

#[test]
fn estimates_are_stable_across_trained_models() {
    let first = PricePredictor::new(train().expect("training failed"));
    let second = PricePredictor::new(train().expect("training failed"));

    let raw = inputs(["2200", "4", "3", "8.5", "12", "2", "1", "9"]);
    let a = first.estimate(&raw).expect("estimate failed");
    let b = second.estimate(&raw).expect("estimate failed");

    assert_eq!(a, b);
    assert_eq!(a.display, format_inr(a.rupees));
}

#[test]
fn in_range_inputs_always_produce_a_formatted_price() {
    let predictor = PricePredictor::new(train().expect("training failed"));

    let cases = [
        ["500", "1", "1", "1", "1", "0", "0", "1"],
        ["4000", "5", "4", "10", "20", "2", "1", "10"],
        ["1250.5", "2", "2", "6.2", "7", "1", "0", "4.8"],
    ];

    for case in cases {
        let estimate = predictor.estimate(&inputs(case)).expect("estimate failed");
        assert!(
            estimate
                .display
                .chars()
                .all(|c| c.is_ascii_digit() || c == ','),
            "unexpected characters in {}",
            estimate.display
        );
    }
}

#[test]
fn each_invalid_field_reports_its_own_message() {
    let predictor = PricePredictor::new(train().expect("training failed"));

    let mut missing = inputs(["2200", "4", "3", "8.5", "12", "2", "1", "9"]);
    missing.insert(FeatureField::LocationRating, String::new());
    assert_eq!(
        predictor.estimate(&missing).unwrap_err().to_string(),
        "Please enter a value for Location Rating"
    );

    let not_a_number = inputs(["2200", "four", "3", "8.5", "12", "2", "1", "9"]);
    assert_eq!(
        predictor.estimate(&not_a_number).unwrap_err().to_string(),
        "Please enter a valid number for Bedrooms"
    );

    let negative = inputs(["2200", "4", "3", "8.5", "12", "-1", "1", "9"]);
    assert_eq!(
        predictor.estimate(&negative).unwrap_err().to_string(),
        "Parking Spots cannot be negative"
    );
}

#[test]
fn bigger_homes_cost_more() {
    let predictor = PricePredictor::new(train().expect("training failed"));

    let mut previous = 0u64;
    for sqft in ["800", "1600", "2400", "3200"] {
        let raw = inputs([sqft, "3", "2", "7", "5", "1", "0", "6"]);
        let estimate = predictor.estimate(&raw).expect("estimate failed");
        assert!(
            estimate.rupees > previous,
            "{} sq ft priced at {} <= {}",
            sqft,
            estimate.rupees,
            previous
        );
        previous = estimate.rupees;
    }
}
