use serde_json::json;

use super::common::*;
use crate::validation::{ListingSubmission, ListingValidator, UnknownFieldPolicy};

#[test]
fn verdict_combines_both_validators() {
    let registry = registry();
    let submission = ListingSubmission {
        specifications: payload(json!({ "capacidad": 7, "bano_privado": true })),
        amenities: vec!["wifi".to_string(), "piscina".to_string()],
    };

    let verdict = ListingValidator::new(&registry)
        .validate("ROOM", &submission)
        .expect("registered");

    assert!(!verdict.valid);
    assert!(!verdict.specifications.valid);
    assert!(!verdict.amenities.valid);
    let subjects: Vec<&str> = verdict.errors().map(|error| error.subject()).collect();
    assert_eq!(subjects, vec!["capacidad", "piscina"]);
}

#[test]
fn valid_submission_passes() {
    let registry = registry();
    let submission: ListingSubmission = serde_json::from_value(json!({
        "specifications": {
            "area": 250.5,
            "topografia": "inclinado",
            "uso_suelo": "agricola",
            "referencia": "Km 12 carretera central"
        },
        "amenities": ["agua", "acceso_vehicular"]
    }))
    .expect("submission deserializes");

    let verdict = ListingValidator::new(&registry)
        .with_unknown_fields(UnknownFieldPolicy::Reject)
        .validate("LAND", &submission)
        .expect("registered");
    assert!(verdict.valid, "unexpected errors: {:?}", verdict.errors().collect::<Vec<_>>());
}

#[test]
fn submission_parts_default_to_empty() {
    let submission: ListingSubmission =
        serde_json::from_value(json!({})).expect("empty submission deserializes");
    assert!(submission.specifications.is_empty());
    assert!(submission.amenities.is_empty());
}

#[test]
fn unknown_category_is_fatal_for_the_whole_submission() {
    let registry = registry();
    let result = ListingValidator::new(&registry).validate("SPACESHIP", &ListingSubmission::default());
    assert!(result.is_err());
}
