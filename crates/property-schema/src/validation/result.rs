use serde::{Deserialize, Serialize};

use crate::catalog::ValueType;

/// A single, recoverable problem found in a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{label} ('{key}') is required")]
    MissingRequiredField { key: String, label: String },
    #[error("'{key}' expects a {expected} value but received '{found}'")]
    TypeMismatch {
        key: String,
        expected: ValueType,
        found: String,
    },
    #[error("'{key}' value {value} is outside {}", bounds_label(.min, .max))]
    RangeViolation {
        key: String,
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    #[error("'{value}' is not a valid option for '{key}' (allowed: {})", join_values(.allowed))]
    InvalidEnumValue {
        key: String,
        value: String,
        allowed: Vec<String>,
    },
    #[error("amenity '{id}' is not offered for category {category}")]
    InvalidAmenity { id: String, category: String },
    #[error("'{key}' is not a declared field for this category")]
    UnknownField { key: String },
}

impl ValidationError {
    /// Field key or amenity id the error should be rendered next to.
    pub fn subject(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { key, .. }
            | ValidationError::TypeMismatch { key, .. }
            | ValidationError::RangeViolation { key, .. }
            | ValidationError::InvalidEnumValue { key, .. }
            | ValidationError::UnknownField { key } => key,
            ValidationError::InvalidAmenity { id, .. } => id,
        }
    }
}

fn bounds_label(min: &Option<f64>, max: &Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("the range {min}..={max}"),
        (Some(min), None) => format!("the minimum of {min}"),
        (None, Some(max)) => format!("the maximum of {max}"),
        (None, None) => "its bounds".to_string(),
    }
}

fn join_values(values: &[String]) -> String {
    values.join(", ")
}

/// Verdict of a validator: `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
