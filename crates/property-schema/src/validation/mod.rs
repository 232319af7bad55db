//! Validators that check user-submitted listing data against a category schema.
//!
//! Both validators collect every violation in one pass. The only early exit is an
//! unknown category, which is returned as `Err` because it means the caller and
//! the catalog disagree about which categories exist.

mod result;
mod rules;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::{SchemaRegistry, UnknownCategory};
pub use result::{ValidationError, ValidationResult};

/// Attribute key to untyped submitted value.
pub type SpecificationPayload = BTreeMap<String, Value>;

/// How payload keys that match no field descriptor are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Skip undeclared keys so newer clients can send fields an older catalog lacks.
    #[default]
    Ignore,
    /// Report each undeclared key as [`ValidationError::UnknownField`].
    Reject,
}

impl UnknownFieldPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" | "tolerate" => Some(Self::Ignore),
            "reject" | "strict" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Checks specification payloads against the field descriptors of a category.
#[derive(Debug, Clone, Copy)]
pub struct SpecificationValidator<'r> {
    registry: &'r SchemaRegistry,
    unknown_fields: UnknownFieldPolicy,
}

impl<'r> SpecificationValidator<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            unknown_fields: UnknownFieldPolicy::default(),
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn validate(
        &self,
        category: &str,
        payload: &SpecificationPayload,
    ) -> Result<ValidationResult, UnknownCategory> {
        let schema = self.registry.schema(category)?;
        let mut errors = Vec::new();

        for field in schema.required_fields() {
            if !rules::is_provided(payload.get(&field.key)) {
                errors.push(ValidationError::MissingRequiredField {
                    key: field.key.clone(),
                    label: field.label.clone(),
                });
            }
        }

        for field in &schema.fields {
            let Some(value) = payload.get(&field.key) else {
                continue;
            };
            if !rules::is_provided(Some(value)) {
                continue;
            }
            if let Some(error) = rules::check_value(field, value) {
                errors.push(error);
            }
        }

        if self.unknown_fields == UnknownFieldPolicy::Reject {
            errors.extend(
                payload
                    .keys()
                    .filter(|key| schema.field(key).is_none())
                    .map(|key| ValidationError::UnknownField { key: key.clone() }),
            );
        }

        debug!(
            category,
            submitted = payload.len(),
            violations = errors.len(),
            "specification payload validated"
        );
        Ok(ValidationResult::from_errors(errors))
    }
}

/// Checks amenity selections against the amenities a category offers.
#[derive(Debug, Clone, Copy)]
pub struct AmenityValidator<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> AmenityValidator<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Each undeclared id is reported once, in submission order. Any subset of the
    /// declared amenities, including none, is valid.
    pub fn validate<S: AsRef<str>>(
        &self,
        category: &str,
        ids: &[S],
    ) -> Result<ValidationResult, UnknownCategory> {
        let schema = self.registry.schema(category)?;
        let mut reported = BTreeSet::new();
        let mut errors = Vec::new();

        for id in ids.iter().map(AsRef::as_ref) {
            if !schema.has_amenity(id) && reported.insert(id) {
                errors.push(ValidationError::InvalidAmenity {
                    id: id.to_string(),
                    category: schema.category.to_string(),
                });
            }
        }

        debug!(
            category,
            selected = ids.len(),
            violations = errors.len(),
            "amenity selection validated"
        );
        Ok(ValidationResult::from_errors(errors))
    }
}

/// Everything a listing form submits for its category-specific section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    #[serde(default)]
    pub specifications: SpecificationPayload,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Combined verdict for both halves of a [`ListingSubmission`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingVerdict {
    pub category: String,
    pub valid: bool,
    pub specifications: ValidationResult,
    pub amenities: ValidationResult,
}

impl ListingVerdict {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.specifications
            .errors
            .iter()
            .chain(self.amenities.errors.iter())
    }
}

/// Runs the specification and amenity validators over one submission.
#[derive(Debug, Clone, Copy)]
pub struct ListingValidator<'r> {
    specifications: SpecificationValidator<'r>,
    amenities: AmenityValidator<'r>,
}

impl<'r> ListingValidator<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            specifications: SpecificationValidator::new(registry),
            amenities: AmenityValidator::new(registry),
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.specifications = self.specifications.with_unknown_fields(policy);
        self
    }

    pub fn validate(
        &self,
        category: &str,
        submission: &ListingSubmission,
    ) -> Result<ListingVerdict, UnknownCategory> {
        let specifications = self
            .specifications
            .validate(category, &submission.specifications)?;
        let amenities = self.amenities.validate(category, &submission.amenities)?;

        Ok(ListingVerdict {
            category: category.to_string(),
            valid: specifications.valid && amenities.valid,
            specifications,
            amenities,
        })
    }
}

/// Validate a specification payload with the default unknown-field policy.
pub fn validate_specification(
    registry: &SchemaRegistry,
    category: &str,
    payload: &SpecificationPayload,
) -> Result<ValidationResult, UnknownCategory> {
    SpecificationValidator::new(registry).validate(category, payload)
}

pub fn validate_amenities<S: AsRef<str>>(
    registry: &SchemaRegistry,
    category: &str,
    ids: &[S],
) -> Result<ValidationResult, UnknownCategory> {
    AmenityValidator::new(registry).validate(category, ids)
}
