//! Property category schema registry and listing specification validation.
//!
//! [`catalog::SchemaRegistry`] declares, per property category, the typed
//! attributes and amenities a listing may carry. The validators in
//! [`validation`] check submitted data against it without side effects, and
//! [`router::catalog_router`] exposes both over HTTP for the server copy.

pub mod catalog;
pub mod config;
pub mod error;
pub mod router;
pub mod service;
pub mod telemetry;
pub mod validation;

pub use catalog::{CategorySchema, SchemaRegistry, UnknownCategory};
pub use service::CatalogService;
pub use validation::{
    validate_amenities, validate_specification, ListingSubmission, ListingVerdict,
    SpecificationPayload, UnknownFieldPolicy, ValidationError, ValidationResult,
};
