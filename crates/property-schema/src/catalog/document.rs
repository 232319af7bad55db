use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::domain::{Category, CategorySchema, ValueType};

/// Catalog document revisions this build knows how to read.
pub const SUPPORTED_DOCUMENT_VERSIONS: &[u32] = &[1];

/// Versioned catalog artifact shared by every consumer of the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    pub categories: Vec<CategorySchema>,
}

impl CatalogDocument {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse { source })
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(|source| CatalogError::Serialize { source })
    }
}

/// Reasons a catalog document is refused at load time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read catalog document {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog document is not valid JSON: {source}")]
    Parse { source: serde_json::Error },
    #[error("unable to serialize catalog document: {source}")]
    Serialize { source: serde_json::Error },
    #[error("catalog version {found} is not supported (supported: {supported:?})")]
    UnsupportedVersion { found: u32, supported: Vec<u32> },
    #[error("category {0} is declared more than once")]
    DuplicateCategory(Category),
    #[error("category {category} declares field '{key}' more than once")]
    DuplicateField { category: Category, key: String },
    #[error("category {category} declares amenity '{id}' more than once")]
    DuplicateAmenity { category: Category, id: String },
    #[error("enumerated field '{key}' in {category} has no options")]
    MissingOptions { category: Category, key: String },
    #[error("field '{key}' in {category} is {value_type} but declares options")]
    UnexpectedOptions {
        category: Category,
        key: String,
        value_type: ValueType,
    },
    #[error("field '{key}' in {category} has min {min} greater than max {max}")]
    InvertedBounds {
        category: Category,
        key: String,
        min: f64,
        max: f64,
    },
    #[error("field '{key}' in {category} has a non-finite bound")]
    NonFiniteBound { category: Category, key: String },
}

pub(crate) fn check_document(document: &CatalogDocument) -> Result<(), CatalogError> {
    if !SUPPORTED_DOCUMENT_VERSIONS.contains(&document.version) {
        return Err(CatalogError::UnsupportedVersion {
            found: document.version,
            supported: SUPPORTED_DOCUMENT_VERSIONS.to_vec(),
        });
    }

    let mut categories = BTreeSet::new();
    for schema in &document.categories {
        if !categories.insert(&schema.category) {
            return Err(CatalogError::DuplicateCategory(schema.category.clone()));
        }
        check_schema(schema)?;
    }

    Ok(())
}

fn check_schema(schema: &CategorySchema) -> Result<(), CatalogError> {
    let category = &schema.category;

    let mut keys = BTreeSet::new();
    for field in &schema.fields {
        if !keys.insert(field.key.as_str()) {
            return Err(CatalogError::DuplicateField {
                category: category.clone(),
                key: field.key.clone(),
            });
        }

        match (field.value_type, field.options.is_empty()) {
            (ValueType::Enumerated, true) => {
                return Err(CatalogError::MissingOptions {
                    category: category.clone(),
                    key: field.key.clone(),
                });
            }
            (value_type, false) if value_type != ValueType::Enumerated => {
                return Err(CatalogError::UnexpectedOptions {
                    category: category.clone(),
                    key: field.key.clone(),
                    value_type,
                });
            }
            _ => {}
        }

        let bounds = [field.min, field.max];
        if bounds.iter().flatten().any(|bound| !bound.is_finite()) {
            return Err(CatalogError::NonFiniteBound {
                category: category.clone(),
                key: field.key.clone(),
            });
        }

        if let (Some(min), Some(max)) = (field.min, field.max) {
            if min > max {
                return Err(CatalogError::InvertedBounds {
                    category: category.clone(),
                    key: field.key.clone(),
                    min,
                    max,
                });
            }
        }
    }

    let mut ids = BTreeSet::new();
    for amenity in &schema.amenities {
        if !ids.insert(amenity.id.as_str()) {
            return Err(CatalogError::DuplicateAmenity {
                category: category.clone(),
                id: amenity.id.clone(),
            });
        }
    }

    Ok(())
}
