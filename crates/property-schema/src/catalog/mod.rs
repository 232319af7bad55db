//! Property category catalog: typed field and amenity declarations per category.
//!
//! The registry is built once (from the hand-authored standard catalog or from a
//! versioned [`CatalogDocument`]) and is read-only afterwards, so a single instance
//! can be shared across threads without locking.

mod document;
pub mod domain;
mod standard;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

pub use document::{CatalogDocument, CatalogError, SUPPORTED_DOCUMENT_VERSIONS};
pub use domain::{
    AmenityDescriptor, Category, CategorySchema, CategorySummary, FieldDescriptor, FieldOption,
    ValueType, WidgetKind,
};
pub use standard::STANDARD_CATALOG_VERSION;

/// Raised when a caller asks for a category the catalog does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property category '{category}'")]
pub struct UnknownCategory {
    pub category: String,
}

/// Immutable lookup table from category code to its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRegistry {
    version: u32,
    schemas: Vec<CategorySchema>,
    index: BTreeMap<Category, usize>,
}

impl SchemaRegistry {
    /// Registry populated with the hand-authored standard catalog.
    pub fn standard() -> Self {
        Self::index(STANDARD_CATALOG_VERSION, standard::standard_schemas())
    }

    /// Process-wide standard registry, built on first use.
    pub fn shared() -> &'static SchemaRegistry {
        static SHARED: OnceLock<SchemaRegistry> = OnceLock::new();
        SHARED.get_or_init(|| {
            let registry = SchemaRegistry::standard();
            debug!(
                version = registry.version,
                categories = registry.schemas.len(),
                "standard property catalog initialized"
            );
            registry
        })
    }

    /// Build a registry from a catalog document after checking its invariants.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        document::check_document(&document)?;
        Ok(Self::index(document.version, document.categories))
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Self::from_document(CatalogDocument::from_json(raw)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            version = registry.version,
            categories = registry.schemas.len(),
            "property catalog loaded from document"
        );
        Ok(registry)
    }

    fn index(version: u32, schemas: Vec<CategorySchema>) -> Self {
        let index = schemas
            .iter()
            .enumerate()
            .map(|(position, schema)| (schema.category.clone(), position))
            .collect();
        Self {
            version,
            schemas,
            index,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Resolve the schema registered for `category`.
    pub fn schema(&self, category: &str) -> Result<&CategorySchema, UnknownCategory> {
        match self.index.get(&Category::from(category)) {
            Some(position) => Ok(&self.schemas[*position]),
            None => {
                warn!(category, "lookup for unregistered property category");
                Err(UnknownCategory {
                    category: category.to_string(),
                })
            }
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(&Category::from(category))
    }

    /// Categories in catalog declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.schemas.iter().map(|schema| &schema.category)
    }

    pub fn schemas(&self) -> &[CategorySchema] {
        &self.schemas
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.schemas.iter().map(CategorySchema::summary).collect()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: self.version,
            categories: self.schemas.clone(),
        }
    }
}
