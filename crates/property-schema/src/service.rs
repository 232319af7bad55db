use serde::Serialize;
use tracing::info;

use crate::catalog::{CategorySchema, CategorySummary, SchemaRegistry, UnknownCategory};
use crate::validation::{ListingSubmission, ListingValidator, ListingVerdict, UnknownFieldPolicy};

/// Server-side owner of the catalog: answers schema lookups and performs the
/// authoritative validation of listing submissions.
#[derive(Debug, Clone)]
pub struct CatalogService {
    registry: SchemaRegistry,
    unknown_fields: UnknownFieldPolicy,
}

/// Catalog index returned to clients so they can detect a stale local copy.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogIndex {
    pub version: u32,
    pub categories: Vec<CategorySummary>,
}

impl CatalogService {
    pub fn new(registry: SchemaRegistry, unknown_fields: UnknownFieldPolicy) -> Self {
        Self {
            registry,
            unknown_fields,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    pub fn index(&self) -> CatalogIndex {
        CatalogIndex {
            version: self.registry.version(),
            categories: self.registry.summaries(),
        }
    }

    pub fn schema(&self, category: &str) -> Result<&CategorySchema, UnknownCategory> {
        self.registry.schema(category)
    }

    pub fn validate(
        &self,
        category: &str,
        submission: &ListingSubmission,
    ) -> Result<ListingVerdict, UnknownCategory> {
        let verdict = ListingValidator::new(&self.registry)
            .with_unknown_fields(self.unknown_fields)
            .validate(category, submission)?;

        info!(
            category,
            valid = verdict.valid,
            violations = verdict.errors().count(),
            "listing submission validated"
        );
        Ok(verdict)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(SchemaRegistry::standard(), UnknownFieldPolicy::default())
    }
}
