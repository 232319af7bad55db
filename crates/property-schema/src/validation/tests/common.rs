use serde_json::{json, Value};

use crate::catalog::{
    AmenityDescriptor, Category, CatalogDocument, CategorySchema, FieldDescriptor, SchemaRegistry,
    ValueType,
};
use crate::validation::SpecificationPayload;

pub(super) fn registry() -> SchemaRegistry {
    SchemaRegistry::standard()
}

pub(super) fn payload(value: Value) -> SpecificationPayload {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("payload fixture must be a JSON object, got {other}"),
    }
}

/// Payload with an in-range value for every required field of `schema`.
pub(super) fn required_only_payload(schema: &CategorySchema) -> SpecificationPayload {
    schema
        .required_fields()
        .map(|field| {
            let value = match field.value_type {
                ValueType::Integer => json!(field.min.unwrap_or(1.0).ceil() as i64),
                ValueType::Decimal => json!(field.min.unwrap_or(1.0)),
                ValueType::Boolean => json!(true),
                ValueType::Text => json!("texto de prueba"),
                ValueType::Enumerated => json!(field.options[0].value),
            };
            (field.key.clone(), value)
        })
        .collect()
}

/// Small hand-made registry so validator behavior is checked independently of
/// the standard catalog contents.
pub(super) fn fabricated_registry() -> SchemaRegistry {
    SchemaRegistry::from_document(CatalogDocument {
        version: 1,
        categories: vec![CategorySchema {
            category: Category::from("CABIN"),
            label: "Cabaña".to_string(),
            description: "Cabaña de campo".to_string(),
            fields: vec![
                FieldDescriptor::integer("camas", "Camas")
                    .required()
                    .min(1.0)
                    .max(6.0),
                FieldDescriptor::decimal("altitud", "Altitud")
                    .min(0.0)
                    .max(5000.0)
                    .unit("msnm"),
                FieldDescriptor::boolean("chimenea", "Chimenea").required(),
                FieldDescriptor::enumerated(
                    "acceso",
                    "Acceso",
                    &[("asfaltado", "Asfaltado"), ("trocha", "Trocha")],
                )
                .required(),
                FieldDescriptor::text("indicaciones", "Indicaciones"),
            ],
            amenities: vec![
                AmenityDescriptor::new("leña", "Leña"),
                AmenityDescriptor::new("agua", "Agua"),
            ],
        }],
    })
    .expect("fabricated catalog is valid")
}
