use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry key identifying a property category (e.g. `HOUSE`, `LAND`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Closed set of kinds a dynamic attribute value may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    Text,
    Decimal,
    Boolean,
    Enumerated,
}

impl ValueType {
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Text => "text",
            ValueType::Decimal => "decimal",
            ValueType::Boolean => "boolean",
            ValueType::Enumerated => "enumerated",
        }
    }

    /// Input widget a form renderer should generate for this kind of value.
    pub fn widget(&self) -> WidgetKind {
        match self {
            ValueType::Integer | ValueType::Decimal => WidgetKind::Stepper,
            ValueType::Boolean => WidgetKind::Switch,
            ValueType::Enumerated => WidgetKind::Picker,
            ValueType::Text => WidgetKind::TextInput,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Stepper,
    Switch,
    Picker,
    TextInput,
}

/// One selectable literal of an enumerated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Describes one dynamic attribute of a category and the constraints on its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub value_type: ValueType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl FieldDescriptor {
    fn new(key: &str, label: &str, value_type: ValueType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value_type,
            required: false,
            placeholder: None,
            min: None,
            max: None,
            options: Vec::new(),
            unit: None,
        }
    }

    pub fn integer(key: &str, label: &str) -> Self {
        Self::new(key, label, ValueType::Integer)
    }

    pub fn decimal(key: &str, label: &str) -> Self {
        Self::new(key, label, ValueType::Decimal)
    }

    pub fn boolean(key: &str, label: &str) -> Self {
        Self::new(key, label, ValueType::Boolean)
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, ValueType::Text)
    }

    pub fn enumerated(key: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let mut field = Self::new(key, label, ValueType::Enumerated);
        field.options = options
            .iter()
            .map(|(value, label)| FieldOption::new(*value, *label))
            .collect();
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn allowed_values(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }

    pub fn widget(&self) -> WidgetKind {
        self.value_type.widget()
    }
}

/// A boolean feature a listing of the category may advertise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityDescriptor {
    pub id: String,
    pub label: String,
}

impl AmenityDescriptor {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Field and amenity declarations for a single property category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySchema {
    pub category: Category,
    pub label: String,
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
    pub amenities: Vec<AmenityDescriptor>,
}

impl CategorySchema {
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn has_amenity(&self, id: &str) -> bool {
        self.amenities.iter().any(|amenity| amenity.id == id)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            category: self.category.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
        }
    }
}

/// Listing-friendly projection of a schema without its descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub label: String,
    pub description: String,
}
