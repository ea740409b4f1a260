use crate::value::Value;
use serde::{Deserialize, Serialize};
use sieve_query::{OperatorId, PropertyType};

/// A typed attribute that products may carry a value for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Declared choices, in order. Only meaningful for enumerated properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Property {
    pub fn new(id: u32, name: impl Into<String>, property_type: PropertyType) -> Self {
        Self { id, name: name.into(), property_type, values: Vec::new() }
    }

    pub fn enumerated<I, S>(id: u32, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { id, name: name.into(), property_type: PropertyType::Enumerated, values: values.into_iter().map(Into::into).collect() }
    }

    /// Name with its first letter capitalised, as shown in column headers
    pub fn display_name(&self) -> String { capitalize(&self.name) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: OperatorId,
    #[serde(alias = "text")]
    pub label: String,
}

impl Operator {
    pub fn new(id: OperatorId, label: impl Into<String>) -> Self { Self { id, label: label.into() } }

    /// Every operator with its default label, in catalog order
    pub fn standard() -> Vec<Operator> { OperatorId::ALL.into_iter().map(|id| Operator::new(id, id.default_label())).collect() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property_id: u32,
    pub value: Value,
}

impl PropertyValue {
    pub fn new(property_id: u32, value: impl Into<Value>) -> Self { Self { property_id, value: value.into() } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(default)]
    pub property_values: Vec<PropertyValue>,
}

impl Product {
    pub fn new(id: u32, property_values: impl IntoIterator<Item = PropertyValue>) -> Self {
        Self { id, property_values: property_values.into_iter().collect() }
    }

    /// The recorded value for a property. `None` means nothing was recorded, which is not the same as a
    /// recorded [`Value::Null`].
    pub fn value(&self, property_id: u32) -> Option<&Value> {
        self.property_values.iter().find(|pv| pv.property_id == property_id).map(|pv| &pv.value)
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
