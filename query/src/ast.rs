use serde::{Deserialize, Serialize};

/// Declared type of a property. Drives which operators are legal and what shape of value they take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Number,
    Enumerated,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::String, PropertyType::Number, PropertyType::Enumerated];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Enumerated => "enumerated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorId {
    Equals,      // equals
    GreaterThan, // greater_than
    LessThan,    // less_than
    Any,         // any
    None,        // none
    In,          // in
    Contains,    // contains
}

impl OperatorId {
    pub const ALL: [OperatorId; 7] = [
        OperatorId::Equals,
        OperatorId::GreaterThan,
        OperatorId::LessThan,
        OperatorId::Any,
        OperatorId::None,
        OperatorId::In,
        OperatorId::Contains,
    ];

    /// The wire id, e.g. `greater_than`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorId::Equals => "equals",
            OperatorId::GreaterThan => "greater_than",
            OperatorId::LessThan => "less_than",
            OperatorId::Any => "any",
            OperatorId::None => "none",
            OperatorId::In => "in",
            OperatorId::Contains => "contains",
        }
    }

    /// Label offered to a user when the catalog does not supply one.
    pub fn default_label(&self) -> &'static str {
        match self {
            OperatorId::Equals => "Equals",
            OperatorId::GreaterThan => "Is greater than",
            OperatorId::LessThan => "Is less than",
            OperatorId::Any => "Has any value",
            OperatorId::None => "Has no value",
            OperatorId::In => "Is any of",
            OperatorId::Contains => "Contains",
        }
    }

    /// `any` and `none` only test for presence and never take a value.
    pub fn is_presence_check(&self) -> bool { matches!(self, OperatorId::Any | OperatorId::None) }
}

/// A value as the caller collected it, before it is normalized for the selected property and operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// How a selection names its property: by stable id, or by display name as typed by a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyRef {
    Id(u32),
    Name(String),
}

/// The in-progress (property, operator, value) triple. Any part may still be missing.
///
/// The operator is kept as text: an id that is not a known [`OperatorId`] is not an error, it simply
/// filters nothing out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub property: Option<PropertyRef>,
    pub operator: Option<String>,
    pub value: Option<RawValue>,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    pub fn with_property(mut self, property: impl Into<PropertyRef>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_operator(mut self, operator: impl ToString) -> Self {
        self.operator = Some(operator.to_string());
        self
    }

    pub fn with_value(mut self, value: impl Into<RawValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The operator, if one is set and names a known operator id.
    pub fn operator_id(&self) -> Option<OperatorId> { self.operator.as_deref().and_then(|op| op.parse().ok()) }

    /// True when an operator was given but it is blank.
    pub fn has_blank_operator(&self) -> bool { self.operator.as_deref().is_some_and(|op| op.trim().is_empty()) }
}
