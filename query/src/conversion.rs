use crate::ast::{OperatorId, PropertyRef, PropertyType, RawValue, Selection};
use crate::error::ParseError;
use crate::parser;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Only the exact wire id names an operator; `EQUALS` or ` in ` is an unrecognized id.
impl FromStr for OperatorId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperatorId::ALL.into_iter().find(|op| op.as_str() == s).ok_or_else(|| ParseError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

impl FromStr for PropertyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL.into_iter().find(|ty| ty.as_str() == s).ok_or_else(|| ParseError::UnknownPropertyType(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyRef::Id(id) => write!(f, "#{}", id),
            PropertyRef::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Digits name a property id; anything else is a property name.
impl FromStr for PropertyRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        Ok(match trimmed.parse::<u32>() {
            Ok(id) => PropertyRef::Id(id),
            Err(_) => PropertyRef::Name(trimmed.to_string()),
        })
    }
}

impl From<u32> for PropertyRef {
    fn from(id: u32) -> Self { PropertyRef::Id(id) }
}
impl From<&str> for PropertyRef {
    fn from(name: &str) -> Self { PropertyRef::Name(name.to_string()) }
}
impl From<String> for PropertyRef {
    fn from(name: String) -> Self { PropertyRef::Name(name) }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self { RawValue::Text(s.to_string()) }
}
impl From<String> for RawValue {
    fn from(s: String) -> Self { RawValue::Text(s) }
}
impl From<f64> for RawValue {
    fn from(n: f64) -> Self { RawValue::Number(n) }
}
impl From<i64> for RawValue {
    fn from(n: i64) -> Self { RawValue::Number(n as f64) }
}
impl From<i32> for RawValue {
    fn from(n: i32) -> Self { RawValue::Number(n as f64) }
}
impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self { RawValue::List(items) }
}
impl From<Vec<&str>> for RawValue {
    fn from(items: Vec<&str>) -> Self { RawValue::List(items.into_iter().map(str::to_string).collect()) }
}

impl<'a> TryFrom<&'a str> for Selection {
    type Error = ParseError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> { parser::parse_selection(value) }
}
impl TryFrom<String> for Selection {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> { parser::parse_selection(&value) }
}
