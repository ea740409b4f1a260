//! What kind of value a (property, operator) pair needs, and how a raw value is normalized into the
//! operand the predicate compares against.

use crate::model::Property;
use crate::value::{format_number, parse_number};
use sieve_query::{OperatorId, PropertyType, RawValue};
use std::borrow::Cow;

/// The kind of input a selection needs before it can be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape<'a> {
    /// No value is collected. The operator only tests for presence.
    None,
    /// One of the property's declared values, in declared order
    EnumeratedChoice(&'a [String]),
    Numeric,
    FreeText,
    /// Free text holding a comma-separated list
    FreeTextCsv,
}

/// Resolve the value shape for a property and operator. The first matching rule wins:
/// presence operators need nothing, enumerated properties choose from their values, number properties
/// take a number, and string properties take text (comma-separated for `in`).
pub fn value_shape(property: &Property, operator: OperatorId) -> ValueShape<'_> {
    if operator.is_presence_check() {
        return ValueShape::None;
    }
    match property.property_type {
        PropertyType::Enumerated => ValueShape::EnumeratedChoice(&property.values),
        PropertyType::Number => ValueShape::Numeric,
        PropertyType::String if operator == OperatorId::In => ValueShape::FreeTextCsv,
        PropertyType::String => ValueShape::FreeText,
    }
}

impl ValueShape<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ValueShape::None => "no value",
            ValueShape::EnumeratedChoice(_) => "enumerated choice",
            ValueShape::Numeric => "number",
            ValueShape::FreeText => "text",
            ValueShape::FreeTextCsv => "comma-separated text",
        }
    }

    /// Normalize a raw value into the operand for this shape. Absent values become [`Operand::Null`].
    pub fn normalize(&self, raw: Option<&RawValue>) -> Operand {
        let Some(raw) = raw else {
            return Operand::Null;
        };
        match self {
            ValueShape::None => Operand::Null,
            ValueShape::EnumeratedChoice(_) => Operand::Choice(raw_text(raw).into_owned()),
            ValueShape::Numeric => match raw {
                RawValue::Number(n) => Operand::Number(*n),
                RawValue::Text(s) if s.is_empty() => Operand::Null,
                RawValue::List(items) if items.is_empty() => Operand::Null,
                other => Operand::Number(parse_number(&raw_text(other))),
            },
            ValueShape::FreeText => Operand::Text(raw_text(raw).into_owned()),
            ValueShape::FreeTextCsv => match raw {
                RawValue::Text(s) => Operand::List(split_csv(s)),
                RawValue::List(items) => {
                    Operand::List(items.iter().map(|item| item.trim()).filter(|item| !item.is_empty()).map(str::to_string).collect())
                }
                RawValue::Number(n) => Operand::List(vec![format_number(*n)]),
            },
        }
    }

    /// Whether a raw value is something this shape could have collected. Used for diagnostics only;
    /// a value that does not fit is still normalized and evaluated.
    pub fn accepts(&self, raw: &RawValue) -> bool {
        match self {
            ValueShape::None | ValueShape::FreeTextCsv => true,
            ValueShape::EnumeratedChoice(values) => {
                let declared = |s: &str| values.iter().any(|v| v.to_lowercase() == s.to_lowercase());
                match raw {
                    RawValue::Text(s) => declared(s.as_str()),
                    RawValue::Number(n) => declared(format_number(*n).as_str()),
                    RawValue::List(items) => items.iter().all(|item| declared(item.as_str())),
                }
            }
            ValueShape::Numeric => match raw {
                RawValue::Number(_) => true,
                RawValue::Text(s) => s.is_empty() || !parse_number(s).is_nan(),
                RawValue::List(_) => false,
            },
            ValueShape::FreeText => !matches!(raw, RawValue::List(_)),
        }
    }
}

/// Split on commas, trim each piece and drop the empty ones
pub fn split_csv(text: &str) -> Vec<String> { text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect() }

fn raw_text(raw: &RawValue) -> Cow<'_, str> {
    match raw {
        RawValue::Text(s) => Cow::Borrowed(s.as_str()),
        RawValue::Number(n) => Cow::Owned(format_number(*n)),
        RawValue::List(items) => Cow::Owned(items.join(",")),
    }
}

/// A normalized filter value, one case per value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// No value: from the `none` shape, an empty numeric input, or nothing collected at all
    Null,
    Choice(String),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl Operand {
    /// String form used by the case-insensitive comparisons
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Operand::Null => Cow::Borrowed("null"),
            Operand::Choice(s) | Operand::Text(s) => Cow::Borrowed(s.as_str()),
            Operand::Number(n) => Cow::Owned(format_number(*n)),
            Operand::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Numeric form used by `greater_than` and `less_than`. A missing number reads as zero.
    pub fn number(&self) -> f64 {
        match self {
            Operand::Null => 0.0,
            Operand::Number(n) => *n,
            Operand::Choice(s) | Operand::Text(s) => parse_number(s),
            Operand::List(items) => parse_number(&items.join(",")),
        }
    }

    /// Case-insensitive membership for `in`. A list is matched item by item; a single string is first
    /// split on commas. Any other operand has no members.
    pub fn has_member(&self, folded: &str) -> bool {
        match self {
            Operand::List(items) => items.iter().any(|item| item.to_lowercase() == folded),
            Operand::Choice(s) | Operand::Text(s) => s.split(',').any(|piece| piece.trim().to_lowercase() == folded),
            Operand::Null | Operand::Number(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> (Property, Property, Property) {
        (
            Property::new(0, "name", PropertyType::String),
            Property::new(1, "weight", PropertyType::Number),
            Property::enumerated(2, "category", ["tools", "electronics"]),
        )
    }

    #[test]
    fn test_presence_operators_short_circuit() {
        let (name, weight, category) = properties();
        for property in [&name, &weight, &category] {
            assert_eq!(value_shape(property, OperatorId::Any), ValueShape::None);
            assert_eq!(value_shape(property, OperatorId::None), ValueShape::None);
        }
    }

    #[test]
    fn test_shape_precedence() {
        let (name, weight, category) = properties();
        let values = vec!["tools".to_string(), "electronics".to_string()];

        for op in [OperatorId::Equals, OperatorId::In, OperatorId::Contains, OperatorId::GreaterThan] {
            assert_eq!(value_shape(&category, op), ValueShape::EnumeratedChoice(&values));
            assert_eq!(value_shape(&weight, op), ValueShape::Numeric);
        }
        assert_eq!(value_shape(&name, OperatorId::In), ValueShape::FreeTextCsv);
        assert_eq!(value_shape(&name, OperatorId::Equals), ValueShape::FreeText);
        assert_eq!(value_shape(&name, OperatorId::Contains), ValueShape::FreeText);
    }

    #[test]
    fn test_normalize_numeric() {
        let shape = ValueShape::Numeric;
        assert_eq!(shape.normalize(Some(&RawValue::from("10"))), Operand::Number(10.0));
        assert_eq!(shape.normalize(Some(&RawValue::from(2.5))), Operand::Number(2.5));
        assert_eq!(shape.normalize(Some(&RawValue::from(""))), Operand::Null);
        assert_eq!(shape.normalize(None), Operand::Null);
        assert!(matches!(shape.normalize(Some(&RawValue::from("ten"))), Operand::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_normalize_csv() {
        let shape = ValueShape::FreeTextCsv;
        assert_eq!(shape.normalize(Some(&RawValue::from(" headphones, Hammer ,, "))), Operand::List(vec!["headphones".into(), "Hammer".into()]));
        assert_eq!(shape.normalize(Some(&RawValue::from(vec![" a ", ""]))), Operand::List(vec!["a".into()]));
        assert_eq!(shape.normalize(Some(&RawValue::from(""))), Operand::List(vec![]));
    }

    #[test]
    fn test_normalize_keeps_text_unmodified() {
        assert_eq!(ValueShape::FreeText.normalize(Some(&RawValue::from(" Phone "))), Operand::Text(" Phone ".into()));
        assert_eq!(ValueShape::EnumeratedChoice(&[]).normalize(Some(&RawValue::from("tools"))), Operand::Choice("tools".into()));
        assert_eq!(ValueShape::None.normalize(Some(&RawValue::from("ignored"))), Operand::Null);
    }

    #[test]
    fn test_accepts() {
        let (_, _, category) = properties();
        let shape = value_shape(&category, OperatorId::Equals);
        assert!(shape.accepts(&RawValue::from("Tools")));
        assert!(!shape.accepts(&RawValue::from("garden")));
        assert!(ValueShape::Numeric.accepts(&RawValue::from("")));
        assert!(!ValueShape::Numeric.accepts(&RawValue::from("heavy")));
        assert!(!ValueShape::FreeText.accepts(&RawValue::from(vec!["a"])));
    }

    #[test]
    fn test_operand_members() {
        assert!(Operand::List(vec!["Headphones".into()]).has_member("headphones"));
        assert!(Operand::Choice("tools".into()).has_member("tools"));
        assert!(Operand::Text("a, Tools".into()).has_member("tools"));
        assert!(!Operand::Number(5.0).has_member("5"));
        assert!(!Operand::Null.has_member("null"));
    }
}
