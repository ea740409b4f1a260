use crate::ast::{OperatorId, PropertyRef, RawValue, Selection};
use crate::error::ParseError;
use crate::grammar::{Rule, SelectionParser};
use pest::iterators::Pair;
use pest::Parser;
use tracing::trace;

/// Parse a textual selection such as `Weight > 10`, `'Product Name' contains phone` or
/// `Category in ['tools', 'garden']`.
///
/// Only the property is required. Operator words are matched ignoring case and normalized to their id; an
/// unknown word is kept verbatim so the filter engine can treat it as the pass-through it is.
pub fn parse_selection(input: &str) -> Result<Selection, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let pairs = SelectionParser::parse(Rule::Selection, input)?;
    let mut selection = Selection::default();

    for pair in pairs {
        match pair.as_rule() {
            Rule::Property => selection.property = Some(parse_property(single_inner(pair, "property")?)?),
            Rule::Operator => selection.operator = Some(parse_operator(single_inner(pair, "operator")?)?),
            Rule::Value => selection.value = Some(parse_value(single_inner(pair, "value")?)?),
            Rule::EOI => {}
            got => return Err(ParseError::UnexpectedRule { expected: "Property, Operator or Value", got }),
        }
    }

    trace!("parsed selection {:?} from {:?}", selection, input);
    Ok(selection)
}

fn single_inner<'i>(pair: Pair<'i, Rule>, expected: &'static str) -> Result<Pair<'i, Rule>, ParseError> {
    let rule = pair.as_rule();
    pair.into_inner().next().ok_or(ParseError::UnexpectedRule { expected, got: rule })
}

fn parse_property(pair: Pair<Rule>) -> Result<PropertyRef, ParseError> {
    match pair.as_rule() {
        Rule::Unsigned => {
            let text = pair.as_str();
            text.parse().map(PropertyRef::Id).map_err(|_| ParseError::InvalidNumber(text.to_string()))
        }
        Rule::Identifier => Ok(PropertyRef::Name(pair.as_str().to_string())),
        Rule::SingleQuotedString | Rule::DoubleQuotedString => Ok(PropertyRef::Name(unquote(pair.as_str()).to_string())),
        got => Err(ParseError::UnexpectedRule { expected: "property id or name", got }),
    }
}

fn parse_operator(pair: Pair<Rule>) -> Result<String, ParseError> {
    let op = match pair.as_rule() {
        Rule::Eq => OperatorId::Equals,
        Rule::Gt => OperatorId::GreaterThan,
        Rule::Lt => OperatorId::LessThan,
        Rule::Word => match pair.as_str().to_lowercase().parse::<OperatorId>() {
            Ok(op) => op,
            Err(_) => return Ok(pair.as_str().to_string()),
        },
        got => return Err(ParseError::UnexpectedRule { expected: "operator", got }),
    };
    Ok(op.as_str().to_string())
}

fn parse_value(pair: Pair<Rule>) -> Result<RawValue, ParseError> {
    match pair.as_rule() {
        // Kept as written: `007` is a number to a number property and text to a string property
        Rule::Number => Ok(RawValue::Text(pair.as_str().to_string())),
        Rule::SingleQuotedString | Rule::DoubleQuotedString => Ok(RawValue::Text(unquote(pair.as_str()).to_string())),
        Rule::List => Ok(RawValue::List(pair.into_inner().map(|item| unquote(item.as_str()).to_string()).collect())),
        Rule::BareText => Ok(RawValue::Text(pair.as_str().trim_end().to_string())),
        got => Err(ParseError::UnexpectedRule { expected: "value", got }),
    }
}

fn unquote(s: &str) -> &str {
    if s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_operators() {
        let selection = parse_selection("Weight > 10").unwrap();
        assert_eq!(selection, Selection::new().with_property("Weight").with_operator(OperatorId::GreaterThan).with_value("10"));

        let selection = parse_selection("Weight<2.5").unwrap();
        assert_eq!(selection.operator_id(), Some(OperatorId::LessThan));
        assert_eq!(selection.value, Some(RawValue::Text("2.5".into())));

        let selection = parse_selection("Category = tools").unwrap();
        assert_eq!(selection.operator_id(), Some(OperatorId::Equals));
        assert_eq!(selection.value, Some(RawValue::Text("tools".into())));
    }

    #[test]
    fn test_operator_words_are_case_insensitive() {
        let selection = parse_selection("Name CONTAINS phone").unwrap();
        assert_eq!(selection.operator.as_deref(), Some("contains"));
        assert_eq!(selection.operator_id(), Some(OperatorId::Contains));
        assert_eq!(selection.value, Some(RawValue::Text("phone".into())));

        let selection = parse_selection("Weight Greater_Than 3").unwrap();
        assert_eq!(selection.operator_id(), Some(OperatorId::GreaterThan));
    }

    #[test]
    fn test_numeric_looking_values_keep_their_text() {
        for (text, value) in [("Code equals 007", "007"), ("Code contains 007", "007"), ("Code = 1.50", "1.50"), ("Code = -2e3 ", "-2e3")] {
            let selection = parse_selection(text).unwrap();
            assert_eq!(selection.value, Some(RawValue::Text(value.into())), "{text}");
        }
    }

    #[test]
    fn test_property_by_id_and_quoted_name() {
        let selection = parse_selection("1 greater_than 10").unwrap();
        assert_eq!(selection.property, Some(PropertyRef::Id(1)));

        let selection = parse_selection("'Product Name' equals \"Cordless Drill\"").unwrap();
        assert_eq!(selection.property, Some(PropertyRef::Name("Product Name".into())));
        assert_eq!(selection.value, Some(RawValue::Text("Cordless Drill".into())));
    }

    #[test]
    fn test_partial_selections() {
        let selection = parse_selection("Category").unwrap();
        assert_eq!(selection, Selection::new().with_property("Category"));

        let selection = parse_selection("  Category   none  ").unwrap();
        assert_eq!(selection.operator_id(), Some(OperatorId::None));
        assert_eq!(selection.value, None);
    }

    #[test]
    fn test_in_values() {
        let selection = parse_selection("Category in ['tools', \"garden\"]").unwrap();
        assert_eq!(selection.value, Some(RawValue::from(vec!["tools", "garden"])));

        let selection = parse_selection("Name in headphones, Hammer ").unwrap();
        assert_eq!(selection.value, Some(RawValue::Text("headphones, Hammer".into())));

        let selection = parse_selection("Name in []").unwrap();
        assert_eq!(selection.value, Some(RawValue::List(vec![])));
    }

    #[test]
    fn test_unknown_operator_is_kept_verbatim() {
        let selection = parse_selection("Name sounds_like Hamer").unwrap();
        assert_eq!(selection.operator.as_deref(), Some("sounds_like"));
        assert_eq!(selection.operator_id(), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_selection("   "), Err(ParseError::EmptyExpression));
        assert!(matches!(parse_selection("> 10"), Err(ParseError::SyntaxError(_))));
        assert!(matches!(parse_selection("99999999999 equals 1"), Err(ParseError::InvalidNumber(_))));
    }

    #[test]
    fn test_try_from() -> anyhow::Result<()> {
        let selection = Selection::try_from("Weight > 10")?;
        assert_eq!(selection.operator_id(), Some(OperatorId::GreaterThan));
        Ok(())
    }
}
