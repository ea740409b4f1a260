use crate::grammar;
use thiserror::Error;

/// Errors from reading a selection or one of its ids out of text
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Syntax error: {0}")]
    SyntaxError(String),
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Expected {expected}, got {got:?}")]
    UnexpectedRule { expected: &'static str, got: grammar::Rule },
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

impl From<pest::error::Error<grammar::Rule>> for ParseError {
    fn from(error: pest::error::Error<grammar::Rule>) -> Self { ParseError::SyntaxError(error.to_string()) }
}
