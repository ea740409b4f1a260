//! Errors and diagnostics.
//!
//! Filtering itself never fails. Only loading a catalog snapshot can, and that is a [`CatalogError`].
//! Everything the engine notices about a questionable selection is reported as a [`Diagnostic`] while the
//! selection still gets its defined fallback behavior.

use sieve_query::{OperatorId, PropertyRef, PropertyType, RawValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate property id {0}")]
    DuplicateProperty(u32),

    #[error("duplicate product id {0}")]
    DuplicateProduct(u32),

    #[error("product {product} has more than one value for property {property}")]
    DuplicatePropertyValue { product: u32, property: u32 },

    #[error("product {product} has a value for unknown property {property}")]
    UnknownProperty { product: u32, property: u32 },
}

/// Something worth flagging about a selection. Never fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Diagnostic {
    #[error("property {0} is not in the catalog; nothing is filtered")]
    UnknownProperty(PropertyRef),

    #[error("operator {0:?} is not a known operator; nothing is filtered")]
    UnknownOperator(String),

    #[error("operator {operator} is not offered for {property_type} properties")]
    IllegalOperator { operator: OperatorId, property_type: PropertyType },

    #[error("value {value:?} does not fit the expected {expected} input")]
    ValueShapeMismatch { expected: &'static str, value: RawValue },
}
