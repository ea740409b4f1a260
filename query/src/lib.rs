//! The vocabulary shared by everything that builds or evaluates a product filter: the operator ids, the
//! property types they are legal for, the raw values a caller collects, and the in-progress [`Selection`].
//!
//! Selections can also be written as text (`Weight > 10`, `Category in ['tools', 'garden']`) and parsed with
//! [`parse_selection`].

pub mod ast;
pub mod conversion;
pub mod error;
pub mod grammar;
pub mod parser;

pub use ast::{OperatorId, PropertyRef, PropertyType, RawValue, Selection};
pub use error::ParseError;
pub use parser::parse_selection;
