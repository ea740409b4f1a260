pub mod catalog;
pub mod error;
pub mod model;
pub mod selection;
pub mod value;

pub use catalog::{legal_operators, legal_operators_by_name, offered_operators, Catalog, Snapshot};
pub use error::{CatalogError, Diagnostic};
pub use model::{Operator, Product, Property, PropertyValue};
pub use selection::{apply_filter, value_shape, FilterEngine, Operand, ValueShape};
pub use value::Value;

pub use sieve_query as query;
pub use sieve_query::{OperatorId, PropertyRef, PropertyType, RawValue, Selection};
