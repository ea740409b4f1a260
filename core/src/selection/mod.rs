//! Turning a selection into a predicate and running it over products.

mod engine;
pub mod filter;
pub mod shape;

pub use engine::{apply_filter, FilterEngine};
pub use filter::{evaluate_predicate, FilterIterator, FilterResult, Filterable, Predicate};
pub use shape::{split_csv, value_shape, Operand, ValueShape};
