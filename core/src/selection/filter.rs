//! Evaluate a single (property, operator, operand) predicate against items. Items are scanned in order and
//! each one either passes or is skipped; nothing is ever reordered.

use crate::model::Product;
use crate::selection::shape::Operand;
use crate::value::Value;
use sieve_query::OperatorId;

/// Trait for items that can be filtered by predicate evaluation
pub trait Filterable {
    /// The recorded value for a property, or `None` if nothing was recorded
    fn value(&self, property_id: u32) -> Option<&Value>;
}

impl Filterable for Product {
    fn value(&self, property_id: u32) -> Option<&Value> { Product::value(self, property_id) }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn value(&self, property_id: u32) -> Option<&Value> { (**self).value(property_id) }
}

/// A fully resolved selection: the property to read, a known operator, and the normalized operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub property_id: u32,
    pub operator: OperatorId,
    pub operand: Operand,
}

impl Predicate {
    pub fn new(property_id: u32, operator: OperatorId, operand: Operand) -> Self { Self { property_id, operator, operand } }
}

/// Every operator except `none` requires a recorded value; comparisons against text are case-insensitive
/// and numeric comparisons coerce the recorded value, so non-numeric text never compares true.
pub fn evaluate_predicate<I: Filterable + ?Sized>(item: &I, predicate: &Predicate) -> bool {
    let value = item.value(predicate.property_id);
    let operand = &predicate.operand;

    match predicate.operator {
        OperatorId::Equals => value.is_some_and(|v| v.to_folded() == operand.text().to_lowercase()),
        OperatorId::GreaterThan => value.is_some_and(|v| v.to_number() > operand.number()),
        OperatorId::LessThan => value.is_some_and(|v| v.to_number() < operand.number()),
        OperatorId::Any => value.is_some_and(|v| !v.is_blank()),
        OperatorId::None => !value.is_some_and(|v| !v.is_blank()),
        OperatorId::In => value.is_some_and(|v| operand.has_member(&v.to_folded())),
        OperatorId::Contains => value.is_some_and(|v| v.to_folded().contains(&operand.text().to_lowercase())),
    }
}

#[derive(Debug, PartialEq)]
pub enum FilterResult<R> {
    Pass(R),
    Skip(R),
}

impl<R> FilterResult<R> {
    pub fn passed(self) -> Option<R> {
        match self {
            FilterResult::Pass(item) => Some(item),
            FilterResult::Skip(_) => None,
        }
    }
}

pub struct FilterIterator<I> {
    iter: I,
    predicate: Predicate,
}

impl<I, R> FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    pub fn new(iter: I, predicate: Predicate) -> Self { Self { iter, predicate } }
}

impl<I, R> Iterator for FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    type Item = FilterResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|item| if evaluate_predicate(&item, &self.predicate) { FilterResult::Pass(item) } else { FilterResult::Skip(item) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}
