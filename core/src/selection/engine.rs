use crate::catalog::{legal_operators, Catalog};
use crate::error::Diagnostic;
use crate::model::{Product, Property};
use crate::selection::filter::{FilterIterator, FilterResult, Predicate};
use crate::selection::shape::{value_shape, ValueShape};
use sieve_query::{OperatorId, PropertyRef, Selection};
use tracing::{debug, warn};

/// Resolves selections against a fixed set of properties and applies them to products.
///
/// Holds no state beyond the injected properties, so one engine can be reused for any number of
/// selections and every call derives its result from its arguments alone.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    properties: &'a [Property],
}

impl<'a> FilterEngine<'a> {
    pub fn new(properties: &'a [Property]) -> Self { Self { properties } }

    pub fn from_catalog<C: Catalog + ?Sized>(catalog: &'a C) -> Self { Self::new(catalog.properties()) }

    pub fn properties(&self) -> &'a [Property] { self.properties }

    pub fn property(&self, id: u32) -> Option<&'a Property> { self.properties.iter().find(|p| p.id == id) }

    /// Find a property by id, or by name ignoring case
    pub fn resolve(&self, reference: &PropertyRef) -> Option<&'a Property> {
        match reference {
            PropertyRef::Id(id) => self.property(*id),
            PropertyRef::Name(name) => {
                let folded = name.trim().to_lowercase();
                self.properties.iter().find(|p| p.name.to_lowercase() == folded)
            }
        }
    }

    /// Operators legal for the referenced property, in the order they are offered
    pub fn operators_for(&self, reference: &PropertyRef) -> &'static [OperatorId] {
        self.resolve(reference).map(|p| legal_operators(p.property_type)).unwrap_or(&[])
    }

    pub fn shape_for(&self, reference: &PropertyRef, operator: OperatorId) -> Option<ValueShape<'a>> {
        self.resolve(reference).map(|property| value_shape(property, operator))
    }

    /// Build the predicate for a selection. `None` means the selection has no effect yet: no property, no
    /// operator, an unknown property, or an operator id that is not recognized.
    pub fn predicate(&self, selection: &Selection) -> Option<Predicate> {
        let property = self.resolve(selection.property.as_ref()?)?;
        let operator = selection.operator_id()?;
        let operand = value_shape(property, operator).normalize(selection.value.as_ref());
        Some(Predicate::new(property.id, operator, operand))
    }

    /// Apply a selection to products, keeping their order. A selection without an effect returns every
    /// product.
    pub fn apply<'p>(&self, products: &'p [Product], selection: &Selection) -> Vec<&'p Product> {
        for diagnostic in self.diagnose(selection) {
            warn!("{}", diagnostic);
        }

        let Some(predicate) = self.predicate(selection) else {
            debug!("selection {:?} has no effect; returning all {} products", selection, products.len());
            return products.iter().collect();
        };

        let filtered: Vec<&Product> = FilterIterator::new(products.iter(), predicate).filter_map(FilterResult::passed).collect();
        debug!("selection {:?} kept {} of {} products", selection, filtered.len(), products.len());
        filtered
    }

    /// Everything questionable about a selection. Incomplete selections are normal and produce nothing.
    pub fn diagnose(&self, selection: &Selection) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(reference) = &selection.property else {
            return diagnostics;
        };
        let Some(property) = self.resolve(reference) else {
            diagnostics.push(Diagnostic::UnknownProperty(reference.clone()));
            return diagnostics;
        };
        let Some(text) = selection.operator.as_deref().filter(|_| !selection.has_blank_operator()) else {
            return diagnostics;
        };
        let Ok(operator) = text.parse::<OperatorId>() else {
            diagnostics.push(Diagnostic::UnknownOperator(text.to_string()));
            return diagnostics;
        };

        if !legal_operators(property.property_type).contains(&operator) {
            diagnostics.push(Diagnostic::IllegalOperator { operator, property_type: property.property_type });
        }

        let shape = value_shape(property, operator);
        if let Some(value) = &selection.value {
            if !shape.accepts(value) {
                diagnostics.push(Diagnostic::ValueShapeMismatch { expected: shape.name(), value: value.clone() });
            }
        }

        diagnostics
    }
}

/// Filter `products` by `selection`, resolving the selected property among `properties`.
pub fn apply_filter<'p>(properties: &[Property], products: &'p [Product], selection: &Selection) -> Vec<&'p Product> {
    FilterEngine::new(properties).apply(products, selection)
}
