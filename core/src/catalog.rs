//! Which operators a property type allows, and the catalog of properties, operators and products the
//! filter runs against.

use crate::error::CatalogError;
use crate::model::{Operator, Product, Property};
use serde::{Deserialize, Serialize};
use sieve_query::{OperatorId, PropertyType};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

const STRING_OPERATORS: &[OperatorId] = &[OperatorId::Equals, OperatorId::Any, OperatorId::None, OperatorId::In, OperatorId::Contains];
const NUMBER_OPERATORS: &[OperatorId] =
    &[OperatorId::Equals, OperatorId::GreaterThan, OperatorId::LessThan, OperatorId::Any, OperatorId::None, OperatorId::In];
const ENUMERATED_OPERATORS: &[OperatorId] = &[OperatorId::Equals, OperatorId::Any, OperatorId::None, OperatorId::In];

/// The operators legal for a property type, in the order they are offered.
pub fn legal_operators(property_type: PropertyType) -> &'static [OperatorId] {
    match property_type {
        PropertyType::String => STRING_OPERATORS,
        PropertyType::Number => NUMBER_OPERATORS,
        PropertyType::Enumerated => ENUMERATED_OPERATORS,
    }
}

/// Like [`legal_operators`], for a type given by name. Unrecognized names have no legal operators.
pub fn legal_operators_by_name(type_name: &str) -> &'static [OperatorId] {
    type_name.parse().map(legal_operators).unwrap_or(&[])
}

/// The catalog's operator records that are legal for `property_type`, in legal-operator order.
/// Legal operators the catalog does not list are skipped.
pub fn offered_operators(operators: &[Operator], property_type: PropertyType) -> Vec<&Operator> {
    legal_operators(property_type).iter().filter_map(|id| operators.iter().find(|op| op.id == *id)).collect()
}

/// Read-only access to the records being filtered.
pub trait Catalog {
    fn properties(&self) -> &[Property];
    fn operators(&self) -> &[Operator];
    fn products(&self) -> &[Product];

    fn property(&self, id: u32) -> Option<&Property> { self.properties().iter().find(|p| p.id == id) }
}

/// An in-memory catalog, typically loaded from a JSON document:
///
/// ```json
/// { "properties": [{ "id": 0, "name": "name", "type": "string" }],
///   "operators":  [{ "id": "equals", "label": "Equals" }],
///   "products":   [{ "id": 0, "property_values": [{ "property_id": 0, "value": "Hammer" }] }] }
/// ```
///
/// `operators` may be left out, in which case every operator is offered with its default label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub properties: Vec<Property>,
    #[serde(default = "Operator::standard")]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Snapshot {
    pub fn new(properties: Vec<Property>, operators: Vec<Operator>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let snapshot = Self { properties, operators, products };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> { Self::from_reader(json.as_bytes()) }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let snapshot = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            "loaded catalog {}: {} properties, {} operators, {} products",
            path.display(),
            snapshot.properties.len(),
            snapshot.operators.len(),
            snapshot.products.len()
        );
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut property_ids = HashSet::new();
        for property in &self.properties {
            if !property_ids.insert(property.id) {
                return Err(CatalogError::DuplicateProperty(property.id));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            let mut seen = HashSet::new();
            for pv in &product.property_values {
                if !property_ids.contains(&pv.property_id) {
                    return Err(CatalogError::UnknownProperty { product: product.id, property: pv.property_id });
                }
                if !seen.insert(pv.property_id) {
                    return Err(CatalogError::DuplicatePropertyValue { product: product.id, property: pv.property_id });
                }
            }
        }

        debug!("catalog validated: {} properties, {} products", property_ids.len(), product_ids.len());
        Ok(())
    }
}

impl Catalog for Snapshot {
    fn properties(&self) -> &[Property] { &self.properties }
    fn operators(&self) -> &[Operator] { &self.operators }
    fn products(&self) -> &[Product] { &self.products }
}
