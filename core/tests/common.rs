#![allow(dead_code)]

use sieve_core::{Product, Snapshot};
use tracing::Level;

/// Three properties and two products: the smallest catalog every filter case can be shown on.
pub fn headphones_and_hammer() -> Snapshot {
    let json = serde_json::json!({
        "properties": [
            { "id": 0, "name": "Name", "type": "string" },
            { "id": 1, "name": "Weight", "type": "number" },
            { "id": 2, "name": "Category", "type": "enumerated", "values": ["tools", "electronics"] }
        ],
        "products": [
            { "id": 0, "property_values": [
                { "property_id": 0, "value": "Headphones" },
                { "property_id": 1, "value": 5 },
                { "property_id": 2, "value": "electronics" }
            ] },
            { "id": 1, "property_values": [
                { "property_id": 0, "value": "Hammer" },
                { "property_id": 1, "value": 19 },
                { "property_id": 2, "value": "tools" }
            ] }
        ]
    });
    Snapshot::from_json_str(&json.to_string()).expect("fixture catalog is valid")
}

/// The same catalog plus a product that never had a category recorded
pub fn with_uncategorized() -> Snapshot {
    let mut snapshot = headphones_and_hammer();
    let extra: Product = serde_json::from_value(serde_json::json!({
        "id": 2,
        "property_values": [
            { "property_id": 0, "value": "NoCat" },
            { "property_id": 1, "value": 1 }
        ]
    }))
    .expect("fixture product is valid");
    snapshot.products.push(extra);
    snapshot
}

pub fn ids(products: &[&Product]) -> Vec<u32> { products.iter().map(|p| p.id).collect() }

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().init(); }
