//! Seed data and ready-made stores.

use crate::{error::Result, CollectionSchema, Fields, Record, ResourceStore};
use serde_json::json;

/// Seed rows: (name, price, category).
const PRODUCTS: [(&str, f64, &str); 8] = [
    ("Laptop Pro", 999.99, "electronics"),
    ("Smartphone X", 699.99, "electronics"),
    ("Tablet Mini", 349.99, "electronics"),
    ("Office Desk", 249.99, "furniture"),
    ("Ergonomic Chair", 189.99, "furniture"),
    ("Coffee Maker Pro", 89.99, "appliances"),
    ("Wireless Headphones", 129.99, "electronics"),
    ("Smart Watch", 199.99, "wearables"),
];

/// The eight-product demo catalog, ids 1 through 8.
pub fn products() -> Vec<Record> {
    PRODUCTS
        .iter()
        .zip(1..)
        .map(|(&(name, price, category), id)| {
            Record::new(id, product_fields(name, price, category))
        })
        .collect()
}

fn product_fields(name: &str, price: f64, category: &str) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".into(), json!(name));
    fields.insert("price".into(), json!(price));
    fields.insert("category".into(), json!(category));
    fields
}

/// A product store seeded with [`products`].
pub fn product_store() -> Result<ResourceStore> {
    ResourceStore::with_records(CollectionSchema::products(), products())
}

/// An empty product store.
pub fn empty_product_store() -> ResourceStore {
    ResourceStore::new(CollectionSchema::products())
}

/// An empty to-do list.
pub fn task_store() -> ResourceStore {
    ResourceStore::new(CollectionSchema::tasks())
}
