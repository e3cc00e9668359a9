//! # Shelf Engine
//!
//! An in-memory resource store with a composable query filter.
//!
//! This crate provides the core of the shelf service: an ordered collection
//! of records with store-assigned identifiers, create/read/update/delete
//! operations validated against an explicit schema, and a filter that narrows
//! a snapshot of records by several optional criteria at once.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of sockets, HTTP, or files
//! - **Explicit ownership**: Every store is a value; sharing goes through [`SharedStore`]
//! - **Typed input**: Payloads are checked against a [`CollectionSchema`] before storage
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record`] is an integer id plus a map of domain fields. Ids come from a
//! counter that only moves forward, so an id is never reused after deletion.
//!
//! ### Store
//!
//! [`ResourceStore`] keeps records in insertion order and exposes
//! `list`, `create`, `find`, `update`, `patch` and `delete`.
//!
//! ### Filtering
//!
//! [`FilterCriteria`] holds optional predicates (category, price bounds,
//! name substring) combined with AND; [`filter::apply`] runs them over a
//! sequence of records.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_engine::{catalog, FilterCriteria, ResourceStore, CollectionSchema};
//! use serde_json::json;
//!
//! // A to-do list
//! let mut tasks = ResourceStore::new(CollectionSchema::tasks());
//! let task = tasks.create(json!({"name": "Buy milk"})).unwrap();
//! assert_eq!(task.id, 1);
//!
//! // A seeded product catalog
//! let products = catalog::product_store().unwrap();
//! let criteria = FilterCriteria::new()
//!     .with_min_price(500.0)
//!     .with_max_price(1000.0);
//! assert_eq!(products.filter(&criteria).len(), 2);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod record;
pub mod schema;
pub mod shared;
pub mod store;

// Re-export main types at crate root
pub use error::{Error, ErrorKind};
pub use filter::FilterCriteria;
pub use record::Record;
pub use schema::{CollectionSchema, FieldDef, FieldType};
pub use shared::SharedStore;
pub use store::ResourceStore;

/// Type aliases for clarity
pub type RecordId = u64;
pub type Fields = serde_json::Map<String, serde_json::Value>;
