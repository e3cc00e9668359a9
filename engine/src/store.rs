//! Store - the in-memory state container.
//!
//! A [`ResourceStore`] holds the records of one collection in insertion order
//! and owns identifier assignment. Ids come from a monotonically increasing
//! counter and are never handed out twice, even after the record holding one
//! is deleted.

use crate::{error::Result, CollectionSchema, Error, FilterCriteria, Record, RecordId};
use serde_json::Value;
use std::collections::HashSet;

/// The first id handed out by an empty store.
pub const FIRST_ID: RecordId = 1;

/// Ordered, identity-indexed collection of records.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    /// Field contract for every record in this store
    schema: CollectionSchema,
    /// Records in insertion order
    records: Vec<Record>,
    /// Id the next successful create will receive
    next_id: RecordId,
}

impl ResourceStore {
    /// Create an empty store for the given schema.
    pub fn new(schema: CollectionSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Create a store pre-seeded with `records`, keeping their ids.
    ///
    /// Every seed record is validated against the schema. The counter resumes
    /// after the highest seeded id.
    pub fn with_records(schema: CollectionSchema, records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut validated = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id) {
                return Err(Error::InvalidPayload(format!(
                    "duplicate seed id {}",
                    record.id
                )));
            }
            let fields = schema.validate_payload(Value::Object(record.fields))?;
            validated.push(Record::new(record.id, fields));
        }

        let next_id = match validated.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                Error::InvalidPayload(format!("seed id {max} leaves no ids to assign"))
            })?,
            None => FIRST_ID,
        };

        Ok(Self {
            schema,
            records: validated,
            next_id,
        })
    }

    /// Get the schema.
    pub fn schema(&self) -> &CollectionSchema {
        &self.schema
    }

    /// The id the next create will receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Count of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Snapshot of the records matching `criteria`, in insertion order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Record> {
        crate::filter::apply(&self.records, criteria)
    }

    /// Look up a record by id.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Validate `payload`, store it under the next id and return the stored record.
    ///
    /// A rejected payload does not consume an id. Fails once the id space is
    /// exhausted rather than wrapping around.
    pub fn create(&mut self, payload: Value) -> Result<Record> {
        let fields = self.schema.validate_payload(payload)?;

        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::InvalidPayload("record ids exhausted".into()))?;

        let record = Record::new(id, fields);
        self.records.push(record.clone());

        Ok(record)
    }

    /// Replace every mutable field of record `id` with `payload`.
    pub fn update(&mut self, id: RecordId, payload: Value) -> Result<Record> {
        let index = self.position(id)?;
        let fields = self.schema.validate_payload(payload)?;

        let record = &mut self.records[index];
        record.replace_fields(fields);

        Ok(record.clone())
    }

    /// Merge the fields in `payload` into record `id`.
    pub fn patch(&mut self, id: RecordId, payload: Value) -> Result<Record> {
        let index = self.position(id)?;
        let fields = self.schema.validate_patch(payload)?;

        let record = &mut self.records[index];
        record.merge_fields(fields);

        Ok(record.clone())
    }

    /// Remove record `id`, returning it. Survivors keep their relative order.
    pub fn delete(&mut self, id: RecordId) -> Result<Record> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::RecordNotFound(id))
    }
}
