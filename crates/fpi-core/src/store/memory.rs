//! In-memory constraint store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::ConstraintStore;
use crate::error::{Error, Result};
use crate::model::{Constraint, ConstraintFields};

#[derive(Default)]
struct Inner {
    records: BTreeMap<u64, Constraint>,
    last_id: u64,
}

/// A store that keeps records in a map behind a lock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConstraintStore for MemoryStore {
    fn list(&self) -> Result<Vec<Constraint>> {
        let mut records: Vec<Constraint> = self.inner.read().records.values().cloned().collect();
        records.sort_by(Constraint::ordering);
        Ok(records)
    }

    fn get(&self, id: u64) -> Result<Constraint> {
        self.inner
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn create(&self, fields: ConstraintFields) -> Result<Constraint> {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let record = Constraint::from_fields(inner.last_id, fields);
        inner.records.insert(record.constraint_id, record.clone());
        tracing::debug!(id = record.constraint_id, "Created constraint");
        Ok(record)
    }

    fn update(&self, id: u64, fields: ConstraintFields) -> Result<Constraint> {
        let mut inner = self.inner.write();
        let slot = inner.records.get_mut(&id).ok_or(Error::NotFound(id))?;
        *slot = Constraint::from_fields(id, fields);
        tracing::debug!(id, "Updated constraint");
        Ok(slot.clone())
    }

    fn delete(&self, id: u64) -> Result<()> {
        let removed = self.inner.write().records.remove(&id);
        match removed {
            Some(_) => {
                tracing::debug!(id, "Deleted constraint");
                Ok(())
            }
            None => Err(Error::NotFound(id)),
        }
    }

    fn count(&self) -> Result<usize> {
        Ok(self.inner.read().records.len())
    }
}
