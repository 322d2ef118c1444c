//! Record stores for constraints.
//!
//! [`ConstraintStore`] is the persistence seam the presentation layer talks
//! to. Identifiers are assigned by the store, start at 1 and are never reused.
//! `list` and `filter` return records in the default ordering (by name, then
//! identifier).

mod disk;
mod memory;

pub use disk::SledStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{Constraint, ConstraintFields};

/// CRUD access to constraint records.
pub trait ConstraintStore: Send + Sync {
    /// All records.
    fn list(&self) -> Result<Vec<Constraint>>;

    /// One record, or [`Error::NotFound`](crate::Error::NotFound).
    fn get(&self, id: u64) -> Result<Constraint>;

    /// Records matching a predicate.
    fn filter(&self, predicate: &dyn Fn(&Constraint) -> bool) -> Result<Vec<Constraint>> {
        Ok(self.list()?.into_iter().filter(|c| predicate(c)).collect())
    }

    /// Insert a new record and return it with its assigned identifier.
    fn create(&self, fields: ConstraintFields) -> Result<Constraint>;

    /// Replace the fields of an existing record.
    fn update(&self, id: u64, fields: ConstraintFields) -> Result<Constraint>;

    /// Remove a record.
    fn delete(&self, id: u64) -> Result<()>;

    /// Number of records.
    fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}
