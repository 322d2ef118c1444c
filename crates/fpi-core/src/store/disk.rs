//! Sled-backed constraint store.

use std::path::Path;

use sled::{Db, Tree};

use super::ConstraintStore;
use crate::error::{Error, Result};
use crate::model::{Constraint, ConstraintFields};

/// Tree name for constraint records.
const RECORDS_TREE: &str = "constraints:records";

/// Tree name for store metadata.
const META_TREE: &str = "constraints:meta";

/// Key for the last issued identifier in the meta tree.
const LAST_ID_KEY: &[u8] = b"last_id";

/// A store that persists records in a sled database.
///
/// Records live under big-endian identifier keys so iteration follows
/// identifier order; values are JSON.
pub struct SledStore {
    db: Db,
    records: Tree,
    meta: Tree,
}

fn key(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

fn decode_id(bytes: &[u8]) -> Result<u64> {
    <[u8; 8]>::try_from(bytes)
        .map(u64::from_be_bytes)
        .map_err(|_| Error::InvalidData(format!("identifier of {} bytes", bytes.len())))
}

fn encode(record: &Constraint) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| Error::Serialization(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Constraint> {
    serde_json::from_slice(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}

impl SledStore {
    /// Open or create a store at the given directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Open a store that is removed when dropped.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    /// Use an already opened sled database.
    pub fn from_db(db: Db) -> Result<Self> {
        let records = db.open_tree(RECORDS_TREE)?;
        let meta = db.open_tree(META_TREE)?;
        Ok(Self { db, records, meta })
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    fn next_id(&self) -> Result<u64> {
        let updated = self.meta.update_and_fetch(LAST_ID_KEY, |old| {
            let last = old
                .and_then(|b| <[u8; 8]>::try_from(b).ok())
                .map(u64::from_be_bytes)
                .unwrap_or(0);
            Some((last + 1).to_be_bytes().to_vec())
        })?;
        match updated {
            Some(bytes) => decode_id(&bytes),
            None => Err(Error::InvalidData("identifier counter missing".to_string())),
        }
    }
}

impl ConstraintStore for SledStore {
    fn list(&self) -> Result<Vec<Constraint>> {
        let mut records = Vec::with_capacity(self.records.len());
        for entry in self.records.iter() {
            let (_, value) = entry?;
            records.push(decode(&value)?);
        }
        records.sort_by(Constraint::ordering);
        Ok(records)
    }

    fn get(&self, id: u64) -> Result<Constraint> {
        match self.records.get(key(id))? {
            Some(bytes) => decode(&bytes),
            None => Err(Error::NotFound(id)),
        }
    }

    fn create(&self, fields: ConstraintFields) -> Result<Constraint> {
        let id = self.next_id()?;
        let record = Constraint::from_fields(id, fields);
        self.records.insert(key(id), encode(&record)?)?;
        tracing::debug!(id, name = %record.constraint_name, "Created constraint");
        Ok(record)
    }

    fn update(&self, id: u64, fields: ConstraintFields) -> Result<Constraint> {
        let record = Constraint::from_fields(id, fields);
        let bytes = encode(&record)?;
        // Only replace an existing value; a missing key stays missing.
        let stored = self
            .records
            .update_and_fetch(key(id), |old| old.map(|_| bytes.clone()))?;
        match stored {
            Some(_) => {
                tracing::debug!(id, "Updated constraint");
                Ok(record)
            }
            None => Err(Error::NotFound(id)),
        }
    }

    fn delete(&self, id: u64) -> Result<()> {
        match self.records.remove(key(id))? {
            Some(_) => {
                tracing::debug!(id, "Deleted constraint");
                Ok(())
            }
            None => Err(Error::NotFound(id)),
        }
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}
