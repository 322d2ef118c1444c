//! Food Pantry Inventory core - constraint records, validation and storage.
//!
//! A [`Constraint`] is a named validation rule (an integer or character range,
//! or a list of allowed values) that governs some other field in the
//! inventory application. This crate owns the entity, the single form
//! validation path shared by create and update, and the [`ConstraintStore`]
//! record store with its in-memory and sled-backed implementations.

pub mod error;
pub mod form;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use form::{ConstraintForm, FormErrors};
pub use model::{Constraint, ConstraintFields, ConstraintType};
pub use store::{ConstraintStore, MemoryStore, SledStore};
