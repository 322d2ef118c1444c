//! HTTP route handlers.

pub mod constraints;
pub mod health;
pub mod pages;
