//! Template rendering.
//!
//! Views never produce responses directly: they name a template and build a
//! [`Context`], and a [`TemplateRenderer`] turns the pair into a response.

use std::collections::BTreeSet;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::views::templates;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("failed to encode context: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Values made available to a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize a value into the context under `key`.
    pub fn insert<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), RenderError> {
        self.0.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Builder form of [`Context::insert`].
    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self, RenderError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Produces a response from a template name and its context.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: Context) -> Result<Response, RenderError>;
}

/// Renders pages as JSON documents of the form
/// `{"template": "<name>", "context": {...}}` for a client-side frontend.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    known: BTreeSet<String>,
}

impl JsonRenderer {
    /// A renderer that accepts the given template names.
    pub fn with_templates<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::with_templates(templates::ALL)
    }
}

impl TemplateRenderer for JsonRenderer {
    fn render(&self, template: &str, context: Context) -> Result<Response, RenderError> {
        if !self.known.contains(template) {
            return Err(RenderError::UnknownTemplate(template.to_string()));
        }
        tracing::trace!(template, "Rendering page");
        Ok(Json(json!({
            "template": template,
            "context": Value::Object(context.into_inner()),
        }))
        .into_response())
    }
}
