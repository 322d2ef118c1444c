//! Food Pantry Inventory constraint pages.
//!
//! This crate serves the list, detail, create, update and delete pages for
//! constraint records. Views build template contexts from an injected
//! [`ConstraintStore`] and hand them to a [`TemplateRenderer`]; successful
//! form submissions redirect back to the list.

pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod routes;
pub mod urls;
pub mod views;

pub use config::{Args, StorageBackend, WebConfig};
pub use error::AppError;
pub use render::{Context, JsonRenderer, TemplateRenderer};
pub use views::{ConstraintViews, Outcome};

use std::sync::Arc;

use axum::Router;
use fpi_core::ConstraintStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Constraint record store.
    pub store: Arc<dyn ConstraintStore>,
    /// Page renderer.
    pub renderer: Arc<dyn TemplateRenderer>,
    /// Server configuration.
    pub config: WebConfig,
}

impl AppState {
    /// Create application state with the JSON renderer.
    pub fn new(store: Arc<dyn ConstraintStore>, config: WebConfig) -> Self {
        Self::with_renderer(store, Arc::new(JsonRenderer::default()), config)
    }

    /// Create application state with a custom renderer.
    pub fn with_renderer(
        store: Arc<dyn ConstraintStore>,
        renderer: Arc<dyn TemplateRenderer>,
        config: WebConfig,
    ) -> Self {
        Self {
            store,
            renderer,
            config,
        }
    }

    /// Constraint views bound to this state's store.
    pub fn views(&self) -> ConstraintViews {
        ConstraintViews::new(self.store.clone())
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::pages::routes())
        .merge(routes::constraints::routes())
        .fallback(routes::pages::append_slash)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
