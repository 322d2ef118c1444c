//! Site pages outside the constraint views.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::render::Context;
use crate::urls::{resolve, RouteName};
use crate::views::templates;
use crate::AppState;

/// Greeting served at the application root.
pub const GREETING: &str = "Hello world from Food Pantry Inventory.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(RouteName::Index.pattern(), get(index))
        .route(RouteName::About.pattern(), get(about))
}

async fn index() -> &'static str {
    GREETING
}

async fn about(State(state): State<AppState>) -> Result<Response> {
    Ok(state.renderer.render(templates::ABOUT, Context::new())?)
}

/// Fallback for unmatched paths: a path that only lacks its trailing slash is
/// redirected to the slashed route, anything else is not found.
pub async fn append_slash(uri: Uri) -> Result<Response> {
    let path = uri.path();
    if !path.ends_with('/') {
        let slashed = format!("{path}/");
        if resolve(&slashed).is_some() {
            let location = match uri.query() {
                Some(query) => format!("{slashed}?{query}"),
                None => slashed,
            };
            tracing::debug!(from = %path, to = %location, "Appending slash");
            return Ok(Redirect::permanent(&location).into_response());
        }
    }
    Err(AppError::NotFound(format!("no page at {path}")))
}
