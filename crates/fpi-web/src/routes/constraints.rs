//! Constraint list, detail, create, update and delete routes.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use fpi_core::ConstraintForm;

use crate::error::Result;
use crate::extract::{FormBody, RecordId};
use crate::urls::RouteName;
use crate::views::Outcome;
use crate::AppState;

/// Constraint routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(RouteName::ConstraintsView.pattern(), get(list))
        .route(
            RouteName::ConstraintNew.pattern(),
            get(create_form).post(create),
        )
        .route(RouteName::ConstraintDetail.pattern(), get(detail))
        .route(
            RouteName::ConstraintsUpdate.pattern(),
            get(update_form).post(update),
        )
        .route(
            RouteName::ConstraintDelete.pattern(),
            get(delete_confirm).post(delete),
        )
}

/// Turn a view outcome into a response.
fn respond(state: &AppState, outcome: Outcome) -> Result<Response> {
    match outcome {
        Outcome::Render { template, context } => Ok(state.renderer.render(template, context)?),
        Outcome::Redirect { location } => Ok(Redirect::to(&location).into_response()),
    }
}

async fn list(State(state): State<AppState>) -> Result<Response> {
    let outcome = state.views().list()?;
    respond(&state, outcome)
}

async fn detail(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let outcome = state.views().detail(id)?;
    respond(&state, outcome)
}

async fn create_form(State(state): State<AppState>) -> Result<Response> {
    let outcome = state.views().create_form()?;
    respond(&state, outcome)
}

async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody<ConstraintForm>,
) -> Result<Response> {
    let outcome = state.views().create(form)?;
    respond(&state, outcome)
}

async fn update_form(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let outcome = state.views().update_form(id)?;
    respond(&state, outcome)
}

async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    FormBody(form): FormBody<ConstraintForm>,
) -> Result<Response> {
    let outcome = state.views().update(id, form)?;
    respond(&state, outcome)
}

async fn delete_confirm(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let outcome = state.views().delete_confirm(id)?;
    respond(&state, outcome)
}

async fn delete(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let outcome = state.views().delete(id)?;
    respond(&state, outcome)
}
