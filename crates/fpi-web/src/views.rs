//! Constraint pages.
//!
//! Each view reads from the record store, then either names a template with
//! the context it needs or asks for a redirect. Nothing is kept between
//! calls; the store is the only shared state.

use std::sync::Arc;

use fpi_core::{Constraint, ConstraintForm, ConstraintStore, ConstraintType, FormErrors};
use serde::Serialize;

use crate::error::Result;
use crate::render::Context;
use crate::urls::{reverse, RouteName};

/// Template names.
pub mod templates {
    pub const ABOUT: &str = "fpiweb/about.html";
    pub const CONSTRAINTS_LIST: &str = "fpiweb/constraints_list.html";
    pub const CONSTRAINT_DETAIL: &str = "fpiweb/constraint_detail.html";
    pub const CONSTRAINT_NEW: &str = "fpiweb/constraint_edit.html";
    pub const CONSTRAINT_EDIT: &str = "fpiweb/constraints_edit.html";
    pub const CONSTRAINT_DELETE: &str = "fpiweb/constraints_delete.html";

    pub const ALL: [&str; 6] = [
        ABOUT,
        CONSTRAINTS_LIST,
        CONSTRAINT_DETAIL,
        CONSTRAINT_NEW,
        CONSTRAINT_EDIT,
        CONSTRAINT_DELETE,
    ];
}

/// Label shown on the list page.
pub const PROJECT_TYPE: &str = "open source";

/// What a view asks the HTTP layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Render a template with a context.
    Render {
        template: &'static str,
        context: Context,
    },
    /// Send the client elsewhere.
    Redirect { location: String },
}

impl Outcome {
    fn render(template: &'static str, context: Context) -> Self {
        Outcome::Render { template, context }
    }

    fn redirect(location: String) -> Self {
        Outcome::Redirect { location }
    }
}

/// A record as templates see it: its fields plus its display string.
#[derive(Debug, Serialize)]
struct RecordContext<'a> {
    #[serde(flatten)]
    record: &'a Constraint,
    display: String,
}

impl<'a> From<&'a Constraint> for RecordContext<'a> {
    fn from(record: &'a Constraint) -> Self {
        Self {
            record,
            display: record.to_string(),
        }
    }
}

fn records_context(records: &[Constraint]) -> Vec<RecordContext<'_>> {
    records.iter().map(RecordContext::from).collect()
}

/// A selectable constraint type, for form drop-downs.
#[derive(Debug, Serialize)]
struct TypeChoice {
    code: &'static str,
    label: &'static str,
}

fn type_choices() -> Vec<TypeChoice> {
    ConstraintType::ALL
        .into_iter()
        .map(|t| TypeChoice {
            code: t.code(),
            label: t.label(),
        })
        .collect()
}

fn form_context(form: &ConstraintForm, errors: &FormErrors, action: &str) -> Result<Context> {
    Ok(Context::new()
        .with("form", form)?
        .with("form_errors", errors)?
        .with("type_choices", &type_choices())?
        .with("action", action)?)
}

/// The list, detail, create, update and delete pages for constraints.
#[derive(Clone)]
pub struct ConstraintViews {
    store: Arc<dyn ConstraintStore>,
}

impl ConstraintViews {
    pub fn new(store: Arc<dyn ConstraintStore>) -> Self {
        Self { store }
    }

    fn list_url() -> Result<String> {
        Ok(reverse(RouteName::ConstraintsView, None)?)
    }

    /// Every constraint, with the range types offered for filtering.
    pub fn list(&self) -> Result<Outcome> {
        let records = self.store.list()?;
        let range_list: Vec<&str> = ConstraintType::RANGES.iter().map(|t| t.code()).collect();
        let listed = records_context(&records);

        let context = Context::new()
            .with("constraints_list_content", &listed)?
            .with("object_list", &listed)?
            .with("project_type", PROJECT_TYPE)?
            .with("range_list", &range_list)?;

        tracing::debug!(count = records.len(), "Listing constraints");
        Ok(Outcome::render(templates::CONSTRAINTS_LIST, context))
    }

    /// One constraint and the records related to it by identifier.
    pub fn detail(&self, id: u64) -> Result<Outcome> {
        let constraint = self.store.get(id)?;
        let own_id = constraint.constraint_id;
        let constraint_info = self
            .store
            .filter(&|c: &Constraint| c.constraint_id == own_id)?;

        let record = RecordContext::from(&constraint);
        let context = Context::new()
            .with("object", &record)?
            .with("constraint_detail_context", &record)?
            .with("constraint", &record)?
            .with("constraint_info", &records_context(&constraint_info))?;

        Ok(Outcome::render(templates::CONSTRAINT_DETAIL, context))
    }

    /// An empty create form.
    pub fn create_form(&self) -> Result<Outcome> {
        let action = reverse(RouteName::ConstraintNew, None)?;
        let context = form_context(&ConstraintForm::default(), &FormErrors::default(), &action)?;
        Ok(Outcome::render(templates::CONSTRAINT_NEW, context))
    }

    /// Validate a submitted create form and store the new record.
    pub fn create(&self, form: ConstraintForm) -> Result<Outcome> {
        match form.validate() {
            Ok(fields) => {
                let created = self.store.create(fields)?;
                tracing::info!(
                    id = created.constraint_id,
                    name = %created.constraint_name,
                    "Constraint created"
                );
                Ok(Outcome::redirect(Self::list_url()?))
            }
            Err(errors) => {
                let invalid: Vec<&String> = errors.fields.keys().collect();
                tracing::debug!(fields = ?invalid, "Create form rejected");
                let action = reverse(RouteName::ConstraintNew, None)?;
                let context = form_context(&form, &errors, &action)?;
                Ok(Outcome::render(templates::CONSTRAINT_NEW, context))
            }
        }
    }

    /// The edit form, pre-filled from the stored record.
    pub fn update_form(&self, id: u64) -> Result<Outcome> {
        let constraint = self.store.get(id)?;
        let form = ConstraintForm::from_constraint(&constraint);
        self.render_edit(&constraint, &form, &FormErrors::default())
    }

    /// Validate a submitted edit form and replace the record's fields.
    pub fn update(&self, id: u64, form: ConstraintForm) -> Result<Outcome> {
        let constraint = self.store.get(id)?;
        match form.validate() {
            Ok(fields) => {
                self.store.update(constraint.constraint_id, fields)?;
                tracing::info!(id, "Constraint updated");
                Ok(Outcome::redirect(Self::list_url()?))
            }
            Err(errors) => {
                tracing::debug!(id, "Edit form rejected");
                self.render_edit(&constraint, &form, &errors)
            }
        }
    }

    fn render_edit(
        &self,
        constraint: &Constraint,
        form: &ConstraintForm,
        errors: &FormErrors,
    ) -> Result<Outcome> {
        let action = reverse(RouteName::ConstraintsUpdate, Some(constraint.constraint_id))?;
        let record = RecordContext::from(constraint);
        let context = form_context(form, errors, &action)?
            .with("object", &record)?
            .with("constraints_edit_context", &record)?;
        Ok(Outcome::render(templates::CONSTRAINT_EDIT, context))
    }

    /// Ask for confirmation before deleting.
    pub fn delete_confirm(&self, id: u64) -> Result<Outcome> {
        let constraint = self.store.get(id)?;
        let action = reverse(RouteName::ConstraintDelete, Some(id))?;

        let record = RecordContext::from(&constraint);
        let context = Context::new()
            .with("object", &record)?
            .with("constraints_delete_context", &record)?
            .with("action", &action)?;

        Ok(Outcome::render(templates::CONSTRAINT_DELETE, context))
    }

    /// Remove the record after confirmation.
    pub fn delete(&self, id: u64) -> Result<Outcome> {
        self.store.delete(id)?;
        tracing::info!(id, "Constraint deleted");
        Ok(Outcome::redirect(Self::list_url()?))
    }
}
