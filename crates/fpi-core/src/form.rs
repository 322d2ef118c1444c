//! Constraint form validation.
//!
//! Create and update share one set of rules: submitted strings are trimmed,
//! blank optional fields become `None`, field lengths follow the stored column
//! widths, and the bounds or value list must make sense for the chosen type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Constraint, ConstraintFields, ConstraintType};

/// Maximum length of a constraint name.
pub const NAME_MAX_LEN: usize = 30;

/// Maximum length of a minimum or maximum value.
pub const BOUND_MAX_LEN: usize = 30;

/// Maximum length of a value list.
pub const LIST_MAX_LEN: usize = 500;

const REQUIRED: &str = "This field is required.";

/// Raw values submitted through the create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintForm {
    pub constraint_name: String,
    pub constraint_descr: String,
    pub constraint_type: String,
    pub constraint_min: String,
    pub constraint_max: String,
    pub constraint_list: String,
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    /// Per-field messages.
    pub fields: BTreeMap<String, Vec<String>>,
    /// Messages that concern more than one field.
    pub non_field_errors: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.non_field_errors.is_empty()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Record a cross-field message.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field_errors.push(message.into());
    }

    /// Messages for one field.
    #[cfg(test)]
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_len(errors: &mut FormErrors, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        let len = value.chars().count();
        if len > max {
            errors.add(
                field,
                format!("Ensure this value has at most {max} characters (it has {len})."),
            );
        }
    }
}

fn parse_int(errors: &mut FormErrors, field: &str, value: Option<&str>) -> Option<i64> {
    let value = value?;
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.add(field, "Enter a whole number.");
            None
        }
    }
}

impl ConstraintForm {
    /// Pre-fill a form from an existing record.
    pub fn from_constraint(constraint: &Constraint) -> Self {
        Self {
            constraint_name: constraint.constraint_name.clone(),
            constraint_descr: constraint.constraint_descr.clone().unwrap_or_default(),
            constraint_type: constraint.constraint_type.code().to_string(),
            constraint_min: constraint.constraint_min.clone().unwrap_or_default(),
            constraint_max: constraint.constraint_max.clone().unwrap_or_default(),
            constraint_list: constraint.constraint_list.clone().unwrap_or_default(),
        }
    }

    /// Validate the submitted values.
    pub fn validate(&self) -> Result<ConstraintFields, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.constraint_name.trim();
        if name.is_empty() {
            errors.add("constraint_name", REQUIRED);
        }
        check_len(&mut errors, "constraint_name", Some(name), NAME_MAX_LEN);

        let descr = optional(&self.constraint_descr);
        let min = optional(&self.constraint_min);
        let max = optional(&self.constraint_max);
        let list = optional(&self.constraint_list);
        check_len(&mut errors, "constraint_min", min.as_deref(), BOUND_MAX_LEN);
        check_len(&mut errors, "constraint_max", max.as_deref(), BOUND_MAX_LEN);
        check_len(&mut errors, "constraint_list", list.as_deref(), LIST_MAX_LEN);

        let type_code = self.constraint_type.trim();
        let constraint_type = if type_code.is_empty() {
            errors.add("constraint_type", REQUIRED);
            None
        } else {
            match type_code.parse::<ConstraintType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.add(
                        "constraint_type",
                        format!(
                            "Select a valid choice. {type_code} is not one of the available choices."
                        ),
                    );
                    None
                }
            }
        };

        if let Some(t) = constraint_type {
            check_type_rules(&mut errors, t, min.as_deref(), max.as_deref(), list.as_deref());
        }

        match constraint_type {
            Some(constraint_type) if errors.is_empty() => Ok(ConstraintFields {
                constraint_name: name.to_string(),
                constraint_descr: descr,
                constraint_type,
                constraint_min: min,
                constraint_max: max,
                constraint_list: list,
            }),
            _ => Err(errors),
        }
    }
}

fn check_type_rules(
    errors: &mut FormErrors,
    constraint_type: ConstraintType,
    min: Option<&str>,
    max: Option<&str>,
    list: Option<&str>,
) {
    match constraint_type {
        ConstraintType::IntRange => {
            let lo = parse_int(errors, "constraint_min", min);
            let hi = parse_int(errors, "constraint_max", max);
            if let (Some(lo), Some(hi)) = (lo, hi) {
                if lo > hi {
                    errors.add_non_field("Minimum must not exceed maximum.");
                }
            }
        }
        ConstraintType::CharRange => {
            if let (Some(lo), Some(hi)) = (min, max) {
                if lo > hi {
                    errors.add_non_field("Minimum must not exceed maximum.");
                }
            }
        }
        ConstraintType::IntList => {
            if let Some(list) = list {
                for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                    if entry.parse::<i64>().is_err() {
                        errors.add("constraint_list", format!("'{entry}' is not a whole number."));
                    }
                }
            }
        }
        ConstraintType::CharList => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, t: &str) -> ConstraintForm {
        ConstraintForm {
            constraint_name: name.to_string(),
            constraint_type: t.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_int_range() {
        let mut f = form("  Weight ", "Int-MM");
        f.constraint_min = "0".into();
        f.constraint_max = "500".into();

        let fields = f.validate().unwrap();
        assert_eq!(fields.constraint_name, "Weight");
        assert_eq!(fields.constraint_type, ConstraintType::IntRange);
        assert_eq!(fields.constraint_min.as_deref(), Some("0"));
        assert_eq!(fields.constraint_max.as_deref(), Some("500"));
        assert_eq!(fields.constraint_descr, None);
        assert_eq!(fields.constraint_list, None);
    }

    #[test]
    fn test_missing_name_and_type() {
        let errors = ConstraintForm::default().validate().unwrap_err();
        assert!(errors.has("constraint_name"));
        assert!(errors.has("constraint_type"));
        assert_eq!(errors.get("constraint_name"), [REQUIRED.to_string()]);
    }

    #[test]
    fn test_unknown_type() {
        let errors = form("Weight", "Float-MM").validate().unwrap_err();
        assert!(errors.get("constraint_type")[0].contains("Float-MM"));
    }

    #[test]
    fn test_name_too_long() {
        let errors = form(&"n".repeat(31), "Char-List").validate().unwrap_err();
        assert!(errors.has("constraint_name"));
        assert!(form(&"n".repeat(30), "Char-List").validate().is_ok());
    }

    #[test]
    fn test_int_range_rejects_non_numbers_and_inverted_bounds() {
        let mut f = form("Weight", "Int-MM");
        f.constraint_min = "ten".into();
        let errors = f.validate().unwrap_err();
        assert!(errors.has("constraint_min"));

        let mut f = form("Weight", "Int-MM");
        f.constraint_min = "10".into();
        f.constraint_max = "9".into();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.non_field_errors.len(), 1);
    }

    #[test]
    fn test_char_range_compares_lexically() {
        let mut f = form("Row", "Char-MM");
        f.constraint_min = "A".into();
        f.constraint_max = "F".into();
        assert!(f.validate().is_ok());

        f.constraint_min = "G".into();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_int_list_entries() {
        let mut f = form("Shelf", "Int-List");
        f.constraint_list = "1, 2,3".into();
        assert!(f.validate().is_ok());

        f.constraint_list = "1,two,3".into();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("constraint_list").len(), 1);
    }

    #[test]
    fn test_list_too_long() {
        let mut f = form("Bins", "Char-List");
        f.constraint_list = "a".repeat(LIST_MAX_LEN + 1);
        assert!(f.validate().unwrap_err().has("constraint_list"));
    }

    #[test]
    fn test_from_constraint_round_trip() {
        let fields = ConstraintFields::new("Weight", ConstraintType::IntRange)
            .with_range("0", "500")
            .with_descr("Box weight in pounds");
        let record = Constraint::from_fields(4, fields.clone());

        let f = ConstraintForm::from_constraint(&record);
        assert_eq!(f.constraint_type, "Int-MM");
        assert_eq!(f.constraint_list, "");
        assert_eq!(f.validate().unwrap(), fields);
    }
}
