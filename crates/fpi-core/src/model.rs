//! The constraint entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of rule a constraint expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    /// Integer minimum/maximum range.
    #[serde(rename = "Int-MM")]
    IntRange,
    /// Character minimum/maximum range.
    #[serde(rename = "Char-MM")]
    CharRange,
    /// List of valid integers.
    #[serde(rename = "Int-List")]
    IntList,
    /// List of valid character values.
    #[serde(rename = "Char-List")]
    CharList,
}

impl ConstraintType {
    /// Every constraint type, in display order.
    pub const ALL: [ConstraintType; 4] = [
        ConstraintType::IntRange,
        ConstraintType::CharRange,
        ConstraintType::IntList,
        ConstraintType::CharList,
    ];

    /// The range types, which use min/max rather than a value list.
    pub const RANGES: [ConstraintType; 2] = [ConstraintType::IntRange, ConstraintType::CharRange];

    /// Stored code for this type.
    pub fn code(self) -> &'static str {
        match self {
            ConstraintType::IntRange => "Int-MM",
            ConstraintType::CharRange => "Char-MM",
            ConstraintType::IntList => "Int-List",
            ConstraintType::CharList => "Char-List",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ConstraintType::IntRange => "Integer Min/Max",
            ConstraintType::CharRange => "Character Min/Max",
            ConstraintType::IntList => "Integer Valid List",
            ConstraintType::CharList => "Character Valid List",
        }
    }

    pub fn is_range(self) -> bool {
        matches!(self, ConstraintType::IntRange | ConstraintType::CharRange)
    }

    pub fn is_list(self) -> bool {
        !self.is_range()
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A string did not name a known constraint type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown constraint type: {0}")]
pub struct UnknownConstraintType(pub String);

impl FromStr for ConstraintType {
    type Err = UnknownConstraintType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownConstraintType(s.to_string()))
    }
}

/// Field values of a constraint, without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintFields {
    pub constraint_name: String,
    pub constraint_descr: Option<String>,
    pub constraint_type: ConstraintType,
    pub constraint_min: Option<String>,
    pub constraint_max: Option<String>,
    pub constraint_list: Option<String>,
}

impl ConstraintFields {
    /// Create fields with only a name and type set.
    pub fn new(name: impl Into<String>, constraint_type: ConstraintType) -> Self {
        Self {
            constraint_name: name.into(),
            constraint_descr: None,
            constraint_type,
            constraint_min: None,
            constraint_max: None,
            constraint_list: None,
        }
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.constraint_descr = Some(descr.into());
        self
    }

    pub fn with_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.constraint_min = Some(min.into());
        self.constraint_max = Some(max.into());
        self
    }

    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.constraint_list = Some(list.into());
        self
    }
}

/// A stored constraint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Identifier assigned by the store.
    pub constraint_id: u64,
    pub constraint_name: String,
    pub constraint_descr: Option<String>,
    pub constraint_type: ConstraintType,
    /// Minimum valid value, for range types.
    pub constraint_min: Option<String>,
    /// Maximum valid value, for range types.
    pub constraint_max: Option<String>,
    /// Comma separated valid values, for list types.
    pub constraint_list: Option<String>,
}

impl Constraint {
    /// Build a record from its identifier and field values.
    pub fn from_fields(constraint_id: u64, fields: ConstraintFields) -> Self {
        Self {
            constraint_id,
            constraint_name: fields.constraint_name,
            constraint_descr: fields.constraint_descr,
            constraint_type: fields.constraint_type,
            constraint_min: fields.constraint_min,
            constraint_max: fields.constraint_max,
            constraint_list: fields.constraint_list,
        }
    }

    /// The record's field values.
    pub fn fields(&self) -> ConstraintFields {
        ConstraintFields {
            constraint_name: self.constraint_name.clone(),
            constraint_descr: self.constraint_descr.clone(),
            constraint_type: self.constraint_type,
            constraint_min: self.constraint_min.clone(),
            constraint_max: self.constraint_max.clone(),
            constraint_list: self.constraint_list.clone(),
        }
    }

    /// Default ordering: by name, then by identifier.
    pub fn ordering(a: &Constraint, b: &Constraint) -> std::cmp::Ordering {
        a.constraint_name
            .cmp(&b.constraint_name)
            .then(a.constraint_id.cmp(&b.constraint_id))
    }
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.constraint_type.is_range() {
            write!(
                f,
                "{} - {} to {} ({})",
                self.constraint_name,
                or_none(&self.constraint_min),
                or_none(&self.constraint_max),
                self.constraint_type
            )?;
        } else {
            write!(
                f,
                "{} - {} ({})",
                self.constraint_name,
                or_none(&self.constraint_list),
                self.constraint_type
            )?;
        }
        if let Some(descr) = self.constraint_descr.as_deref().filter(|d| !d.is_empty()) {
            let short: String = descr.chars().take(50).collect();
            write!(f, " -- {}", short)?;
        }
        Ok(())
    }
}
