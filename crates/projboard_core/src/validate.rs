//! Form-field validation rules.
//!
//! # Responsibility
//! - Check one submitted field value against composable constraints.
//! - Keep field policy (lengths, ranges) out of the entity model.
//!
//! # Invariants
//! - Validation is pure: no side effects, no panics, no errors.
//! - Rules are type-gated: length rules apply to text only, range rules to
//!   counts only; a rule of the other type imposes no restriction.

/// One submitted field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free-form text input; checked after trimming.
    Text(&'a str),
    /// Numeric count input.
    Count(i64),
}

/// Constraint set for one field.
///
/// Every rule is optional; absent rules impose no restriction, present rules
/// must all pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Text must be non-blank after trimming; counts always count as present.
    pub required: bool,
    /// Minimum trimmed text length.
    pub min_length: Option<usize>,
    /// Maximum trimmed text length.
    pub max_length: Option<usize>,
    /// Minimum count value, inclusive.
    pub min: Option<i64>,
    /// Maximum count value, inclusive.
    pub max: Option<i64>,
}

/// Checks one field value against its constraint set.
pub fn validate(value: &FieldValue<'_>, rules: &FieldConstraints) -> bool {
    match *value {
        FieldValue::Text(text) => validate_text(text.trim(), rules),
        FieldValue::Count(count) => validate_count(count, rules),
    }
}

fn validate_text(trimmed: &str, rules: &FieldConstraints) -> bool {
    if rules.required && trimmed.is_empty() {
        return false;
    }
    if let Some(min_length) = rules.min_length {
        if trimmed.chars().count() < min_length {
            return false;
        }
    }
    if let Some(max_length) = rules.max_length {
        if trimmed.chars().count() > max_length {
            return false;
        }
    }
    true
}

fn validate_count(count: i64, rules: &FieldConstraints) -> bool {
    if let Some(min) = rules.min {
        if count < min {
            return false;
        }
    }
    if let Some(max) = rules.max {
        if count > max {
            return false;
        }
    }
    true
}
