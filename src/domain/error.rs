//! Domain error taxonomy
//!
//! Validation failures carry field-keyed messages so the HTTP layer can
//! serialize them in the `{"field": ["message", ...]}` body format the API
//! exposes. Token errors are deliberately generic: the caller must never be
//! able to distinguish "expired" from "unknown" or "ambiguous".

use std::collections::BTreeMap;

use thiserror::Error;

/// Key used for errors that are not attributable to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        Self::single(NON_FIELD_ERRORS, message)
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity}")]
    NotFound { entity: &'static str },

    /// 400 with field-keyed messages.
    #[error("Validation: {0}")]
    Fields(FieldErrors),

    /// 400 with a single `detail` string.
    #[error("{0}")]
    Detail(String),

    /// 400 with a list of messages under `detail`.
    #[error("{}", .0.join("; "))]
    DetailList(Vec<String>),

    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// 501 — the optional email subsystem is turned off.
    #[error("Email service is disabled.")]
    EmailServiceDisabled,

    /// Upstream payment gateway answered with a non-success status.
    #[error("Payment gateway error ({status}): {body}")]
    Gateway { status: u16, body: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fields(FieldErrors::single(field, message))
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        Self::Fields(FieldErrors::non_field(message))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("start_date", "Start date must be earlier than end_date.");
        errors.add("end_date", "End date must be later than start_date.");
        errors.add("end_date", "another");

        let map = errors.into_inner();
        assert_eq!(map["start_date"].len(), 1);
        assert_eq!(map["end_date"].len(), 2);
    }

    #[test]
    fn non_field_errors_use_reserved_key() {
        let errors = FieldErrors::non_field("overlap");
        let map = errors.into_inner();
        assert_eq!(map[NON_FIELD_ERRORS], vec!["overlap".to_string()]);
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = FieldErrors::new();
        errors.add("a", "one");
        errors.add("b", "two");
        assert_eq!(errors.to_string(), "a: one; b: two");
    }
}
