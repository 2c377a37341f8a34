// src/application/validation.rs
//! Field-level checks that run on untrusted input before any entity is touched.

use serde::Serialize;
use std::fmt;

/// Length limits for article input fields, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub title_max_chars: usize,
    pub path_max_chars: usize,
    pub digest_max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            title_max_chars: 255,
            path_max_chars: 255,
            digest_max_chars: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldViolation>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Non-blank and at most `max` characters.
    pub fn check_required(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        match value {
            None => self.push(field, format!("{field} is required")),
            Some(v) if v.trim().is_empty() => self.push(field, format!("{field} cannot be empty")),
            Some(v) => self.check_max_chars(field, v, max),
        }
    }

    /// Present and 1..=`max` characters. Whitespace counts as content.
    pub fn check_length(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        match value {
            None => self.push(field, format!("{field} is required")),
            Some("") => self.push(field, format!("{field} cannot be empty")),
            Some(v) => self.check_max_chars(field, v, max),
        }
    }

    pub fn check_optional(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            self.check_max_chars(field, v, max);
        }
    }

    pub fn check_present<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.push(field, format!("{field} is required"));
        }
    }

    fn check_max_chars(&mut self, field: &'static str, value: &str, max: usize) {
        let len = value.chars().count();
        if len > max {
            self.push(
                field,
                format!("{field} must be at most {max} characters (got {len})"),
            );
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(&violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_reports_missing_blank_and_too_long() {
        let mut errors = FieldErrors::new();
        errors.check_required("title", None, 5);
        errors.check_required("path", Some("   "), 5);
        errors.check_required("digest", Some("abcdef"), 5);
        errors.check_required("ok", Some("abc"), 5);

        let fields: Vec<_> = errors.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["title", "path", "digest"]);
        assert_eq!(
            errors.to_string(),
            "title is required; path cannot be empty; digest must be at most 5 characters (got 6)"
        );
    }

    #[test]
    fn length_check_counts_whitespace_as_content() {
        let mut errors = FieldErrors::new();
        errors.check_length("title", Some("   "), 5);
        assert!(errors.is_empty());

        errors.check_length("title", Some(""), 5);
        errors.check_length("title", Some("      "), 5);
        assert_eq!(
            errors.to_string(),
            "title cannot be empty; title must be at most 5 characters (got 6)"
        );
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.check_optional("digest", Some("日本語"), 3);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn optional_field_may_be_absent() {
        let mut errors = FieldErrors::new();
        errors.check_optional("digest", None, 0);
        errors.check_present("words", Some(&3u32));
        assert!(errors.is_empty());
    }
}
