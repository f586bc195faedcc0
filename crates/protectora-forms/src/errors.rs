//! Validation and submission error messages keyed by field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved key for form-level (non-field-specific) errors.
///
/// Used for submission failures that cannot be attributed to a single
/// field, such as a rejected login attempt.
pub const FORM_ERROR_KEY: &str = "form";

/// Mapping from field name to a human-readable error message.
///
/// A validation pass fully replaces the map rather than merging into it, so
/// an entry is present exactly when the most recent pass flagged the field.
/// The reserved [`FORM_ERROR_KEY`] entry carries the banner message shown
/// when a submission itself fails.
///
/// # Examples
///
/// ```
/// use protectora_forms::{FORM_ERROR_KEY, FormErrors};
///
/// let mut errors = FormErrors::new();
/// errors.insert("email", "Email es requerido");
/// assert_eq!(errors.get("email"), Some("Email es requerido"));
/// assert!(errors.form_error().is_none());
///
/// errors.set_form_error("Error al iniciar sesión. Verifica tus credenciales.");
/// assert!(errors.get(FORM_ERROR_KEY).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
	errors: HashMap<String, String>,
}

impl FormErrors {
	/// Create an empty error map (the "valid" result).
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a message for one field, replacing any previous one.
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.errors.insert(field.into(), message.into());
	}

	/// Message for a field, if the last pass flagged it.
	pub fn get(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.errors.contains_key(field)
	}

	/// Set the form-level banner message.
	pub fn set_form_error(&mut self, message: impl Into<String>) {
		self.errors.insert(FORM_ERROR_KEY.to_string(), message.into());
	}

	/// The form-level banner message, if any.
	pub fn form_error(&self) -> Option<&str> {
		self.get(FORM_ERROR_KEY)
	}

	/// `true` when the last validation pass found no problems.
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn clear(&mut self) {
		self.errors.clear();
	}

	/// Iterate over `(field, message)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_get() {
		let mut errors = FormErrors::new();
		assert!(errors.is_empty());

		errors.insert("password", "Mínimo 6 caracteres");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get("password"), Some("Mínimo 6 caracteres"));
		assert!(errors.get("email").is_none());
	}

	#[test]
	fn test_form_error_uses_reserved_key() {
		let mut errors = FormErrors::new();
		errors.set_form_error("Error al registrar. Por favor intenta nuevamente.");

		assert_eq!(
			errors.form_error(),
			Some("Error al registrar. Por favor intenta nuevamente.")
		);
		assert!(errors.contains(FORM_ERROR_KEY));
		assert_eq!(errors.len(), 1);
	}

	#[test]
	fn test_form_error_keeps_field_entries() {
		let mut errors = FormErrors::new();
		errors.insert("email", "Email no válido");
		errors.set_form_error("Algo salió mal");

		assert_eq!(errors.len(), 2);
		assert!(errors.contains("email"));
		assert!(errors.form_error().is_some());
	}

	#[test]
	fn test_clear() {
		let mut errors = FormErrors::new();
		errors.insert("email", "Email es requerido");
		errors.clear();
		assert!(errors.is_empty());
	}
}
