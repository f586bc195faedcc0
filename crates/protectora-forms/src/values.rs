//! Field values for bound forms.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single form field value.
///
/// Text inputs carry a [`FieldValue::Text`]; checkboxes carry a
/// [`FieldValue::Bool`].
///
/// # Examples
///
/// ```
/// use protectora_forms::FieldValue;
///
/// let value = FieldValue::from("  ");
/// assert!(value.is_blank());
///
/// let flag = FieldValue::from(true);
/// assert!(!flag.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	Text(String),
	Bool(bool),
}

impl FieldValue {
	/// Returns the text content, or `None` for a boolean value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(text) => Some(text),
			FieldValue::Bool(_) => None,
		}
	}

	/// Returns the boolean content, or `None` for a text value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FieldValue::Text(_) => None,
			FieldValue::Bool(flag) => Some(*flag),
		}
	}

	/// Whether this value counts as empty for required-field checks.
	///
	/// Text is blank when its trimmed content is empty; booleans are never
	/// blank (an unchecked box is still an answer).
	pub fn is_blank(&self) -> bool {
		match self {
			FieldValue::Text(text) => text.trim().is_empty(),
			FieldValue::Bool(_) => false,
		}
	}
}

impl From<&str> for FieldValue {
	fn from(text: &str) -> Self {
		FieldValue::Text(text.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(text: String) -> Self {
		FieldValue::Text(text)
	}
}

impl From<bool> for FieldValue {
	fn from(flag: bool) -> Self {
		FieldValue::Bool(flag)
	}
}

/// Mapping from field name to current value.
///
/// Mutated only through [`FormValues::set`], one field at a time. Insertion
/// order is irrelevant; lookups are by name.
///
/// # Examples
///
/// ```
/// use protectora_forms::FormValues;
///
/// let mut values = FormValues::new();
/// values.set("email", "ana@example.com");
/// values.set("newsletter", true);
///
/// assert_eq!(values.text("email"), "ana@example.com");
/// assert!(values.flag("newsletter"));
/// assert_eq!(values.text("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
	values: HashMap<String, FieldValue>,
}

impl FormValues {
	/// Create an empty value map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set exactly one field to a new value.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
		self.values.insert(name.into(), value.into());
	}

	/// Get a field's value, if the field has been set.
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.values.get(name)
	}

	/// Text content of a field; missing or boolean fields read as `""`.
	pub fn text(&self, name: &str) -> &str {
		self.values
			.get(name)
			.and_then(FieldValue::as_text)
			.unwrap_or("")
	}

	/// Boolean content of a field; missing or text fields read as `false`.
	pub fn flag(&self, name: &str) -> bool {
		self.values
			.get(name)
			.and_then(FieldValue::as_bool)
			.unwrap_or(false)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterate over `(name, value)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}
