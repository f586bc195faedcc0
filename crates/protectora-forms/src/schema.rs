//! Declarative form schemas.
//!
//! A [`FormSchema`] is a pure validator: it maps a [`FormValues`] snapshot
//! to a [`FormErrors`] map with no side effects. Rules are declared per
//! field and run in declaration order; the first failing rule of a field
//! supplies that field's message.

use crate::errors::FormErrors;
use crate::values::FormValues;
use regex::Regex;
use std::sync::LazyLock;

// Email pattern: exactly one `@` with at least one non-whitespace character
// before it, and a domain containing a `.` with characters on both sides.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Phone charset: digits, `+`, and spaces only.
static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9+ ]+$").expect("PHONE_REGEX: invalid regex pattern"));

/// A single validation rule attached to a field.
#[derive(Debug, Clone)]
enum Rule {
	/// Trimmed value must be non-empty.
	Required { message: String },
	/// Value must look like an email address.
	Email { message: String },
	/// Value must contain at least `min` characters.
	MinLength { min: usize, message: String },
	/// Value must equal another field's value exactly.
	EqualsField { other: String, message: String },
	/// Optional field: blank is valid, otherwise digits, `+`, and spaces only.
	Phone { message: String },
}

impl Rule {
	fn check(&self, field: &str, values: &FormValues) -> Result<(), &str> {
		match self {
			Rule::Required { message } => {
				let blank = values.get(field).is_none_or(|v| v.is_blank());
				if blank { Err(message) } else { Ok(()) }
			}
			Rule::Email { message } => {
				if EMAIL_REGEX.is_match(values.text(field)) {
					Ok(())
				} else {
					Err(message)
				}
			}
			Rule::MinLength { min, message } => {
				if values.text(field).chars().count() < *min {
					Err(message)
				} else {
					Ok(())
				}
			}
			Rule::EqualsField { other, message } => {
				if values.text(field) == values.text(other) {
					Ok(())
				} else {
					Err(message)
				}
			}
			Rule::Phone { message } => {
				let text = values.text(field);
				if text.trim().is_empty() || PHONE_REGEX.is_match(text) {
					Ok(())
				} else {
					Err(message)
				}
			}
		}
	}
}

/// One field's name and ordered rules.
///
/// Rules are evaluated in the order they were chained; the first failure
/// produces the field's message and later rules are skipped.
///
/// # Examples
///
/// ```
/// use protectora_forms::{FieldSpec, FormSchema, FormValues};
///
/// let schema = FormSchema::new().with_field(
///     FieldSpec::new("password")
///         .required("Contraseña es requerida")
///         .min_length(6, "Mínimo 6 caracteres"),
/// );
///
/// let mut values = FormValues::new();
/// values.set("password", "abc");
/// let errors = schema.validate(&values);
/// assert_eq!(errors.get("password"), Some("Mínimo 6 caracteres"));
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
	name: String,
	rules: Vec<Rule>,
}

impl FieldSpec {
	/// Declare a field with no rules yet.
	///
	/// A rule-less field is still part of the schema (the controller seeds a
	/// blank value for it) but never produces an error.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			rules: vec![],
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Require a non-blank (trimmed) value.
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.rules.push(Rule::Required {
			message: message.into(),
		});
		self
	}

	/// Require an email-shaped value.
	pub fn email(mut self, message: impl Into<String>) -> Self {
		self.rules.push(Rule::Email {
			message: message.into(),
		});
		self
	}

	/// Require at least `min` characters.
	pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
		self.rules.push(Rule::MinLength {
			min,
			message: message.into(),
		});
		self
	}

	/// Require exact equality with another field (password confirmation).
	///
	/// Runs even when both fields are blank; two blanks are equal and pass.
	pub fn equals_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
		self.rules.push(Rule::EqualsField {
			other: other.into(),
			message: message.into(),
		});
		self
	}

	/// Optional phone number: blank passes, anything else must be digits,
	/// `+`, and spaces only.
	pub fn phone(mut self, message: impl Into<String>) -> Self {
		self.rules.push(Rule::Phone {
			message: message.into(),
		});
		self
	}
}

/// Pure validator from [`FormValues`] to [`FormErrors`].
///
/// # Examples
///
/// ```
/// use protectora_forms::{FieldSpec, FormSchema, FormValues};
///
/// let schema = FormSchema::new()
///     .with_field(
///         FieldSpec::new("email")
///             .required("Email es requerido")
///             .email("Email no válido"),
///     )
///     .with_field(FieldSpec::new("newsletter"));
///
/// let mut values = FormValues::new();
/// values.set("email", "foo@bar");
/// let errors = schema.validate(&values);
/// assert_eq!(errors.get("email"), Some("Email no válido"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
	fields: Vec<FieldSpec>,
}

impl FormSchema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a field declaration.
	pub fn add_field(&mut self, spec: FieldSpec) {
		self.fields.push(spec);
	}

	/// Builder-style variant of [`FormSchema::add_field`].
	pub fn with_field(mut self, spec: FieldSpec) -> Self {
		self.fields.push(spec);
		self
	}

	/// Names of all declared fields, in declaration order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(FieldSpec::name)
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Validate a snapshot of values.
	///
	/// Returns a freshly built error map: one entry per failing field (first
	/// failing rule wins), empty when everything passes. Deterministic and
	/// free of side effects.
	pub fn validate(&self, values: &FormValues) -> FormErrors {
		let mut errors = FormErrors::new();
		for field in &self.fields {
			for rule in &field.rules {
				if let Err(message) = rule.check(&field.name, values) {
					errors.insert(field.name.as_str(), message);
					break;
				}
			}
		}
		errors
	}
}
