//! Registration form.

use crate::messages;
use protectora_flows::{FormController, SubmitBackend};
use protectora_forms::{FieldSpec, FormSchema, FormValues};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Field names used by the registration form.
pub mod fields {
	pub const NOMBRE: &str = "nombre";
	pub const APELLIDO: &str = "apellido";
	pub const EMAIL: &str = "email";
	pub const PASSWORD: &str = "password";
	pub const CONFIRM_PASSWORD: &str = "confirm_password";
	pub const TELEFONO: &str = "telefono";
	pub const NEWSLETTER: &str = "newsletter";
}

/// Validation schema for the registration form.
///
/// `telefono` is optional (blank passes) and `newsletter` carries no rules;
/// the confirmation check runs even while the password itself is invalid,
/// so mismatched fields are flagged as early as possible.
pub fn register_schema() -> FormSchema {
	FormSchema::new()
		.with_field(FieldSpec::new(fields::NOMBRE).required(messages::NOMBRE_REQUIRED))
		.with_field(FieldSpec::new(fields::APELLIDO).required(messages::APELLIDO_REQUIRED))
		.with_field(
			FieldSpec::new(fields::EMAIL)
				.required(messages::EMAIL_REQUIRED)
				.email(messages::EMAIL_INVALID),
		)
		.with_field(
			FieldSpec::new(fields::PASSWORD)
				.required(messages::PASSWORD_REQUIRED)
				.min_length(6, messages::PASSWORD_TOO_SHORT),
		)
		.with_field(
			FieldSpec::new(fields::CONFIRM_PASSWORD)
				.equals_field(fields::PASSWORD, messages::PASSWORDS_DO_NOT_MATCH),
		)
		.with_field(FieldSpec::new(fields::TELEFONO).phone(messages::TELEFONO_INVALID))
		.with_field(FieldSpec::new(fields::NEWSLETTER))
}

/// Build the registration form controller over an injected backend.
///
/// The newsletter checkbox starts unchecked rather than blank.
pub fn register_controller(backend: Arc<dyn SubmitBackend>) -> FormController {
	FormController::new(register_schema(), backend)
		.with_failure_message(messages::REGISTER_FAILED)
		.with_value(fields::NEWSLETTER, false)
}

/// Typed view of the registration form's values, for backend implementations.
///
/// The confirmation field is a UI-only concern and is not part of the data
/// handed to a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationData {
	pub nombre: String,
	pub apellido: String,
	pub email: String,
	pub password: String,
	pub telefono: Option<String>,
	pub newsletter: bool,
}

impl RegistrationData {
	pub fn from_values(values: &FormValues) -> Self {
		let telefono = values.text(fields::TELEFONO);
		Self {
			nombre: values.text(fields::NOMBRE).to_string(),
			apellido: values.text(fields::APELLIDO).to_string(),
			email: values.text(fields::EMAIL).to_string(),
			password: values.text(fields::PASSWORD).to_string(),
			telefono: if telefono.trim().is_empty() {
				None
			} else {
				Some(telefono.to_string())
			},
			newsletter: values.flag(fields::NEWSLETTER),
		}
	}

	/// JSON body a networked backend would post.
	pub fn to_payload(&self) -> serde_json::Value {
		serde_json::json!({
			"nombre": self.nombre,
			"apellido": self.apellido,
			"email": self.email,
			"password": self.password,
			"telefono": self.telefono,
			"newsletter": self.newsletter,
		})
	}
}
