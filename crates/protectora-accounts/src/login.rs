//! Login form.

use crate::messages;
use protectora_flows::{FormController, SubmitBackend};
use protectora_forms::{FieldSpec, FormSchema, FormValues};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Field names used by the login form.
pub mod fields {
	pub const EMAIL: &str = "email";
	pub const PASSWORD: &str = "password";
}

/// Validation schema for the login form.
///
/// # Examples
///
/// ```
/// use protectora_accounts::login_schema;
/// use protectora_forms::FormValues;
///
/// let mut values = FormValues::new();
/// values.set("email", "");
/// values.set("password", "abc");
///
/// let errors = login_schema().validate(&values);
/// assert_eq!(errors.get("email"), Some("Email es requerido"));
/// assert_eq!(errors.get("password"), Some("Mínimo 6 caracteres"));
/// ```
pub fn login_schema() -> FormSchema {
	FormSchema::new()
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
}

/// Build the login form controller over an injected backend.
pub fn login_controller(backend: Arc<dyn SubmitBackend>) -> FormController {
	FormController::new(login_schema(), backend).with_failure_message(messages::LOGIN_FAILED)
}

/// Typed view of the login form's values, for backend implementations.
///
/// # Examples
///
/// ```
/// use protectora_accounts::LoginCredentials;
/// use protectora_forms::FormValues;
///
/// let mut values = FormValues::new();
/// values.set("email", "ana@example.com");
/// values.set("password", "secreto");
///
/// let credentials = LoginCredentials::from_values(&values);
/// assert_eq!(credentials.email, "ana@example.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
	pub email: String,
	pub password: String,
}

impl LoginCredentials {
	pub fn from_values(values: &FormValues) -> Self {
		Self {
			email: values.text(fields::EMAIL).to_string(),
			password: values.text(fields::PASSWORD).to_string(),
		}
	}

	/// JSON body a networked backend would post.
	pub fn to_payload(&self) -> serde_json::Value {
		serde_json::json!({
			"email": self.email,
			"password": self.password,
		})
	}
}
