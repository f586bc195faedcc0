//! # Protectora
//!
//! Account-form handling for the Protectora animal-shelter site: a declarative
//! validator, a form controller state machine with injected asynchronous
//! submission, and the login/registration form definitions the site ships.
//!
//! There is no server and no persistence here. Submission goes through the
//! [`flows::SubmitBackend`] trait; the bundled [`flows::FixedDelayBackend`]
//! stands in for the real API, and a networked implementation can be dropped
//! in without touching the controller.
//!
//! ## Feature Flags
//!
//! - `forms` - Form values, errors, and declarative validation
//! - `flows` - Form controller state machine and submission backends
//! - `accounts` - Login and registration form definitions
//! - `full` (default) - All of the above
//!
//! ## Example
//!
//! ```
//! use protectora::accounts::login_controller;
//! use protectora::flows::{FixedDelayBackend, SubmitOutcome, SubmissionState};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let backend = Arc::new(FixedDelayBackend::new(Duration::from_millis(10)));
//! let controller = login_controller(backend);
//!
//! controller.set_text("email", "ana@example.com");
//! controller.set_text("password", "secreto");
//!
//! let outcome = controller.submit().await;
//! assert!(matches!(outcome, SubmitOutcome::Succeeded));
//! assert_eq!(controller.state(), SubmissionState::Succeeded);
//! # }
//! ```

#[cfg(feature = "accounts")]
pub mod accounts;
#[cfg(feature = "flows")]
pub mod flows;
#[cfg(feature = "forms")]
pub mod forms;

// Commonly used types at the crate root
#[cfg(feature = "forms")]
pub use protectora_forms::{FieldSpec, FieldValue, FormErrors, FormSchema, FormValues};

#[cfg(feature = "flows")]
pub use protectora_flows::{
	FormController, FormSnapshot, RenderState, SubmissionState, SubmitBackend, SubmitOutcome,
};
