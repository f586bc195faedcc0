//! The form controller state machine.

use crate::backend::{SubmitBackend, SubmitError};
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::state::{RenderState, SubmissionState};
use parking_lot::Mutex;
use protectora_forms::{FieldValue, FormErrors, FormSchema, FormValues};
use serde::Serialize;
use std::sync::Arc;

/// Fallback banner when no form-specific failure message was configured.
const DEFAULT_FAILURE_MESSAGE: &str = "Error al enviar el formulario. Por favor intenta nuevamente.";

/// Consistent view of a controller, published to observers on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
	pub values: FormValues,
	pub errors: FormErrors,
	pub state: SubmissionState,
}

impl FormSnapshot {
	/// Derived render state for the presentation layer.
	pub fn render_state(&self) -> RenderState {
		match self.state {
			SubmissionState::Submitting => RenderState::Submitting,
			SubmissionState::Succeeded => RenderState::Success,
			SubmissionState::Idle if !self.errors.is_empty() => RenderState::Invalid,
			SubmissionState::Idle => RenderState::Idle,
		}
	}
}

/// How a [`FormController::submit`] call ended.
#[derive(Debug)]
pub enum SubmitOutcome {
	/// The backend accepted the values; the form is now `Succeeded`.
	Succeeded,
	/// Validation failed; errors were republished and the form stayed `Idle`.
	Invalid,
	/// The backend failed; a form-level error was set and the form is `Idle`.
	Failed(SubmitError),
	/// The form was already `Submitting` or `Succeeded`; nothing happened.
	Ignored,
}

struct Inner {
	values: FormValues,
	errors: FormErrors,
	state: SubmissionState,
}

/// Stateful owner of one form's values, errors, and submission status.
///
/// Cloning produces another handle to the same form; login and registration
/// controllers are built separately and share nothing.
///
/// # Examples
///
/// ```
/// use protectora_flows::{FixedDelayBackend, FormController, SubmissionState, SubmitOutcome};
/// use protectora_forms::{FieldSpec, FormSchema};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let schema = FormSchema::new()
///     .with_field(FieldSpec::new("email").required("Email es requerido"));
/// let backend = Arc::new(FixedDelayBackend::new(Duration::from_millis(5)));
/// let controller = FormController::new(schema, backend);
///
/// // Validation failure keeps the form Idle and publishes errors
/// assert!(matches!(controller.submit().await, SubmitOutcome::Invalid));
/// assert_eq!(controller.errors().get("email"), Some("Email es requerido"));
///
/// controller.set_text("email", "ana@example.com");
/// assert!(matches!(controller.submit().await, SubmitOutcome::Succeeded));
/// assert_eq!(controller.state(), SubmissionState::Succeeded);
/// # }
/// ```
#[derive(Clone)]
pub struct FormController {
	schema: Arc<FormSchema>,
	backend: Arc<dyn SubmitBackend>,
	failure_message: Arc<str>,
	inner: Arc<Mutex<Inner>>,
	notifier: ChangeNotifier,
}

impl FormController {
	/// Create a controller for a schema with an injected backend.
	///
	/// Every declared field starts blank, so a snapshot taken before any
	/// change event already carries the full field set.
	pub fn new(schema: FormSchema, backend: Arc<dyn SubmitBackend>) -> Self {
		let mut values = FormValues::new();
		for name in schema.field_names() {
			values.set(name, "");
		}
		Self {
			schema: Arc::new(schema),
			backend,
			failure_message: Arc::from(DEFAULT_FAILURE_MESSAGE),
			inner: Arc::new(Mutex::new(Inner {
				values,
				errors: FormErrors::new(),
				state: SubmissionState::Idle,
			})),
			notifier: ChangeNotifier::new(),
		}
	}

	/// Set the form-level banner shown when the backend fails.
	pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
		self.failure_message = Arc::from(message.into().as_str());
		self
	}

	/// Override one field's starting value (e.g. a checkbox defaulting to
	/// `false` instead of blank text).
	pub fn with_value(self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.inner.lock().values.set(name, value);
		self
	}

	/// Connect an observer; it receives a [`FormSnapshot`] after every change.
	pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
	where
		F: Fn(&FormSnapshot) + Send + Sync + 'static,
	{
		self.notifier.subscribe(callback)
	}

	/// Disconnect an observer.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		self.notifier.disconnect(id)
	}

	/// Current consistent view of values, errors, and state.
	pub fn snapshot(&self) -> FormSnapshot {
		let inner = self.inner.lock();
		FormSnapshot {
			values: inner.values.clone(),
			errors: inner.errors.clone(),
			state: inner.state,
		}
	}

	pub fn state(&self) -> SubmissionState {
		self.inner.lock().state
	}

	pub fn values(&self) -> FormValues {
		self.inner.lock().values.clone()
	}

	pub fn errors(&self) -> FormErrors {
		self.inner.lock().errors.clone()
	}

	/// Change event for a text field.
	///
	/// Valid in any state; updates exactly one field and does not trigger
	/// validation.
	pub fn set_text(&self, name: &str, value: impl Into<String>) {
		self.inner.lock().values.set(name, value.into());
		self.emit();
	}

	/// Change event for a checkbox field.
	pub fn set_flag(&self, name: &str, value: bool) {
		self.inner.lock().values.set(name, value);
		self.emit();
	}

	/// Submit action.
	///
	/// From `Idle`: validates, and either republishes errors (staying
	/// `Idle`) or enters `Submitting` and invokes the backend exactly once
	/// with a snapshot of the values. While `Submitting` or after
	/// `Succeeded` the call is inert and returns [`SubmitOutcome::Ignored`].
	///
	/// Dropping the returned future while it awaits the backend cancels the
	/// submission and rolls the state back to `Idle`.
	pub async fn submit(&self) -> SubmitOutcome {
		let snapshot_values = {
			let mut inner = self.inner.lock();
			match inner.state {
				SubmissionState::Submitting | SubmissionState::Succeeded => {
					tracing::debug!(state = ?inner.state, "submit ignored");
					return SubmitOutcome::Ignored;
				}
				SubmissionState::Idle => {}
			}

			let errors = self.schema.validate(&inner.values);
			if !errors.is_empty() {
				tracing::debug!(error_count = errors.len(), "validation failed");
				inner.errors = errors;
				drop(inner);
				self.emit();
				return SubmitOutcome::Invalid;
			}

			inner.errors = FormErrors::new();
			inner.state = SubmissionState::Submitting;
			inner.values.clone()
		};
		tracing::debug!("submitting");
		self.emit();

		let mut rollback = SubmittingGuard {
			inner: Arc::clone(&self.inner),
			notifier: self.notifier.clone(),
			armed: true,
		};
		let result = self.backend.submit(&snapshot_values).await;
		rollback.disarm();

		match result {
			Ok(()) => {
				self.inner.lock().state = SubmissionState::Succeeded;
				tracing::info!("submission succeeded");
				self.emit();
				SubmitOutcome::Succeeded
			}
			Err(err) => {
				{
					let mut inner = self.inner.lock();
					inner.state = SubmissionState::Idle;
					inner.errors.set_form_error(self.failure_message.as_ref());
				}
				tracing::info!(error = %err, "submission failed");
				self.emit();
				SubmitOutcome::Failed(err)
			}
		}
	}

	/// Reset action ("Cerrar sesión" / "Volver al formulario").
	///
	/// Leaves `Succeeded` for `Idle`, clearing errors and the success flag
	/// while retaining field values. Inert while a submission is in flight.
	pub fn reset(&self) {
		{
			let mut inner = self.inner.lock();
			if inner.state == SubmissionState::Submitting {
				return;
			}
			inner.state = SubmissionState::Idle;
			inner.errors.clear();
		}
		tracing::debug!("form reset");
		self.emit();
	}

	fn emit(&self) {
		let snapshot = self.snapshot();
		self.notifier.emit(&snapshot);
	}
}

/// Rolls a cancelled in-flight submission back to `Idle`.
///
/// Armed while the controller awaits the backend; if the `submit()` future
/// is dropped at that point, `Drop` restores an interactive state so an
/// unmounted form never stays wedged in `Submitting`.
struct SubmittingGuard {
	inner: Arc<Mutex<Inner>>,
	notifier: ChangeNotifier,
	armed: bool,
}

impl SubmittingGuard {
	fn disarm(&mut self) {
		self.armed = false;
	}
}

impl Drop for SubmittingGuard {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		let snapshot = {
			let mut inner = self.inner.lock();
			if inner.state != SubmissionState::Submitting {
				return;
			}
			inner.state = SubmissionState::Idle;
			FormSnapshot {
				values: inner.values.clone(),
				errors: inner.errors.clone(),
				state: inner.state,
			}
		};
		tracing::debug!("in-flight submission cancelled");
		self.notifier.emit(&snapshot);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::{FixedDelayBackend, SubmitResult};
	use async_trait::async_trait;
	use protectora_forms::FieldSpec;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::time::Duration;
	use tokio::sync::Notify;

	fn test_schema() -> FormSchema {
		FormSchema::new()
			.with_field(
				FieldSpec::new("email")
					.required("Email es requerido")
					.email("Email no válido"),
			)
			.with_field(
				FieldSpec::new("password")
					.required("Contraseña es requerida")
					.min_length(6, "Mínimo 6 caracteres"),
			)
	}

	fn fill_valid(controller: &FormController) {
		controller.set_text("email", "ana@example.com");
		controller.set_text("password", "secreto");
	}

	/// Counts invocations; fails the first `fail_first` calls.
	struct CountingBackend {
		calls: AtomicUsize,
		fail_first: usize,
	}

	impl CountingBackend {
		fn succeeding() -> Self {
			Self {
				calls: AtomicUsize::new(0),
				fail_first: 0,
			}
		}

		fn failing(times: usize) -> Self {
			Self {
				calls: AtomicUsize::new(0),
				fail_first: times,
			}
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl SubmitBackend for CountingBackend {
		async fn submit(&self, _values: &FormValues) -> SubmitResult {
			let call = self.calls.fetch_add(1, Ordering::SeqCst);
			if call < self.fail_first {
				Err(SubmitError::Rejected("credenciales incorrectas".to_string()))
			} else {
				Ok(())
			}
		}
	}

	/// Blocks until released, counting invocations.
	struct GatedBackend {
		release: Notify,
		calls: AtomicUsize,
	}

	impl GatedBackend {
		fn new() -> Self {
			Self {
				release: Notify::new(),
				calls: AtomicUsize::new(0),
			}
		}
	}

	#[async_trait]
	impl SubmitBackend for GatedBackend {
		async fn submit(&self, _values: &FormValues) -> SubmitResult {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.release.notified().await;
			Ok(())
		}
	}

	#[tokio::test]
	async fn test_declared_fields_start_blank() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);

		let values = controller.values();
		assert!(values.contains("email"));
		assert!(values.contains("password"));
		assert_eq!(values.text("email"), "");
		assert_eq!(controller.state(), SubmissionState::Idle);
	}

	#[tokio::test]
	async fn test_invalid_submit_stays_idle_and_skips_backend() {
		let backend = Arc::new(CountingBackend::succeeding());
		let controller = FormController::new(test_schema(), backend.clone());
		controller.set_text("password", "abc");

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Invalid));
		assert_eq!(controller.state(), SubmissionState::Idle);
		assert_eq!(backend.calls(), 0);
		let errors = controller.errors();
		assert_eq!(errors.get("email"), Some("Email es requerido"));
		assert_eq!(errors.get("password"), Some("Mínimo 6 caracteres"));
	}

	#[tokio::test]
	async fn test_revalidation_clears_fixed_fields() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);
		controller.submit().await;
		assert!(controller.errors().contains("email"));

		fill_valid(&controller);
		controller.set_text("password", "abc"); // still too short
		controller.submit().await;

		let errors = controller.errors();
		assert!(!errors.contains("email"));
		assert_eq!(errors.get("password"), Some("Mínimo 6 caracteres"));
	}

	#[tokio::test]
	async fn test_successful_submission_reaches_succeeded() {
		let backend = Arc::new(CountingBackend::succeeding());
		let controller = FormController::new(test_schema(), backend.clone());
		fill_valid(&controller);

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Succeeded));
		assert_eq!(controller.state(), SubmissionState::Succeeded);
		assert_eq!(backend.calls(), 1);
		assert!(controller.errors().is_empty());
	}

	#[tokio::test]
	async fn test_failed_submission_returns_to_idle_with_banner() {
		let backend = Arc::new(CountingBackend::failing(1));
		let controller = FormController::new(test_schema(), backend.clone())
			.with_failure_message("Error al iniciar sesión. Verifica tus credenciales.");
		fill_valid(&controller);

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert_eq!(controller.state(), SubmissionState::Idle);
		let errors = controller.errors();
		assert_eq!(
			errors.form_error(),
			Some("Error al iniciar sesión. Verifica tus credenciales.")
		);
		assert!(!errors.contains("email"));
		// Field values survive the failure
		assert_eq!(controller.values().text("email"), "ana@example.com");

		// Immediate retry is allowed and now succeeds
		let outcome = controller.submit().await;
		assert!(matches!(outcome, SubmitOutcome::Succeeded));
		assert_eq!(backend.calls(), 2);
	}

	#[tokio::test]
	async fn test_duplicate_submit_is_ignored_while_submitting() {
		let backend = Arc::new(GatedBackend::new());
		let controller = FormController::new(test_schema(), backend.clone());
		fill_valid(&controller);

		let first = controller.submit();
		futures::pin_mut!(first);
		assert!(futures::poll!(first.as_mut()).is_pending());
		assert_eq!(controller.state(), SubmissionState::Submitting);

		// Fire the submit action again mid-flight
		let second = controller.submit().await;
		assert!(matches!(second, SubmitOutcome::Ignored));

		backend.release.notify_one();
		let outcome = first.await;

		assert!(matches!(outcome, SubmitOutcome::Succeeded));
		assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_submit_after_success_is_ignored() {
		let backend = Arc::new(CountingBackend::succeeding());
		let controller = FormController::new(test_schema(), backend.clone());
		fill_valid(&controller);
		controller.submit().await;

		let outcome = controller.submit().await;

		assert!(matches!(outcome, SubmitOutcome::Ignored));
		assert_eq!(backend.calls(), 1);
	}

	#[tokio::test]
	async fn test_reset_returns_to_idle_and_keeps_values() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);
		fill_valid(&controller);
		controller.submit().await;
		assert_eq!(controller.state(), SubmissionState::Succeeded);

		controller.reset();

		assert_eq!(controller.state(), SubmissionState::Idle);
		assert!(controller.errors().is_empty());
		assert_eq!(controller.values().text("email"), "ana@example.com");
	}

	#[tokio::test]
	async fn test_dropping_submit_future_cancels_and_restores_idle() {
		let backend = Arc::new(GatedBackend::new());
		let controller = FormController::new(test_schema(), backend.clone());
		fill_valid(&controller);

		{
			let pending = controller.submit();
			futures::pin_mut!(pending);
			assert!(futures::poll!(pending.as_mut()).is_pending());
			assert_eq!(controller.state(), SubmissionState::Submitting);
		}

		assert_eq!(controller.state(), SubmissionState::Idle);
		// A fresh submission can start afterwards
		let fresh = controller.submit();
		futures::pin_mut!(fresh);
		assert!(futures::poll!(fresh.as_mut()).is_pending());
		assert_eq!(controller.state(), SubmissionState::Submitting);
	}

	#[tokio::test]
	async fn test_observers_see_transitions_in_order() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(FixedDelayBackend::new(Duration::from_millis(1))),
		);
		fill_valid(&controller);

		let states = Arc::new(parking_lot::Mutex::new(Vec::new()));
		let observed = Arc::clone(&states);
		controller.subscribe(move |snapshot| {
			observed.lock().push(snapshot.state);
		});

		controller.submit().await;

		let seen = states.lock();
		assert_eq!(
			seen.as_slice(),
			&[SubmissionState::Submitting, SubmissionState::Succeeded]
		);
	}

	#[tokio::test]
	async fn test_set_text_notifies_without_validating() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);
		let snapshots = Arc::new(parking_lot::Mutex::new(Vec::new()));
		let observed = Arc::clone(&snapshots);
		controller.subscribe(move |snapshot| {
			observed.lock().push(snapshot.clone());
		});

		controller.set_text("email", "not-an-email");

		let seen = snapshots.lock();
		assert_eq!(seen.len(), 1);
		// Change events never validate
		assert!(seen[0].errors.is_empty());
		assert_eq!(seen[0].values.text("email"), "not-an-email");
	}

	#[tokio::test]
	async fn test_render_state_derivation() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);
		assert_eq!(controller.snapshot().render_state(), RenderState::Idle);

		controller.submit().await; // invalid
		assert_eq!(controller.snapshot().render_state(), RenderState::Invalid);

		fill_valid(&controller);
		controller.submit().await;
		assert_eq!(controller.snapshot().render_state(), RenderState::Success);
	}

	#[tokio::test]
	async fn test_cloned_handles_share_state() {
		let controller = FormController::new(
			test_schema(),
			Arc::new(CountingBackend::succeeding()),
		);
		let other = controller.clone();

		other.set_text("email", "ana@example.com");

		assert_eq!(controller.values().text("email"), "ana@example.com");
	}
}
