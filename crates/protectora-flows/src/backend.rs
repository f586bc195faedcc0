//! Submission backends.
//!
//! A backend is the external collaborator that receives validated form
//! values. The site today has no server, so the bundled implementation
//! resolves against a timer; a networked implementation only has to honor
//! the same two-outcome contract.

use async_trait::async_trait;
use protectora_forms::FormValues;
use std::time::Duration;

/// Why a submission failed.
///
/// Every variant is recoverable: the controller returns to an interactive
/// state and the user may retry immediately.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
	#[error("submission rejected: {0}")]
	Rejected(String),
	#[error("backend unavailable: {0}")]
	Unavailable(String),
}

pub type SubmitResult = Result<(), SubmitError>;

/// Asynchronous destination for validated form values.
///
/// Injected into the controller so a real authentication or registration
/// API can replace the simulated one without touching the state machine.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use protectora_flows::{SubmitBackend, SubmitError, SubmitResult};
/// use protectora_forms::FormValues;
///
/// struct RejectAll;
///
/// #[async_trait]
/// impl SubmitBackend for RejectAll {
///     async fn submit(&self, _values: &FormValues) -> SubmitResult {
///         Err(SubmitError::Rejected("cerrado por vacaciones".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait SubmitBackend: Send + Sync {
	/// Deliver one snapshot of validated values.
	async fn submit(&self, values: &FormValues) -> SubmitResult;
}

/// Simulated API call: sleeps for a fixed delay, then succeeds.
///
/// The original site resolves both login and registration against a one
/// second timer, which [`FixedDelayBackend::default`] reproduces.
///
/// # Examples
///
/// ```
/// use protectora_flows::FixedDelayBackend;
/// use std::time::Duration;
///
/// let backend = FixedDelayBackend::new(Duration::from_millis(10));
/// assert_eq!(backend.delay(), Duration::from_millis(10));
/// ```
#[derive(Debug, Clone)]
pub struct FixedDelayBackend {
	delay: Duration,
}

impl FixedDelayBackend {
	pub fn new(delay: Duration) -> Self {
		Self { delay }
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}

impl Default for FixedDelayBackend {
	fn default() -> Self {
		Self::new(Duration::from_millis(1000))
	}
}

#[async_trait]
impl SubmitBackend for FixedDelayBackend {
	async fn submit(&self, _values: &FormValues) -> SubmitResult {
		tokio::time::sleep(self.delay).await;
		Ok(())
	}
}
