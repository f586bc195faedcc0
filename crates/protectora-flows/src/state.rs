//! Submission state machine states.

use serde::{Deserialize, Serialize};

/// Lifecycle of one form's submission.
///
/// `Idle` is the initial state. `Submitting` is entered only after a clean
/// validation pass. `Succeeded` is terminal until an explicit reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	Succeeded,
}

/// What the presentation layer should render right now.
///
/// Derived from [`SubmissionState`] plus the error map: an idle form with
/// errors renders as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
	Idle,
	Invalid,
	Submitting,
	Success,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_initial_state_is_idle() {
		assert_eq!(SubmissionState::default(), SubmissionState::Idle);
	}

	#[test]
	fn test_state_serialization() {
		let json = serde_json::to_string(&SubmissionState::Submitting).unwrap();
		assert_eq!(json, "\"submitting\"");
	}
}
