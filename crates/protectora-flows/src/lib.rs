//! Form controller flows for Protectora
//!
//! This crate owns the interaction model behind every form on the site:
//! a [`FormController`] holds field values, errors, and a submission state
//! machine (`Idle` → `Submitting` → `Succeeded`), validates through a
//! `FormSchema`, and hands validated values to an injected [`SubmitBackend`].
//!
//! The controller is a cheap-to-clone handle; the presentation layer
//! subscribes to it and receives a consistent [`FormSnapshot`] after every
//! change. There is no implicit reactivity.
//!
//! Two guarantees hold regardless of how the UI is wired:
//! - at most one backend invocation per `Submitting` episode (duplicate
//!   submits are inert at the controller level)
//! - dropping an in-flight `submit()` future aborts the backend call and
//!   returns the controller to `Idle`

pub mod backend;
pub mod controller;
pub mod notify;
pub mod state;

pub use backend::{FixedDelayBackend, SubmitBackend, SubmitError, SubmitResult};
pub use controller::{FormController, FormSnapshot, SubmitOutcome};
pub use notify::{ChangeNotifier, SubscriptionId};
pub use state::{RenderState, SubmissionState};
