//! Form data model and validation for Protectora
//!
//! This crate provides the pieces shared by every form on the site:
//! - [`FormValues`]: the current field values, mutated one field at a time
//! - [`FormErrors`]: per-field messages plus a reserved form-level entry
//! - [`FormSchema`]: a declarative, side-effect-free validator producing
//!   [`FormErrors`] from a [`FormValues`] snapshot
//!
//! Validation is deterministic: the same values always yield the same
//! errors, and the error map is fully replaced on every pass.

pub mod errors;
pub mod schema;
pub mod values;

pub use errors::{FORM_ERROR_KEY, FormErrors};
pub use schema::{FieldSpec, FormSchema};
pub use values::{FieldValue, FormValues};
