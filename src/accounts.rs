//! Account forms module.
//!
//! Re-exports the login and registration schemas, controller constructors,
//! and typed views over submitted values.

pub use protectora_accounts::*;
