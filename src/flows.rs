//! Form controller module.
//!
//! Re-exports the controller state machine, its snapshot types, and the
//! submission backend trait with the bundled fixed-delay implementation.

pub use protectora_flows::*;
