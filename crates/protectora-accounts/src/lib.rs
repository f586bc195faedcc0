//! Account forms for Protectora
//!
//! The two forms the site ships, wired onto the shared controller:
//! - [`login_controller`]: email + password
//! - [`register_controller`]: personal details, password confirmation, an
//!   optional phone number, and a newsletter checkbox
//!
//! Field names, validation messages, and failure banners are the Spanish
//! strings the site displays.

pub mod login;
pub mod messages;
pub mod register;

pub use login::{LoginCredentials, login_controller, login_schema};
pub use register::{RegistrationData, register_controller, register_schema};
