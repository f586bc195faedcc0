//! Form data model and validation module.
//!
//! Re-exports the field value map, error map, and declarative schema types.
//!
//! # Examples
//!
//! ```
//! use protectora::forms::{FieldSpec, FormSchema, FormValues};
//!
//! let schema = FormSchema::new()
//!     .with_field(FieldSpec::new("email").required("Email es requerido"));
//!
//! let mut values = FormValues::new();
//! values.set("email", "ana@example.com");
//! assert!(schema.validate(&values).is_empty());
//! ```

pub use protectora_forms::*;
