//! Form and file validation
//!
//! Validators are small closures taking a field name and a raw value,
//! returning a French error message on failure.

pub mod validators;

pub use validators::{date_format, extension_in, in_list, optional, positive, required};
