//! Locale name tables.

mod builtin;

pub use builtin::Locale;
