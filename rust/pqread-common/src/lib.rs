//! Core definitions (error type, result alias and verification helpers),
//! relied upon by all pqread-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
