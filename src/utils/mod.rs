//! Custom utilities.

pub mod error;
pub mod paths;

pub use error::{Error, ErrorKind, Result};
