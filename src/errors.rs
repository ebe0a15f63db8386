//! Error handling types based on `failure` crate.
//!
//! All failures in this crate are a single error kind carrying a
//! human-readable message. A translation error is fatal only to the one
//! function being processed; the driver is expected to log it, skip the
//! function and continue.

pub type Result<T> = std::result::Result<T, failure::Error>;
pub use failure::{bail, ensure, err_msg, format_err, Error, ResultExt};
