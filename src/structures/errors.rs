//! Input errors for staged values
//!
//! These never reach the screen. The store rejects the commit, leaves its
//! state untouched, and the caller decides whether to log it.

use thiserror::Error;

/// Reasons a staged value cannot be appended
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing has been typed
    #[error("no value entered")]
    Empty,

    /// The buffer does not start with a signed 64-bit integer
    #[error("'{input}' is not an integer")]
    NotAnInteger { input: String },
}
