//! Precondition errors raised by ink model mutations and accessors.
//!
//! # Invariants
//! - Errors are caller contract violations; nothing here is retryable.
//! - Empty containers never yield a sentinel value in place of an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, InvalidStateError>;

/// Operation attempted on a container that does not have the required element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    /// The writing has no stroke to extend or inspect.
    NoStrokes { operation: &'static str },
    /// The stroke has no point to inspect.
    NoPoints { operation: &'static str },
}

impl Display for InvalidStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoStrokes { operation } => {
                write!(f, "invalid state: `{operation}` requires at least one stroke")
            }
            Self::NoPoints { operation } => {
                write!(f, "invalid state: `{operation}` requires at least one point")
            }
        }
    }
}

impl Error for InvalidStateError {}
