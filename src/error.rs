//! Error types for the dynamic array crate.
//!
//! This module provides a unified error type for every fallible array
//! operation, using the `thiserror` crate for ergonomic error handling.

use crate::element::ElementKind;
use thiserror::Error;

/// The main error type for array operations.
///
/// Every variant is raised synchronously by the offending call, and the array
/// is left exactly as it was before the call.
#[derive(Error, Debug)]
pub enum ArrayError {
    /// A value cannot be represented in the array's element kind
    #[error("invalid element for {kind} array: {value}")]
    InvalidElement {
        /// Element kind of the array that rejected the value
        kind: ElementKind,
        /// Rendering of the rejected value
        value: String,
    },

    /// Resolved index falls outside `[0, length)`
    #[error("index out of range: index {index}, length {length}")]
    OutOfRange {
        /// The index as the caller passed it (before negative resolution)
        index: isize,
        /// The array length at the time of the call
        length: usize,
    },

    /// No element equals the requested value
    #[error("value not found in array: {value}")]
    ValueNotFound {
        /// Rendering of the value that was searched for
        value: String,
    },

    /// Unknown typecode passed to `DynamicArray::from_typecode`
    #[error("bad typecode (must be 'i' or 'd'): {0:?}")]
    InvalidTypecode(char),

    /// Growth policy failed validation
    #[error("invalid growth policy: {0}")]
    InvalidPolicy(String),

    /// Requested capacity does not fit in `usize`
    #[error("capacity overflow")]
    CapacityOverflow,

    /// Growth policy JSON could not be parsed or written
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Coarse classification of an [`ArrayError`].
///
/// Lets callers tell a type error from a bounds error from a missing value
/// without destructuring the variant payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidElement,
    OutOfRange,
    ValueNotFound,
    InvalidTypecode,
    InvalidPolicy,
    CapacityOverflow,
    Config,
}

impl ArrayError {
    /// Return the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::InvalidElement { .. } => ErrorKind::InvalidElement,
            ArrayError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ArrayError::ValueNotFound { .. } => ErrorKind::ValueNotFound,
            ArrayError::InvalidTypecode(_) => ErrorKind::InvalidTypecode,
            ArrayError::InvalidPolicy(_) => ErrorKind::InvalidPolicy,
            ArrayError::CapacityOverflow => ErrorKind::CapacityOverflow,
            ArrayError::Config(_) => ErrorKind::Config,
        }
    }
}

/// A specialized `Result` type for array operations.
///
/// This is a type alias for `Result<T, ArrayError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, ArrayError>;
