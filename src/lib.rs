//! Dynamic Array - Typed, Growable Numeric Arrays
//!
//! A contiguous, growable array whose elements all share one numeric kind
//! (32-bit integers or 64-bit floats), plus a binary search that works over
//! it. Arrays are built from a kind (or a typecode, `'i'` / `'d'`) and an
//! initial sequence of values; every write validates the offered value
//! against the kind and rejects it rather than converting lossily.
//!
//! # Key Characteristics
//!
//! - Elements stored in their native width, one buffer per array
//! - Amortized O(1) append through geometric capacity growth
//! - Negative indices count from the end
//! - Value-based equality across kinds: `[2.0, 5.0] == [2, 5]`
//! - Distinguishable failures: invalid element, out of range, value not found
//!
//! # Architecture
//!
//! - **DynamicArray**: capacity management, positional mutation, equality
//! - **Element / Value**: what the array stores and what callers offer
//! - **GrowthPolicy**: serde-configurable capacity growth
//! - **binary_search**: leftmost-match bisection over any [`IndexedRead`]
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use dynamic_array::{DynamicArray, ElementKind};
//!
//! let mut arr = DynamicArray::from_typecode('i', [4, 4, 1]).unwrap();
//! assert_eq!(arr.pop(-1).unwrap(), 1_i32);
//! assert_eq!(arr, [4, 4]);
//!
//! arr.append(7).unwrap();
//! arr.reversed();
//! assert_eq!(arr, [7, 4, 4]);
//!
//! // Floats are never truncated into an integer array
//! assert!(arr.append(1.5).is_err());
//! assert_eq!(arr.kind(), ElementKind::Integer);
//! ```
//!
//! ## Searching
//!
//! ```
//! use dynamic_array::{binary_search, DynamicArray, ElementKind};
//!
//! let arr = DynamicArray::from_values(ElementKind::Integer, [1, 2, 3, 4]).unwrap();
//! assert_eq!(binary_search(&arr, 3), Some(2));
//! assert_eq!(binary_search(&arr, 5), None);
//! ```
//!
//! ## Handling Errors
//!
//! ```
//! use dynamic_array::{DynamicArray, ElementKind, ErrorKind};
//!
//! let mut arr = DynamicArray::from_values(ElementKind::Float, [1.0]).unwrap();
//! let err = arr.append("not a number").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidElement);
//! assert_eq!(arr, [1.0]);
//! ```
//!
//! # Safety
//!
//! The crate contains no `unsafe`. Storage is a `Vec` sized to the array's
//! capacity, with `debug_assert!` guarding the shifting primitives.

pub mod binary_search;
pub mod dynamic_array;
pub mod element;
pub mod error;
pub mod growth;

// Re-exports for convenient access
pub use binary_search::{binary_search, IndexedRead};
pub use dynamic_array::{resolve_clamped, resolve_strict, DynamicArray, Iter};
pub use element::{Element, ElementKind, Value};
pub use error::{ArrayError, ErrorKind, Result};
pub use growth::{GrowthPolicy, GrowthStats, DEFAULT_GROWTH_FACTOR, DEFAULT_MIN_CAPACITY};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "dynamic-array";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
