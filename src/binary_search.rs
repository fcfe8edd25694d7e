//! Binary search over sorted, indexable sequences.
//!
//! [`binary_search`] works on anything implementing [`IndexedRead`]: a
//! [`DynamicArray`](crate::DynamicArray), or plain slices of `i32`, `f64` or
//! [`Element`]. The sequence must already be sorted in non-decreasing order;
//! this is not checked.
//!
//! When the key occurs more than once the **leftmost** matching index is
//! returned.
//!
//! # Examples
//!
//! ```
//! use dynamic_array::{binary_search, DynamicArray, ElementKind};
//!
//! let arr = DynamicArray::from_values(ElementKind::Integer, [-3, 0, 2, 5, 5]).unwrap();
//! assert_eq!(binary_search(&arr, 5), Some(3));
//! assert_eq!(binary_search(&arr, 10), None);
//!
//! let raw: &[f64] = &[1.0, 2.0, 3.0, 4.0];
//! assert_eq!(binary_search(raw, 3), Some(2));
//! ```

use crate::element::{Element, Value};
use std::cmp::Ordering;

/// Read-only length + indexed access.
pub trait IndexedRead {
    /// Number of readable elements.
    fn length(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn read(&self, index: usize) -> Option<Element>;
}

impl IndexedRead for [i32] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        self.get(index).map(|&n| Element::Int(n))
    }
}

impl IndexedRead for [f64] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        self.get(index).map(|&x| Element::Float(x))
    }
}

impl IndexedRead for [Element] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        self.get(index).copied()
    }
}

impl<T> IndexedRead for Vec<T>
where
    [T]: IndexedRead,
{
    #[inline]
    fn length(&self) -> usize {
        self.as_slice().length()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        self.as_slice().read(index)
    }
}

impl<T, const N: usize> IndexedRead for [T; N]
where
    [T]: IndexedRead,
{
    #[inline]
    fn length(&self) -> usize {
        self.as_slice().length()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        self.as_slice().read(index)
    }
}

/// Find `key` in the ascending sequence `seq`.
///
/// Returns the leftmost index holding a value numerically equal to `key`, or
/// `None` when there is none. Keys that cannot be ordered against the
/// elements (non-numeric values, NaN) are never found.
///
/// Runs in O(log n) reads; every read stays inside `[0, seq.length())`.
pub fn binary_search<S>(seq: &S, key: impl Into<Value>) -> Option<usize>
where
    S: IndexedRead + ?Sized,
{
    let key = key.into();
    let mut lo = 0;
    let mut hi = seq.length();

    // Lower bound: first position whose element is not less than key
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match seq.read(mid)?.compare_value(&key)? {
            Ordering::Less => lo = mid + 1,
            Ordering::Equal | Ordering::Greater => hi = mid,
        }
    }

    let found = seq.read(lo)?;
    (found == key).then_some(lo)
}
