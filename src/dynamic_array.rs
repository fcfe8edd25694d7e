//! DynamicArray - typed, growable array of integers or floats.
//!
//! This module provides a contiguous array whose element kind is chosen at
//! construction and never changes. Storage is a tagged union of two
//! monomorphic slot buffers, so each element is kept in its native width
//! (`i32` or `f64`).
//!
//! # Design
//!
//! - Each buffer is a `Vec` holding `capacity` slots plus a separate `len`
//! - Slots `[len, capacity)` are allocated but never read
//! - Growth follows a [`GrowthPolicy`] (doubling by default), giving
//!   amortized O(1) appends
//! - Insert/remove/pop shift elements inside the owned buffer
//! - Every write validates its value before touching storage
//!
//! Indices are `isize`: negative values count from the end. `get`, `set` and
//! `pop` are strict and fail with `OutOfRange`; `insert` clamps to the nearest
//! end instead.
//!
//! # Examples
//!
//! ```
//! use dynamic_array::{DynamicArray, ElementKind};
//!
//! let mut arr = DynamicArray::from_values(ElementKind::Float, [2.0, 5.0]).unwrap();
//! arr.insert(-1, 8.0).unwrap();
//! assert_eq!(arr, [2.0, 8.0, 5.0]);
//!
//! assert_eq!(arr.pop(-1).unwrap(), 5.0);
//! assert!(arr.append("not a number").is_err());
//! assert_eq!(arr.len(), 2);
//! ```

use crate::binary_search::IndexedRead;
use crate::element::{Element, ElementKind, Slot, Value};
use crate::error::{ArrayError, Result};
use crate::growth::{GrowthPolicy, GrowthStats};
use itertools::Itertools;
use std::fmt;

// =============================================================================
// Index Resolution
// =============================================================================

/// Resolve a possibly negative index for strict access (`get`, `set`, `pop`).
///
/// Negative indices count from the end (`length + index`). Returns `None`
/// when the resolved position is outside `[0, length)`.
///
/// # Examples
///
/// ```
/// use dynamic_array::resolve_strict;
///
/// assert_eq!(resolve_strict(-1, 3), Some(2));
/// assert_eq!(resolve_strict(3, 3), None);
/// assert_eq!(resolve_strict(-4, 3), None);
/// ```
#[inline]
pub fn resolve_strict(index: isize, length: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        (i < length).then_some(i)
    } else {
        let back = index.unsigned_abs();
        (back <= length).then(|| length - back)
    }
}

/// Resolve a possibly negative index for insertion.
///
/// Negative indices count from the end; anything before the start clamps to
/// 0 and anything past the end clamps to `length` (append).
///
/// # Examples
///
/// ```
/// use dynamic_array::resolve_clamped;
///
/// assert_eq!(resolve_clamped(-1, 2), 1);
/// assert_eq!(resolve_clamped(-10, 2), 0);
/// assert_eq!(resolve_clamped(10, 2), 2);
/// ```
#[inline]
pub fn resolve_clamped(index: isize, length: usize) -> usize {
    if index >= 0 {
        (index as usize).min(length)
    } else {
        length.saturating_sub(index.unsigned_abs())
    }
}

// =============================================================================
// Slot Storage
// =============================================================================

/// Fixed-width element buffer with explicit capacity.
///
/// `data.len()` is the capacity; only `data[..len]` holds live elements.
#[derive(Clone, Debug)]
struct Slots<T> {
    data: Vec<T>,
    len: usize,
}

impl<T: Slot> Slots<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity],
            len: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn live(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Move live elements into a fresh buffer of `new_cap` slots.
    ///
    /// Fails with `CapacityOverflow` if the buffer cannot be allocated; the
    /// old buffer is kept in that case.
    fn reallocate(&mut self, new_cap: usize, stats: &mut GrowthStats) -> Result<()> {
        debug_assert!(new_cap >= self.len);
        let mut data = Vec::new();
        data.try_reserve_exact(new_cap).map_err(|_| ArrayError::CapacityOverflow)?;
        data.extend_from_slice(&self.data[..self.len]);
        data.resize(new_cap, T::default());
        self.data = data;
        stats.record(self.len);
        Ok(())
    }

    /// Make room for `additional` more elements.
    fn reserve(
        &mut self,
        additional: usize,
        policy: &GrowthPolicy,
        stats: &mut GrowthStats,
    ) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow)?;
        if required > self.capacity() {
            let new_cap = policy.next_capacity(self.capacity(), required)?;
            self.reallocate(new_cap, stats)?;
        }
        Ok(())
    }

    /// Store `x` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// Capacity must already be reserved.
    fn insert(&mut self, pos: usize, x: T) {
        debug_assert!(pos <= self.len && self.len < self.capacity());
        self.data.copy_within(pos..self.len, pos + 1);
        self.data[pos] = x;
        self.len += 1;
    }

    /// Take the element at `pos`, shifting `(pos, len)` one slot left.
    fn remove(&mut self, pos: usize) -> T {
        debug_assert!(pos < self.len);
        let x = self.data[pos];
        self.data.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        x
    }

    fn shrink_to_fit(&mut self, stats: &mut GrowthStats) {
        if self.len < self.capacity() {
            self.data.truncate(self.len);
            self.data.shrink_to_fit();
            stats.record(self.len);
        }
    }
}

/// Storage tagged by element kind.
#[derive(Clone, Debug)]
enum Buffer {
    Integer(Slots<i32>),
    Float(Slots<f64>),
}

/// Run `$body` against the kind-specific slot buffer.
macro_rules! dispatch {
    ($buffer:expr, $slots:ident => $body:expr) => {
        match $buffer {
            Buffer::Integer($slots) => $body,
            Buffer::Float($slots) => $body,
        }
    };
}

impl Buffer {
    fn with_capacity(kind: ElementKind, capacity: usize) -> Self {
        match kind {
            ElementKind::Integer => Buffer::Integer(Slots::with_capacity(capacity)),
            ElementKind::Float => Buffer::Float(Slots::with_capacity(capacity)),
        }
    }
}

/// Convert `value` for a `T` slot or report it as an invalid element.
#[inline]
fn accept<T: Slot>(value: &Value) -> Result<T> {
    T::accept(value).ok_or_else(|| ArrayError::InvalidElement {
        kind: T::KIND,
        value: value.to_string(),
    })
}

// =============================================================================
// DynamicArray
// =============================================================================

/// Growable array of a single numeric element kind.
///
/// The array exclusively owns its buffer. Capacity only shrinks when
/// [`shrink_to_fit`](Self::shrink_to_fit) is called explicitly.
#[derive(Clone, Debug)]
pub struct DynamicArray {
    buffer: Buffer,
    policy: GrowthPolicy,
    stats: GrowthStats,
}

impl DynamicArray {
    /// Create an empty array. No storage is allocated until the first write.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let arr = DynamicArray::new(ElementKind::Integer);
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 0);
    /// ```
    pub fn new(kind: ElementKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(kind: ElementKind, capacity: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(kind, capacity),
            policy: GrowthPolicy::default(),
            stats: GrowthStats::default(),
        }
    }

    /// Create an empty array that grows according to `policy`.
    pub fn with_policy(kind: ElementKind, policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        let mut arr = Self::new(kind);
        arr.policy = policy;
        Ok(arr)
    }

    /// Create an array holding `values` in order.
    ///
    /// Every value is validated against `kind`; the first one that does not
    /// fit fails the whole construction with `InvalidElement`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let arr = DynamicArray::from_values(ElementKind::Float, [1, 2, 3]).unwrap();
    /// assert_eq!(arr.get(0).unwrap().kind(), ElementKind::Float);
    ///
    /// assert!(DynamicArray::from_values(ElementKind::Integer, [1.5]).is_err());
    /// ```
    pub fn from_values<I, V>(kind: ElementKind, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let mut arr = Self::with_capacity(kind, values.len());
        dispatch!(&mut arr.buffer, slots => {
            for value in &values {
                let x = accept(value)?;
                slots.insert(slots.len, x);
            }
        });
        Ok(arr)
    }

    /// Create an array from a typecode (`'i'` or `'d'`) and initial values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let arr = DynamicArray::from_typecode('i', [5, 1, 1]).unwrap();
    /// assert_eq!(arr.kind(), ElementKind::Integer);
    /// assert!(DynamicArray::from_typecode('z', [1]).is_err());
    /// ```
    pub fn from_typecode<I, V>(code: char, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_values(ElementKind::from_typecode(code)?, values)
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Element kind fixed at construction.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self.buffer {
            Buffer::Integer(_) => ElementKind::Integer,
            Buffer::Float(_) => ElementKind::Float,
        }
    }

    /// Typecode character of the element kind.
    #[inline]
    pub fn typecode(&self) -> char {
        self.kind().typecode()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(&self.buffer, slots => slots.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        dispatch!(&self.buffer, slots => slots.capacity())
    }

    /// Growth policy used when the buffer fills up.
    #[inline]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Reallocation counters since construction.
    #[inline]
    pub fn growth_stats(&self) -> GrowthStats {
        self.stats
    }

    /// Live elements as `i32`s, if this is an integer array.
    pub fn as_integers(&self) -> Option<&[i32]> {
        match &self.buffer {
            Buffer::Integer(slots) => Some(slots.live()),
            Buffer::Float(_) => None,
        }
    }

    /// Live elements as `f64`s, if this is a float array.
    pub fn as_floats(&self) -> Option<&[f64]> {
        match &self.buffer {
            Buffer::Float(slots) => Some(slots.live()),
            Buffer::Integer(_) => None,
        }
    }

    /// Element at `index`; negative indices count from the end.
    ///
    /// Fails with `OutOfRange` outside `[-len, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let arr = DynamicArray::from_values(ElementKind::Integer, [5, 1, 7]).unwrap();
    /// assert_eq!(arr.get(-1).unwrap(), 7_i32);
    /// assert!(arr.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<Element> {
        let pos = self.resolve(index)?;
        Ok(dispatch!(&self.buffer, slots => slots.data[pos].element()))
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_> {
        match &self.buffer {
            Buffer::Integer(slots) => Iter::Integer(slots.live().iter()),
            Buffer::Float(slots) => Iter::Float(slots.live().iter()),
        }
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<Element> {
        self.iter().collect()
    }

    /// Compare against any ordered sequence of values by numeric equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let arr = DynamicArray::from_values(ElementKind::Float, [2.0, 5.0]).unwrap();
    /// assert!(arr.eq_sequence((2..=5).step_by(3)));
    /// ```
    pub fn eq_sequence<I, V>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        itertools::equal(self.iter(), other.into_iter().map(Into::<Value>::into))
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * self.kind().item_size()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Overwrite the element at `index`.
    ///
    /// Fails with `InvalidElement` if `value` does not fit the element kind,
    /// or `OutOfRange` as [`get`](Self::get). Nothing is written on failure.
    pub fn set(&mut self, index: isize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let len = self.len();
        dispatch!(&mut self.buffer, slots => {
            let x = accept(&value)?;
            let pos = resolve_strict(index, len)
                .ok_or(ArrayError::OutOfRange { index, length: len })?;
            slots.data[pos] = x;
        });
        Ok(())
    }

    /// Add `value` at the end, growing the buffer if it is full.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        dispatch!(&mut self.buffer, slots => {
            let x = accept(&value)?;
            slots.reserve(1, &self.policy, &mut self.stats)?;
            slots.insert(slots.len, x);
        });
        Ok(())
    }

    /// Insert `value` before position `index`.
    ///
    /// Negative indices count from the end. Out-of-range indices never fail:
    /// they clamp to the front or to an append.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, ElementKind};
    ///
    /// let mut arr = DynamicArray::from_values(ElementKind::Integer, [4, 4, 1]).unwrap();
    /// arr.insert(-1, 8).unwrap();
    /// assert_eq!(arr, [4, 4, 8, 1]);
    /// arr.insert(100, 9).unwrap();
    /// assert_eq!(arr, [4, 4, 8, 1, 9]);
    /// ```
    pub fn insert(&mut self, index: isize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        dispatch!(&mut self.buffer, slots => {
            let x = accept(&value)?;
            let pos = resolve_clamped(index, slots.len);
            slots.reserve(1, &self.policy, &mut self.stats)?;
            slots.insert(pos, x);
        });
        Ok(())
    }

    /// Remove the first element numerically equal to `value`.
    ///
    /// Fails with `ValueNotFound` when no element matches.
    pub fn remove(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        dispatch!(&mut self.buffer, slots => {
            let pos = slots
                .live()
                .iter()
                .position(|x| x.element() == value)
                .ok_or_else(|| ArrayError::ValueNotFound {
                    value: value.to_string(),
                })?;
            slots.remove(pos);
        });
        Ok(())
    }

    /// Remove and return the element at `index`.
    ///
    /// Index rules and failures are those of [`get`](Self::get).
    pub fn pop(&mut self, index: isize) -> Result<Element> {
        let pos = self.resolve(index)?;
        Ok(dispatch!(&mut self.buffer, slots => slots.remove(pos).element()))
    }

    /// Reverse the elements in place.
    pub fn reversed(&mut self) {
        dispatch!(&mut self.buffer, slots => {
            let len = slots.len;
            slots.data[..len].reverse();
        });
    }

    /// Append every value in `values`.
    ///
    /// The whole batch is validated first; on `InvalidElement` nothing is
    /// appended.
    pub fn extend_values<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        dispatch!(&mut self.buffer, slots => {
            let xs = values.iter().map(accept).collect::<Result<Vec<_>>>()?;
            slots.reserve(xs.len(), &self.policy, &mut self.stats)?;
            for x in xs {
                slots.insert(slots.len, x);
            }
        });
        Ok(())
    }

    /// Ensure room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        dispatch!(&mut self.buffer, slots => {
            slots.reserve(additional, &self.policy, &mut self.stats)
        })
    }

    /// Release unused capacity.
    pub fn shrink_to_fit(&mut self) {
        dispatch!(&mut self.buffer, slots => slots.shrink_to_fit(&mut self.stats));
    }

    /// Drop all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        dispatch!(&mut self.buffer, slots => slots.len = 0);
    }

    #[inline]
    fn resolve(&self, index: isize) -> Result<usize> {
        let length = self.len();
        resolve_strict(index, length).ok_or(ArrayError::OutOfRange { index, length })
    }

    fn eq_items<T>(&self, other: &[T]) -> bool
    where
        Element: PartialEq<T>,
    {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over the elements of a [`DynamicArray`].
#[derive(Clone, Debug)]
pub enum Iter<'a> {
    Integer(std::slice::Iter<'a, i32>),
    Float(std::slice::Iter<'a, f64>),
}

impl Iterator for Iter<'_> {
    type Item = Element;

    #[inline]
    fn next(&mut self) -> Option<Element> {
        match self {
            Iter::Integer(it) => it.next().map(|&n| Element::Int(n)),
            Iter::Float(it) => it.next().map(|&x| Element::Float(x)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Integer(it) => it.size_hint(),
            Iter::Float(it) => it.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Element> {
        match self {
            Iter::Integer(it) => it.next_back().map(|&n| Element::Int(n)),
            Iter::Float(it) => it.next_back().map(|&x| Element::Float(x)),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IndexedRead for DynamicArray {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn read(&self, index: usize) -> Option<Element> {
        dispatch!(&self.buffer, slots => slots.live().get(index).map(|x| x.element()))
    }
}

// =============================================================================
// Comparison Operators
// =============================================================================

impl PartialEq for DynamicArray {
    /// Value-based equality; an integer array can equal a float array.
    fn eq(&self, other: &Self) -> bool {
        itertools::equal(self.iter(), other.iter())
    }
}

macro_rules! impl_eq_sequence {
    ($($t:ty),*) => {
        $(
            impl PartialEq<[$t]> for DynamicArray {
                fn eq(&self, other: &[$t]) -> bool {
                    self.eq_items(other)
                }
            }

            impl PartialEq<&[$t]> for DynamicArray {
                fn eq(&self, other: &&[$t]) -> bool {
                    self.eq_items(other)
                }
            }

            impl PartialEq<Vec<$t>> for DynamicArray {
                fn eq(&self, other: &Vec<$t>) -> bool {
                    self.eq_items(other)
                }
            }

            impl<const N: usize> PartialEq<[$t; N]> for DynamicArray {
                fn eq(&self, other: &[$t; N]) -> bool {
                    self.eq_items(other)
                }
            }
        )*
    };
}

impl_eq_sequence!(i32, f64, Element, Value);

impl fmt::Display for DynamicArray {
    /// Renders as `array('i', [1, 2, 3])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array('{}', [{}])", self.typecode(), self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i32]) -> DynamicArray {
        DynamicArray::from_values(ElementKind::Integer, values.iter().copied()).unwrap()
    }

    fn floats(values: &[f64]) -> DynamicArray {
        DynamicArray::from_values(ElementKind::Float, values.iter().copied()).unwrap()
    }

    #[test]
    fn test_resolve_strict() {
        assert_eq!(resolve_strict(0, 0), None);
        assert_eq!(resolve_strict(-1, 0), None);
        assert_eq!(resolve_strict(0, 2), Some(0));
        assert_eq!(resolve_strict(-2, 2), Some(0));
        assert_eq!(resolve_strict(-3, 2), None);
        assert_eq!(resolve_strict(isize::MIN, 2), None);
    }

    #[test]
    fn test_resolve_clamped() {
        assert_eq!(resolve_clamped(0, 0), 0);
        assert_eq!(resolve_clamped(-1, 0), 0);
        assert_eq!(resolve_clamped(5, 3), 3);
        assert_eq!(resolve_clamped(-3, 3), 0);
        assert_eq!(resolve_clamped(isize::MIN, 3), 0);
    }

    #[test]
    fn test_new_is_unallocated() {
        let arr = DynamicArray::new(ElementKind::Float);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.growth_stats(), GrowthStats::default());
    }

    #[test]
    fn test_construction_capacity_fits() {
        let arr = ints(&[1, 9999, 3, 4, 1]);
        assert_eq!(arr.len(), 5);
        assert!(arr.capacity() >= arr.len());
    }

    #[test]
    fn test_construction_rejects_bad_value() {
        let err = DynamicArray::from_values(
            ElementKind::Integer,
            vec![Value::Int(1), Value::from("x")],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArrayError::InvalidElement {
                kind: ElementKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn test_append_grows_from_empty() {
        let mut arr = DynamicArray::new(ElementKind::Integer);
        arr.append(1).unwrap();
        assert_eq!(arr.capacity(), 4);
        for i in 0..4 {
            arr.append(i).unwrap();
        }
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.growth_stats().reallocations, 2);
        assert_eq!(arr.growth_stats().elements_copied, 4);
    }

    #[test]
    fn test_set_validates_before_writing() {
        let mut arr = ints(&[5, 1, 1]);
        assert!(matches!(
            arr.set(0, 2.5),
            Err(ArrayError::InvalidElement { .. })
        ));
        assert!(matches!(
            arr.set(3, 2),
            Err(ArrayError::OutOfRange { index: 3, length: 3 })
        ));
        assert_eq!(arr, [5, 1, 1]);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut arr = ints(&[1, 3]);
        arr.insert(1, 2).unwrap();
        assert_eq!(arr.as_integers(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut arr = floats(&[2.0, 5.0, 2.0]);
        arr.remove(2).unwrap();
        assert_eq!(arr, [5.0, 2.0]);
    }

    #[test]
    fn test_remove_missing() {
        let mut arr = ints(&[1, 2]);
        assert!(matches!(
            arr.remove(3),
            Err(ArrayError::ValueNotFound { .. })
        ));
        assert!(matches!(
            arr.remove("1"),
            Err(ArrayError::ValueNotFound { .. })
        ));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn test_pop_returns_element() {
        let mut arr = ints(&[2, 1, 4]);
        assert_eq!(arr.pop(1).unwrap(), Element::Int(1));
        assert_eq!(arr, [2, 4]);
    }

    #[test]
    fn test_reversed_leaves_spare_slots_alone() {
        let mut arr = DynamicArray::with_capacity(ElementKind::Integer, 16);
        arr.extend_values([1, 2, 3]).unwrap();
        arr.reversed();
        assert_eq!(arr, [3, 2, 1]);
        assert_eq!(arr.capacity(), 16);
    }

    #[test]
    fn test_extend_all_or_nothing() {
        let mut arr = ints(&[1]);
        let batch = vec![Value::Int(2), Value::Float(3.5)];
        assert!(arr.extend_values(batch).is_err());
        assert_eq!(arr, [1]);
    }

    #[test]
    fn test_shrink_and_clear() {
        let mut arr = DynamicArray::with_capacity(ElementKind::Float, 32);
        arr.append(1.0).unwrap();
        arr.shrink_to_fit();
        assert_eq!(arr.capacity(), 1);
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 1);
    }

    #[test]
    fn test_reserve() {
        let mut arr = DynamicArray::new(ElementKind::Integer);
        arr.reserve(10).unwrap();
        assert!(arr.capacity() >= 10);
        assert!(matches!(
            arr.reserve(usize::MAX),
            Err(ArrayError::CapacityOverflow)
        ));
    }

    #[test]
    fn test_reserve_too_many_bytes() {
        // Slot count fits in usize, byte size does not
        let mut arr = floats(&[1.0, 2.0]);
        let cap = arr.capacity();
        assert!(matches!(
            arr.reserve(usize::MAX / 8),
            Err(ArrayError::CapacityOverflow)
        ));
        assert_eq!(arr, [1.0, 2.0]);
        assert_eq!(arr.capacity(), cap);
    }

    #[test]
    fn test_with_policy() {
        let policy = GrowthPolicy::new(1, 3).unwrap();
        let mut arr = DynamicArray::with_policy(ElementKind::Integer, policy).unwrap();
        for i in 0..4 {
            arr.append(i).unwrap();
        }
        assert_eq!(arr.capacity(), 9);
        assert_eq!(arr.policy(), &policy);
    }

    #[test]
    fn test_display() {
        assert_eq!(ints(&[1, 2, 3]).to_string(), "array('i', [1, 2, 3])");
        assert_eq!(floats(&[1.0, 2.5]).to_string(), "array('d', [1.0, 2.5])");
        assert_eq!(ints(&[]).to_string(), "array('i', [])");
    }

    #[test]
    fn test_memory_usage_tracks_capacity() {
        let small = DynamicArray::with_capacity(ElementKind::Float, 8);
        let large = DynamicArray::with_capacity(ElementKind::Float, 16);
        assert_eq!(large.memory_usage() - small.memory_usage(), 8 * 8);
    }

    #[test]
    fn test_iter_both_ends() {
        let arr = ints(&[1, 2, 3]);
        let back: Vec<Element> = arr.iter().rev().collect();
        assert_eq!(back, vec![Element::Int(3), Element::Int(2), Element::Int(1)]);
        assert_eq!(arr.iter().len(), 3);
    }
}
