//! Element kinds and the values that flow in and out of a [`DynamicArray`].
//!
//! # Design
//!
//! - [`ElementKind`] is the closed tag fixed per array (`'i'` or `'d'`)
//! - [`Element`] is what an array stores and hands back
//! - [`Value`] is what a caller offers; it may hold something non-numeric,
//!   which every write boundary rejects with `InvalidElement`
//!
//! Comparisons between elements (and between elements and values) are numeric:
//! `Element::Int(2) == Element::Float(2.0)`.
//!
//! [`DynamicArray`]: crate::DynamicArray

use crate::error::{ArrayError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Stored representation shared by every element of one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// 32-bit signed integer (typecode `'i'`)
    Integer,
    /// 64-bit IEEE float (typecode `'d'`)
    Float,
}

impl ElementKind {
    /// Map a typecode character to an element kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::ElementKind;
    ///
    /// assert_eq!(ElementKind::from_typecode('i').unwrap(), ElementKind::Integer);
    /// assert_eq!(ElementKind::from_typecode('d').unwrap(), ElementKind::Float);
    /// assert!(ElementKind::from_typecode('q').is_err());
    /// ```
    pub fn from_typecode(code: char) -> Result<Self> {
        match code {
            'i' => Ok(ElementKind::Integer),
            'd' => Ok(ElementKind::Float),
            other => Err(ArrayError::InvalidTypecode(other)),
        }
    }

    /// Typecode character for this kind.
    pub fn typecode(self) -> char {
        match self {
            ElementKind::Integer => 'i',
            ElementKind::Float => 'd',
        }
    }

    /// Size in bytes of one stored element.
    pub fn item_size(self) -> usize {
        match self {
            ElementKind::Integer => std::mem::size_of::<i32>(),
            ElementKind::Float => std::mem::size_of::<f64>(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Float => write!(f, "float"),
        }
    }
}

// =============================================================================
// Slot Types
// =============================================================================

/// Native storage type behind an element kind.
///
/// Integers widen into floats; floats are never truncated into integers,
/// and integers outside the `i32` range are rejected.
pub(crate) trait Slot: Copy + Default {
    const KIND: ElementKind;

    /// Convert a caller value, or `None` if it does not fit this slot.
    fn accept(value: &Value) -> Option<Self>;

    fn element(self) -> Element;
}

impl Slot for i32 {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn accept(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => i32::try_from(*n).ok(),
            Value::Float(_) | Value::Text(_) => None,
        }
    }

    #[inline]
    fn element(self) -> Element {
        Element::Int(self)
    }
}

impl Slot for f64 {
    const KIND: ElementKind = ElementKind::Float;

    #[inline]
    fn accept(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    #[inline]
    fn element(self) -> Element {
        Element::Float(self)
    }
}

// =============================================================================
// Element
// =============================================================================

/// A stored array element.
#[derive(Debug, Clone, Copy)]
pub enum Element {
    Int(i32),
    Float(f64),
}

impl Element {
    /// Kind this element materializes as.
    #[inline]
    pub fn kind(self) -> ElementKind {
        match self {
            Element::Int(_) => ElementKind::Integer,
            Element::Float(_) => ElementKind::Float,
        }
    }

    /// Numeric value widened to `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Element::Int(n) => n as f64,
            Element::Float(x) => x,
        }
    }

    /// Integer payload, if this is an `Int`.
    #[inline]
    pub fn as_i32(self) -> Option<i32> {
        match self {
            Element::Int(n) => Some(n),
            Element::Float(_) => None,
        }
    }

    /// Numeric ordering against a caller-supplied value.
    ///
    /// Returns `None` when `value` is not numeric or either side is NaN.
    pub fn compare_value(self, value: &Value) -> Option<Ordering> {
        match (self, value) {
            (Element::Int(a), Value::Int(b)) => Some(i64::from(a).cmp(b)),
            (Element::Int(a), Value::Float(b)) => f64::from(a).partial_cmp(b),
            (Element::Float(a), Value::Int(b)) => cmp_float_int(a, *b),
            (Element::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (_, Value::Text(_)) => None,
        }
    }
}

/// Exact ordering of a float against an `i64`.
///
/// `b as f64` rounds above 2^53, so the integral part is compared as an
/// integer and the fraction breaks ties.
fn cmp_float_int(a: f64, b: i64) -> Option<Ordering> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if a.is_nan() {
        return None;
    }
    if a >= LIMIT {
        return Some(Ordering::Greater);
    }
    if a < -LIMIT {
        return Some(Ordering::Less);
    }

    let whole = a.trunc();
    let by_whole = (whole as i64).cmp(&b);
    let by_fraction = if a > whole {
        Ordering::Greater
    } else if a < whole {
        Ordering::Less
    } else {
        Ordering::Equal
    };
    Some(by_whole.then(by_fraction))
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Element::Int(a), Element::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Element::Int(a), Element::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq<Value> for Element {
    fn eq(&self, other: &Value) -> bool {
        self.compare_value(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<Value> for Element {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        self.compare_value(other)
    }
}

impl PartialEq<i32> for Element {
    fn eq(&self, other: &i32) -> bool {
        *self == Element::Int(*other)
    }
}

impl PartialEq<f64> for Element {
    fn eq(&self, other: &f64) -> bool {
        *self == Element::Float(*other)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Int(n)
    }
}

impl From<f64> for Element {
    fn from(x: f64) -> Self {
        Element::Float(x)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on integral floats
            Element::Float(x) => write!(f, "{:?}", x),
        }
    }
}

// =============================================================================
// Value
// =============================================================================

/// A value offered to the array by a caller.
///
/// `Text` models input that is not a number at all; no element kind accepts
/// it, but it can still be compared (it equals nothing).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write!(f, "'{}'", s),
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Element> for Value {
    fn from(e: Element) -> Self {
        match e {
            Element::Int(n) => Value::Int(i64::from(n)),
            Element::Float(x) => Value::Float(x),
        }
    }
}
