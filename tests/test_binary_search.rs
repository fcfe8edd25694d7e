//! Tests for binary search over DynamicArray and plain slices.

use dynamic_array::{binary_search, DynamicArray, ElementKind, IndexedRead};
use proptest::prelude::*;

#[test]
fn test_binary_search_table() {
    let cases: &[(char, &[i32], i32, Option<usize>)] = &[
        ('d', &[1, 2, 3, 4], 3, Some(2)),
        ('d', &[1, 2, 3, 4], 5, None),
        ('d', &[1, 2, 3, 4], 0, None),
        ('i', &[1, 2, 3, 4], 4, Some(3)),
        ('i', &[1, 2, 3, 4], 5, None),
        ('i', &[1, 1, 1, 1], 1, Some(0)),
        ('i', &[], 42, None),
        ('i', &[1], 1, Some(0)),
        ('i', &[1, 2, 2, 4], 2, Some(1)),
        ('i', &[-3, 0, 2, 5, 5], 0, Some(1)),
        ('i', &[-3, 0, 2, 5, 5], 5, Some(3)),
        ('i', &[-3, 0, 2, 5, 5], 10, None),
    ];

    for &(code, data, item, expected) in cases {
        let arr = DynamicArray::from_typecode(code, data.iter().copied()).unwrap();
        assert_eq!(
            binary_search(&arr, item),
            expected,
            "typecode {code} data {data:?} item {item}"
        );
    }
}

#[test]
fn test_search_float_keys() {
    let arr = DynamicArray::from_values(ElementKind::Float, [0.5, 1.5, 2.5]).unwrap();
    assert_eq!(binary_search(&arr, 1.5), Some(1));
    assert_eq!(binary_search(&arr, 1), None);
    assert_eq!(binary_search(&arr, "1.5"), None);

    let arr = DynamicArray::from_values(ElementKind::Integer, [1, 2, 3]).unwrap();
    assert_eq!(binary_search(&arr, 2.0), Some(1));
    assert_eq!(binary_search(&arr, 2.5), None);
}

#[test]
fn test_search_after_mutation() {
    let mut arr = DynamicArray::new(ElementKind::Integer);
    for i in (0..100).rev() {
        arr.insert(0, i * 2).unwrap();
    }
    assert_eq!(arr.length(), 100);
    assert_eq!(binary_search(&arr, 0), Some(0));
    assert_eq!(binary_search(&arr, 198), Some(99));
    assert_eq!(binary_search(&arr, 99), None);

    arr.pop(-1).unwrap();
    assert_eq!(binary_search(&arr, 198), None);
}

#[test]
fn test_search_large_i32_keys() {
    let arr = DynamicArray::from_values(ElementKind::Integer, [i32::MIN, 0, i32::MAX]).unwrap();
    assert_eq!(binary_search(&arr, i32::MIN), Some(0));
    assert_eq!(binary_search(&arr, i32::MAX), Some(2));
    assert_eq!(binary_search(&arr, i64::from(i32::MAX) + 1), None);
}

proptest! {
    #[test]
    fn prop_search_finds_iff_present(
        mut data in prop::collection::vec(-50i32..50, 0..200),
        key in -60i32..60,
    ) {
        data.sort_unstable();
        let arr = DynamicArray::from_values(ElementKind::Integer, data.iter().copied()).unwrap();

        match binary_search(&arr, key) {
            Some(j) => {
                prop_assert_eq!(data[j], key);
                // Leftmost match
                prop_assert!(j == 0 || data[j - 1] < key);
            }
            None => prop_assert!(!data.contains(&key)),
        }
    }

    #[test]
    fn prop_search_agrees_across_sources(
        mut data in prop::collection::vec(-1000i32..1000, 0..100),
        key in -1000i32..1000,
    ) {
        data.sort_unstable();
        let floats: Vec<f64> = data.iter().map(|&n| f64::from(n)).collect();
        let arr = DynamicArray::from_values(ElementKind::Float, floats.iter().copied()).unwrap();

        let expected = binary_search(&data, key);
        prop_assert_eq!(binary_search(&floats, key), expected);
        prop_assert_eq!(binary_search(&arr, key), expected);
    }
}
