//! Tests for derived vectors and in-place transformations

use crate::functional::{is_even, is_odd, is_positive, negate, square};
use crate::{ErrorKind, IntVector, VectorError, VectorOptions};
use pretty_assertions::assert_eq;

fn vector(values: &[i32]) -> IntVector {
    IntVector::from_slice(values).unwrap()
}

fn sample() -> IntVector {
    vector(&[3, -1, 4, 1, -5, 9, 2, 6])
}

// ============================================================================
// map / replace_all
// ============================================================================

#[test]
fn test_map() {
    let v = vector(&[1, 2, 3]);
    let squares = v.map(square).unwrap();
    assert_eq!(squares, [1, 4, 9]);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_map_round_trip_with_inverse() {
    let v = sample();
    assert_eq!(v.map(negate).unwrap().map(negate).unwrap(), v);
    assert_eq!(v.map(|x| x + 7).unwrap().map(|x| x - 7).unwrap(), v);
}

#[test]
fn test_map_with_closure_state() {
    let v = vector(&[10, 10, 10]);
    let mut i = 0;
    let indexed = v
        .map(|x| {
            i += 1;
            x + i
        })
        .unwrap();
    assert_eq!(indexed, [11, 12, 13]);
}

#[test]
fn test_map_result_is_independent() {
    let v = vector(&[1, 2]);
    let mut mapped = v.map(|x| x).unwrap();
    mapped.set(0, 99).unwrap();
    assert_eq!(v, [1, 2]);
}

#[test]
fn test_replace_all_in_place() {
    let mut v = vector(&[1, -2, 3]);
    v.replace_all(negate);
    assert_eq!(v, [-1, 2, -3]);
}

// ============================================================================
// filter
// ============================================================================

#[test]
fn test_filter_keeps_order() {
    let v = sample();
    assert_eq!(v.filter(is_positive).unwrap(), [3, 4, 1, 9, 2, 6]);
    assert_eq!(v.filter(is_even).unwrap(), [4, 2, 6]);
}

#[test]
fn test_filter_count_law() {
    let v = vector(&[2, 3, 2, 5, 8, 2, 3]);
    let evens = v.filter(is_even).unwrap();
    for x in [2, 8] {
        assert_eq!(evens.count(x), v.count(x));
    }
    assert!(evens.none(is_odd));
    assert!(evens.len() <= v.len());
}

#[test]
fn test_filter_empty_results() {
    assert!(vector(&[1, 3]).filter(is_even).unwrap().is_empty());
    assert!(IntVector::new().filter(|_| true).unwrap().is_empty());
}

// ============================================================================
// subvec / limit / skip
// ============================================================================

#[test]
fn test_subvec() {
    let v = vector(&[0, 1, 2, 3, 4]);
    assert_eq!(v.subvec(1, 4).unwrap(), [1, 2, 3]);
    assert!(v.subvec(2, 2).unwrap().is_empty());
    assert_eq!(v.subvec(0, 5).unwrap(), v);
}

#[test]
fn test_subvec_identity_on_many_sizes() {
    for n in [0, 1, 10, 33] {
        let v = IntVector::from_slice(&(0..n).collect::<Vec<i32>>()).unwrap();
        assert_eq!(v.subvec(0, v.len()).unwrap(), v);
    }
}

#[test]
fn test_subvec_invalid_ranges() {
    let v = vector(&[0, 1, 2]);
    assert_eq!(
        v.subvec(0, 4).unwrap_err(),
        VectorError::Range {
            start: 0,
            end: 4,
            len: 3
        }
    );
    assert_eq!(v.subvec(2, 1).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(v.subvec(4, 4).unwrap_err().kind(), ErrorKind::Index);
}

#[test]
fn test_subvec_capacity_is_exact() {
    let v = vector(&[0, 1, 2, 3]);
    assert_eq!(v.subvec(1, 3).unwrap().capacity(), 2);
    assert_eq!(v.subvec(1, 1).unwrap().capacity(), 0);
}

#[test]
fn test_filter_capacity_is_exact() {
    let v = IntVector::from_slice(&(0..10).collect::<Vec<i32>>()).unwrap();

    let evens = v.filter(is_even).unwrap();
    assert_eq!(evens, [0, 2, 4, 6, 8]);
    assert_eq!(evens.capacity(), evens.len());

    let none = v.filter(|_| false).unwrap();
    assert!(none.is_empty());
    assert_eq!(none.capacity(), 0);

    let all = v.filter(|_| true).unwrap();
    assert_eq!(all.capacity(), 10);
}

#[test]
fn test_limit() {
    let v = vector(&[1, 2, 3, 4]);
    assert_eq!(v.limit(2).unwrap(), [1, 2]);
    assert!(v.limit(0).unwrap().is_empty());
}

#[test]
fn test_limit_beyond_length_clamps() {
    // Spare capacity must not leak into the result.
    let mut v = IntVector::create().unwrap();
    v.add(1).unwrap();
    v.add(2).unwrap();
    let limited = v.limit(8).unwrap();
    assert_eq!(limited, [1, 2]);
    assert_eq!(limited.capacity(), 2);
}

#[test]
fn test_skip() {
    let v = vector(&[1, 2, 3, 4]);
    assert_eq!(v.skip(1).unwrap(), [2, 3, 4]);
    assert_eq!(v.skip(0).unwrap(), v);
    assert!(v.skip(4).unwrap().is_empty());
    assert!(v.skip(10).unwrap().is_empty());
}

// ============================================================================
// concat / reverse / to_array
// ============================================================================

#[test]
fn test_concat() {
    let a = vector(&[1, 2]);
    let b = vector(&[3]);
    let joined = a.concat(&b).unwrap();
    assert_eq!(joined, [1, 2, 3]);
    assert_eq!(joined.len(), a.len() + b.len());
    assert_eq!(joined.capacity(), 3);
}

#[test]
fn test_concat_with_empty_is_identity() {
    let a = sample();
    let empty = IntVector::new();
    assert_eq!(a.concat(&empty).unwrap(), a);
    assert_eq!(empty.concat(&a).unwrap(), a);
    assert!(empty.concat(&empty).unwrap().is_empty());
}

#[test]
fn test_concat_with_itself() {
    let a = vector(&[1, 2]);
    assert_eq!(a.concat(&a).unwrap(), [1, 2, 1, 2]);
}

#[test]
fn test_reverse() {
    let mut v = vector(&[1, 2, 3, 4]);
    v.reverse();
    assert_eq!(v, [4, 3, 2, 1]);

    let mut odd = vector(&[1, 2, 3]);
    odd.reverse();
    assert_eq!(odd, [3, 2, 1]);

    let mut empty = IntVector::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_reverse_is_an_involution() {
    let original = sample();
    let mut v = original.clone();
    v.reverse();
    v.reverse();
    assert_eq!(v, original);
}

#[test]
fn test_to_array_is_detached() {
    let mut v = vector(&[1, 2, 3]);
    let snapshot = v.to_array();
    v.set(0, 100).unwrap();
    assert_eq!(snapshot, [1, 2, 3]);
    assert!(IntVector::new().to_array().is_empty());
}

#[test]
fn test_derived_vectors_inherit_options() {
    let options = VectorOptions {
        default_capacity: 1,
        grow_factor: 5,
    };
    let mut v = IntVector::with_options(options).unwrap();
    v.add(1).unwrap();
    v.add(2).unwrap();

    let mut doubled = v.map(|x| x * 2).unwrap();
    assert_eq!(doubled.options(), &options);
    doubled.add(6).unwrap();
    assert_eq!(doubled.capacity(), 10);
}
