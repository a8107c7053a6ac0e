//! Introsort-style quicksort with an explicit, bounded stack.
//!
//! Ported in shape (not in syntax) from the source's `quick_sort`:
//! median-of-three pivot selection, insertion-sort below a fixed cutoff,
//! and an explicit stack instead of recursion so that a pathological
//! input can't blow the call stack; it instead returns
//! [`Error::StackOverflow`], matching `HECMW_PART_E_STACK_OVERFLOW`.

use crate::error::{Error, Result};

/// Below this span, finish with insertion sort rather than recursing
/// further. Matches the source's `QSORT_LOWER`.
pub const INSERTION_CUTOFF: usize = 50;

/// Sorts `keys` ascending, permuting `payload` identically (a standard
/// parallel-array sort: `payload` usually carries entity ids).
///
/// `stack_capacity` bounds the explicit work-stack; pass at least
/// `keys.len()` (the source sizes its `istack` from the same `n` it
/// sorts) unless you have a tighter bound on recursion depth.
pub fn sort_with_payload(
    keys: &mut [f64],
    payload: &mut [usize],
    stack_capacity: usize,
) -> Result<()> {
    assert_eq!(keys.len(), payload.len());
    let n = keys.len();
    if n < 2 {
        return Ok(());
    }

    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut l = 0usize;
    let mut ir = n - 1;

    loop {
        if ir - l < INSERTION_CUTOFF {
            for j in (l + 1)..=ir {
                let a = keys[j];
                let b = payload[j];
                let mut i = j;
                while i > l && keys[i - 1] > a {
                    keys[i] = keys[i - 1];
                    payload[i] = payload[i - 1];
                    i -= 1;
                }
                keys[i] = a;
                payload[i] = b;
            }
            match stack.pop() {
                None => return Ok(()),
                Some((new_l, new_ir)) => {
                    l = new_l;
                    ir = new_ir;
                }
            }
        } else {
            let k = (l + ir) / 2;
            keys.swap(k, l + 1);
            payload.swap(k, l + 1);
            if keys[l] > keys[ir] {
                keys.swap(l, ir);
                payload.swap(l, ir);
            }
            if keys[l + 1] > keys[ir] {
                keys.swap(l + 1, ir);
                payload.swap(l + 1, ir);
            }
            if keys[l] > keys[l + 1] {
                keys.swap(l, l + 1);
                payload.swap(l, l + 1);
            }

            let mut i = l + 1;
            let mut j = ir;
            let a = keys[l + 1];
            let b = payload[l + 1];

            loop {
                loop {
                    i += 1;
                    if keys[i] >= a {
                        break;
                    }
                }
                loop {
                    j -= 1;
                    if keys[j] <= a {
                        break;
                    }
                }
                if j < i {
                    break;
                }
                keys.swap(i, j);
                payload.swap(i, j);
            }

            keys[l + 1] = keys[j];
            keys[j] = a;
            payload[l + 1] = payload[j];
            payload[j] = b;

            if stack.len() >= stack_capacity {
                return Err(Error::StackOverflow {
                    size: stack_capacity,
                });
            }

            if ir - i + 1 >= j - l {
                stack.push((i, ir));
                ir = j - 1;
            } else {
                stack.push((l, j - 1));
                l = i;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_input_via_insertion_path() {
        let mut keys = vec![3.0, 1.0, 2.0];
        let mut payload = vec![30usize, 10, 20];
        sort_with_payload(&mut keys, &mut payload, keys.len()).unwrap();
        assert_eq!(keys, vec![1.0, 2.0, 3.0]);
        assert_eq!(payload, vec![10, 20, 30]);
    }

    #[test]
    fn sorts_large_input_exercising_partition_path() {
        let n = 500;
        let mut keys: Vec<f64> = (0..n).rev().map(|x| x as f64).collect();
        let mut payload: Vec<usize> = (0..n).rev().collect();
        sort_with_payload(&mut keys, &mut payload, n).unwrap();
        let expected_keys: Vec<f64> = (0..n).map(|x| x as f64).collect();
        let expected_payload: Vec<usize> = (0..n).collect();
        assert_eq!(keys, expected_keys);
        assert_eq!(payload, expected_payload);
    }

    #[test]
    fn payload_tracks_key_permutation_with_duplicates() {
        let mut keys = vec![2.0, 1.0, 2.0, 1.0, 0.0];
        let mut payload: Vec<usize> = (0..5).collect();
        sort_with_payload(&mut keys, &mut payload, keys.len()).unwrap();
        assert_eq!(keys, vec![0.0, 1.0, 1.0, 2.0, 2.0]);
        // original index 4 (key 0.0) must be first regardless of duplicate ordering.
        assert_eq!(payload[0], 4);
    }

    #[test]
    fn reports_stack_overflow_when_capacity_too_small() {
        let n = 500;
        let mut keys: Vec<f64> = (0..n).rev().map(|x| x as f64).collect();
        let mut payload: Vec<usize> = (0..n).rev().collect();
        let result = sort_with_payload(&mut keys, &mut payload, 1);
        assert!(matches!(result, Err(Error::StackOverflow { size: 1 })));
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sorts_ascending_for_arbitrary_inputs(mut keys in prop::collection::vec(-1e6f64..1e6, 0..300)) {
            let mut payload: Vec<usize> = (0..keys.len()).collect();
            let capacity = keys.len();
            sort_with_payload(&mut keys, &mut payload, capacity).unwrap();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn payload_is_a_permutation_of_the_original_indices(mut keys in prop::collection::vec(-1e6f64..1e6, 0..300)) {
            let mut payload: Vec<usize> = (0..keys.len()).collect();
            let capacity = keys.len();
            sort_with_payload(&mut keys, &mut payload, capacity).unwrap();
            let mut sorted_payload = payload.clone();
            sorted_payload.sort_unstable();
            prop_assert_eq!(sorted_payload, (0..payload.len()).collect::<Vec<_>>());
        }
    }
}
