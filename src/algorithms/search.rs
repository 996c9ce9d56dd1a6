//! The binary search family.
//!
//! Every function assumes its input is sorted ascending and does not check it (use
//! [`is_sorted`] to verify the precondition when it is in doubt); results on unsorted input
//! are unspecified. An empty slice is a valid input and yields a not-found result.

use std::cmp::Ordering;

/// Searches a sorted slice for `target`, returning the index of a match.
///
/// When the slice contains a run of equal values, which index of the run is returned is
/// unspecified; use [`find_first`] or [`find_last`] for a defined end of the run.
///
/// # Examples
/// ```
/// # use dsa_toolkit::algorithms::search::binary_search;
/// let items = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];
/// assert_eq!(binary_search(&items, &7), Some(3));
/// assert_eq!(binary_search(&items, &8), None);
/// assert_eq!(binary_search(&[] as &[i32], &8), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// [`binary_search`], expressed recursively. The iterative form runs in constant space while
/// this one costs a stack frame per halving; they always agree on the result.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    search_range(items, target, 0, items.len())
}

fn search_range<T: Ord>(items: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }

    let mid = low + (high - low) / 2;
    match items[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_range(items, target, mid + 1, high),
        Ordering::Greater => search_range(items, target, low, mid),
    }
}

/// Returns the leftmost index of the run of values equal to `target`, in `O(log n)`: on a
/// match the search records the candidate and keeps going in the left half.
///
/// # Examples
/// ```
/// # use dsa_toolkit::algorithms::search::{find_first, find_last};
/// let items = [1, 2, 2, 2, 3, 4, 4, 5, 5, 5, 5, 6];
/// assert_eq!(find_first(&items, &5), Some(7));
/// assert_eq!(find_last(&items, &5), Some(10));
/// ```
pub fn find_first<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    let mut result = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                result = Some(mid);
                high = mid;
            },
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    result
}

/// Returns the rightmost index of the run of values equal to `target`, the mirror image of
/// [`find_first`].
pub fn find_last<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    let mut result = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                result = Some(mid);
                low = mid + 1;
            },
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    result
}

/// Returns the leftmost index at which `target` could be inserted while keeping the slice
/// sorted (lower-bound semantics). The result can equal `len` when every element is smaller.
///
/// # Examples
/// ```
/// # use dsa_toolkit::algorithms::search::find_insertion_point;
/// let items = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];
/// assert_eq!(find_insertion_point(&items, &8), 4);
/// assert_eq!(find_insertion_point(&items, &0), 0);
/// assert_eq!(find_insertion_point(&items, &100), 13);
/// ```
pub fn find_insertion_point<T: Ord>(items: &[T], target: &T) -> usize {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Searches an ascending slice that has been rotated at an unknown pivot, in `O(log n)`.
///
/// At every step one of the two halves is internally sorted; comparing the left boundary to
/// the midpoint reveals which, and a plain range check then decides where the target could
/// live.
///
/// # Examples
/// ```
/// # use dsa_toolkit::algorithms::search::search_rotated;
/// let items = [7, 8, 9, 1, 2, 3, 4, 5, 6];
/// assert_eq!(search_rotated(&items, &5), Some(7));
/// assert_eq!(search_rotated(&items, &7), Some(0));
/// assert_eq!(search_rotated(&items, &100), None);
/// ```
pub fn search_rotated<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] == *target {
            return Some(mid);
        }

        if items[low] <= items[mid] {
            // The left half is the sorted one.
            if items[low] <= *target && *target < items[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        } else {
            // The right half is the sorted one.
            if items[mid] < *target && *target <= items[high - 1] {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
    }

    None
}

/// Scans for `target` front to back in `O(n)`. Exists as the baseline the logarithmic
/// searches are measured against, and as the fallback when the input isn't sorted.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Verifies the precondition of the functions above: true when the slice is sorted ascending.
/// Runs of equal values are allowed.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
