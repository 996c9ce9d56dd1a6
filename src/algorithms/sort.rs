//! Merge sort, in its recursive top-down and iterative bottom-up forms.

use std::cmp;

use crate::collections::contiguous::DynArray;

/// Sorts the slice with a stable, `O(n log n)` merge sort: halve, sort each half, then merge
/// by repeatedly taking the lesser of the two heads.
///
/// Ties go to the left half, which is exactly what makes the sort stable: equal elements keep
/// their input order. Merging buffers the left run, costing `O(n)` auxiliary space.
///
/// # Examples
/// ```
/// # use dsa_toolkit::algorithms::sort::merge_sort;
/// let mut items = [5, 2, 9, 1, 5, 6];
/// merge_sort(&mut items);
/// assert_eq!(items, [1, 2, 5, 5, 6, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// The iterative form of [`merge_sort`]: instead of recursing down, it merges runs of
/// doubling width from the bottom up. Output and stability guarantees are identical.
pub fn merge_sort_bottom_up<T: Ord + Clone>(items: &mut [T]) {
    let len = items.len();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start + width < len {
            let end = cmp::min(start + 2 * width, len);
            merge(&mut items[start..end], width);
            start += 2 * width;
        }
        width *= 2;
    }
}

/// Merges the two sorted runs `items[..mid]` and `items[mid..]` in place. The left run is
/// buffered first; right-run elements still ahead of the write position never get
/// overwritten, because the write position can't pass the right read position.
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) {
    let left: DynArray<T> = items[..mid].iter().cloned().collect();
    let mut take_left = 0;
    let mut take_right = mid;
    let mut write = 0;

    while take_left < left.len() && take_right < items.len() {
        // Taking from the left on a tie preserves input order between equal elements.
        if left[take_left] <= items[take_right] {
            items[write] = left[take_left].clone();
            take_left += 1;
        } else {
            let value = items[take_right].clone();
            items[write] = value;
            take_right += 1;
        }
        write += 1;
    }

    while take_left < left.len() {
        items[write] = left[take_left].clone();
        take_left += 1;
        write += 1;
    }
    // Whatever remains of the right run is already in its final place.
}
