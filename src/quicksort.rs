//! Quicksort, following Bentley and McIlroy,
//! Engineering a Sort Function, SP&E November 1993.

use crate::heapsort::heapsort;
use crate::pivot::choose_pivot;
use crate::smallsort::{insertion_sort, swap_range, SMALL_SORT_THRESHOLD};

/// Returns the number of imbalanced partitions allowed before switching to heapsort,
/// `2 * ceil(log2(len + 1))`.
#[inline]
pub(crate) fn depth_limit(len: usize) -> u32 {
    // Bit length of `len` is `ceil(log2(len + 1))`.
    2 * (usize::BITS - len.leading_zeros())
}

/// Partitions `v[lo..hi]` three ways around a pivot and returns the bounds `(mid_lo, mid_hi)` of
/// the elements equal to it.
///
/// On return `v[lo..mid_lo]` are less than the pivot and `v[mid_hi..hi]` are greater. If
/// `is_less` does not implement a strict weak order the bounds and order are unspecified, but
/// `lo <= mid_lo` and `mid_hi <= hi` still hold and all original elements remain in `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn do_pivot<T, F>(v: &mut [T], lo: usize, hi: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    choose_pivot(v, lo, hi, is_less);

    // Invariants are:
    //  v[lo] = pivot
    //  v[lo <= i < a] = pivot
    //  v[a <= i < b] < pivot
    //  v[b <= i < c] is unexamined
    //  v[c <= i < d] > pivot
    //  v[d <= i < hi] = pivot
    //
    // Once b meets c, the "= pivot" sections are swapped into the middle of the range.
    let pivot = lo;
    let (mut a, mut b, mut c, mut d) = (lo + 1, lo + 1, hi, hi);

    loop {
        while b < c {
            if is_less(&v[b], &v[pivot]) {
                // v[b] < pivot
                b += 1;
            } else if !is_less(&v[pivot], &v[b]) {
                // v[b] = pivot
                v.swap(a, b);
                a += 1;
                b += 1;
            } else {
                break;
            }
        }

        while b < c {
            if is_less(&v[pivot], &v[c - 1]) {
                // v[c - 1] > pivot
                c -= 1;
            } else if !is_less(&v[c - 1], &v[pivot]) {
                // v[c - 1] = pivot
                v.swap(c - 1, d - 1);
                c -= 1;
                d -= 1;
            } else {
                break;
            }
        }

        if b >= c {
            break;
        }

        // v[b] > pivot; v[c - 1] < pivot
        v.swap(b, c - 1);
        b += 1;
        c -= 1;
    }

    let n = (b - a).min(a - lo);
    swap_range(v, lo, b - n, n);

    let n = (hi - d).min(d - c);
    swap_range(v, c, hi - n, n);

    (lo + b - a, hi - (d - c))
}

/// Sorts `v[a..b]`.
///
/// `max_depth` is the number of partitions left before the range is handed to `heapsort`. The
/// smaller side of each partition is sorted recursively and the loop continues on the larger one,
/// so the stack depth stays within log2 of the range length.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn quicksort<T, F>(
    v: &mut [T],
    mut a: usize,
    mut b: usize,
    mut max_depth: u32,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while b - a > SMALL_SORT_THRESHOLD {
        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if max_depth == 0 {
            heapsort(v, a, b, is_less);
            return;
        }

        max_depth -= 1;

        let (mid_lo, mid_hi) = do_pivot(v, a, b, is_less);

        if mid_lo - a < b - mid_hi {
            quicksort(v, a, mid_lo, max_depth, is_less);
            a = mid_hi;
        } else {
            quicksort(v, mid_hi, b, max_depth, is_less);
            b = mid_lo;
        }
    }

    if b - a > 1 {
        insertion_sort(v, a, b, is_less);
    }
}
