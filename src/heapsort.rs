//! Heapsort, the worst-case fallback of the quicksort driver.

/// Restores the heap property for the subtree rooted at `lo` in the logical heap `[lo, hi)`.
///
/// `first` is the offset in `v` at which the heap starts. The heap respects `parent >= child`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sift_down<T, F>(v: &mut [T], lo: usize, hi: usize, first: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut root = lo;
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            break;
        }

        // Choose the greater child, ties go right.
        if child + 1 < hi && is_less(&v[first + child], &v[first + child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `root`.
        if !is_less(&v[first + root], &v[first + child]) {
            return;
        }

        v.swap(first + root, first + child);
        root = child;
    }
}

/// Sorts `v[a..b]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn heapsort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let first = a;
    let hi = b - a;

    if hi < 2 {
        return;
    }

    // Build heap with greatest element at top.
    for i in (0..=(hi - 1) / 2).rev() {
        sift_down(v, i, hi, first, is_less);
    }

    // Pop elements, largest first, into the end of the range.
    for i in (1..hi).rev() {
        v.swap(first, first + i);
        sift_down(v, 0, i, first, is_less);
    }
}
