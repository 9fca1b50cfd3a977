//! Element relocation primitives and the small-range base case.

/// Ranges of at most this many elements are finished by insertion sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 7;

/// Exchanges the `n` element ranges starting at `a` and `b`, one pair at a time.
///
/// The ranges may touch, the partitioner relies on that when it rotates the equal zones.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn swap_range<T>(v: &mut [T], a: usize, b: usize, n: usize) {
    for i in 0..n {
        v.swap(a + i, b + i);
    }
}

/// Sorts `v[a..b]` by shifting each element left until its left neighbour is no longer greater.
///
/// *O*(*n*²) worst-case, only meant for ranges up to [`SMALL_SORT_THRESHOLD`] elements.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (a + 1)..b {
        let mut j = i;
        while j > a && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
