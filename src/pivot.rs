//! Pivot selection by median of three, or Tukey's ninther for longer ranges.

/// Ranges longer than this use the ninther instead of a single median of three.
const NINTHER_THRESHOLD: usize = 40;

/// Moves the median of `v[a]`, `v[b]`, `v[c]` into `v[a]`.
///
/// Bubble sort on 3 elements, afterwards `v[b] <= v[a] <= v[c]`.
#[inline]
pub(crate) fn median_of_three<T, F>(v: &mut [T], a: usize, b: usize, c: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (m0, m1, m2) = (b, a, c);

    if is_less(&v[m1], &v[m0]) {
        v.swap(m1, m0);
    }
    if is_less(&v[m2], &v[m1]) {
        v.swap(m2, m1);
    }
    if is_less(&v[m1], &v[m0]) {
        v.swap(m1, m0);
    }
}

/// Selects a pivot for `v[lo..hi]` and places it at `v[lo]`.
///
/// Expects `hi - lo >= 3`. Longer ranges get a ninther, the median of three medians of three
/// sampled around the start, middle and end of the range.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<T, F>(v: &mut [T], lo: usize, hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = hi - lo;
    let m = lo + len / 2;

    if len > NINTHER_THRESHOLD {
        let s = len / 8;
        median_of_three(v, lo, lo + s, lo + 2 * s, is_less);
        median_of_three(v, m, m - s, m + s, is_less);
        median_of_three(v, hi - 1, hi - 1 - s, hi - 1 - 2 * s, is_less);
    }

    median_of_three(v, lo, m, hi - 1, is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn median_lands_at_first_index() {
        for perm in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            let mut v = perm;
            median_of_three(&mut v, 0, 1, 2, &mut lt);
            assert_eq!(v, [2, 1, 3], "input {perm:?}");
        }
    }

    #[test]
    fn small_range_pivot() {
        let mut v = [9, 0, 0, 5, 0, 0, 1];
        let len = v.len();
        choose_pivot(&mut v, 0, len, &mut lt);
        assert_eq!(v[0], 5);
    }

    #[test]
    fn ninther_on_descending() {
        let mut v = (0..50).rev().collect::<Vec<i32>>();
        let original = v.clone();
        choose_pivot(&mut v, 0, 50, &mut lt);

        // Samples sit near the quartiles, so the pivot can't be an extreme.
        assert!(v[0] > 5 && v[0] < 44, "pivot {}", v[0]);

        let mut sorted = v.clone();
        sorted.sort_unstable();
        let mut original_sorted = original;
        original_sorted.sort_unstable();
        assert_eq!(sorted, original_sorted);
    }
}
