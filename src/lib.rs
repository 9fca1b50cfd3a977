//! Generic ordering engine, an introsort over a caller supplied `less` predicate.
//!
//! Every operation takes a strict ordering `is_less(a, b)` instead of requiring `T: Ord`, so ad hoc
//! and projected orderings work the same way as the natural one. The sort is Bentley-McIlroy
//! three-way quicksort with ninther pivot selection, bounded by a depth budget after which heapsort
//! finishes the range, and insertion sort for short ranges.

mod ext;
mod heapsort;
mod pivot;
mod quicksort;
mod smallsort;

pub use ext::OrderedSliceExt;

/// Sorts the slice in place with a function defining `less`, but might not preserve the order
/// of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// `is_less` must define a strict weak ordering for the elements in the slice. If it does not,
/// the resulting order is unspecified, but the slice keeps exactly its original elements. The
/// same is true if `is_less` panics.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// bmsort::sort_in_place_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort_in_place_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Switch to heapsort if depth of 2*ceil(lg(n+1)) is reached.
    let max_depth = quicksort::depth_limit(len);

    quicksort::quicksort(v, 0, len, max_depth, &mut is_less);
}

/// Returns a new sorted copy of `v`, determined by a function defining `less`. `v` itself is
/// never modified.
///
/// See [`sort_in_place_by`] for the guarantees and requirements of the ordering.
///
/// # Examples
///
/// ```
/// let v = [5, 3, 3, 1, 4, 1, 5];
/// let sorted = bmsort::sort_by(&v, |a, b| a < b);
///
/// assert_eq!(sorted, [1, 1, 3, 3, 4, 5, 5]);
/// assert_eq!(v, [5, 3, 3, 1, 4, 1, 5]);
/// ```
#[must_use]
pub fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = v.to_vec();
    sort_in_place_by(&mut result, is_less);
    result
}

/// Returns a new copy of `v` sorted in its natural order.
#[must_use]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_by(v, |a, b| a.lt(b))
}

/// Returns a new copy of `v` ordered by the key that `f` extracts from each element.
///
/// The key is computed again for every comparison.
///
/// # Examples
///
/// ```
/// let v = ["ccc", "a", "bb"];
/// assert_eq!(bmsort::sort_by_key(&v, |s| s.len()), ["a", "bb", "ccc"]);
/// ```
#[must_use]
pub fn sort_by_key<T, K, F>(v: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| f(a).lt(&f(b)))
}

/// Returns a new descending-ordered copy of `v`, determined by a function defining `less`.
///
/// This is implemented by negating `is_less`, effectively testing "greater than or equal to".
/// Only for a total order without equal elements is the result strictly descending. With ties
/// the result contains no ascending step, but [`is_sorted_by_desc`] will not accept it.
///
/// # Examples
///
/// ```
/// let v = [5, 3, 3, 1, 4, 1, 5];
/// assert_eq!(bmsort::sort_by_desc(&v, |a, b| a < b), [5, 5, 4, 3, 3, 1, 1]);
/// ```
#[must_use]
pub fn sort_by_desc<T, F>(v: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_by(v, |a, b| !is_less(a, b))
}

/// Reports whether `v` is sorted, using a function defining `less`.
///
/// Scans from the end and stops at the first pair where `is_less(v[i], v[i - 1])`. Slices with
/// fewer than two elements are always sorted.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (1..v.len()).rev() {
        if is_less(&v[i], &v[i - 1]) {
            return false;
        }
    }

    true
}

/// Reports whether `v` is sorted in descending order, using a function defining `less`.
///
/// Negates `is_less` the same way [`sort_by_desc`] does. Equal neighbours satisfy the negated
/// predicate in both directions and count as out of order, so only strictly descending slices
/// are reported as sorted.
///
/// # Examples
///
/// ```
/// assert!(bmsort::is_sorted_by_desc(&[3, 2, 1], |a, b| a < b));
/// assert!(!bmsort::is_sorted_by_desc(&[3, 3, 1], |a, b| a < b));
/// ```
pub fn is_sorted_by_desc<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_sorted_by(v, |a, b| !is_less(a, b))
}

/// Returns the minimum element of `v` as defined by `is_less`, or `None` if `v` is empty.
///
/// If several elements are equally minimal, the first one is returned.
pub fn min_by<T, F>(v: &[T], mut is_less: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = v.split_first()?;

    let mut min = first;
    for x in rest {
        if is_less(x, min) {
            min = x;
        }
    }

    Some(min)
}

/// Returns the maximum element of `v` as defined by `is_less`, or `None` if `v` is empty.
///
/// If several elements are equally maximal, the last one is returned. This is implemented by
/// negating `is_less`, effectively testing "greater than or equal to".
pub fn max_by<T, F>(v: &[T], mut is_less: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = v.split_first()?;

    let mut max = first;
    for x in rest {
        if !is_less(x, max) {
            max = x;
        }
    }

    Some(max)
}
