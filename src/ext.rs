/// Exposes the ordering operations as methods on slices.
///
/// The trait is implemented once for `[T]`, so every element type gets its own monomorphized copy
/// of the engine without any per-type code.
///
/// ```
/// use bmsort::OrderedSliceExt;
///
/// let scores = vec![(2, "b"), (1, "a"), (3, "c")];
/// let by_score = scores.sorted_by(|x, y| x.0 < y.0);
///
/// assert_eq!(by_score, [(1, "a"), (2, "b"), (3, "c")]);
/// assert!(by_score.is_sorted_by_less(|x, y| x.0 < y.0));
/// assert_eq!(scores.max_by_less(|x, y| x.0 < y.0), Some(&(3, "c")));
/// ```
pub trait OrderedSliceExt<T> {
    /// See [`crate::sort_by`].
    fn sorted_by<F>(&self, is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::sort_by_desc`].
    fn sorted_by_desc<F>(&self, is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::sort_by_key`].
    fn sorted_by_key<K, F>(&self, f: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K;

    /// See [`crate::is_sorted_by`].
    fn is_sorted_by_less<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::is_sorted_by_desc`].
    fn is_sorted_by_less_desc<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::min_by`].
    fn min_by_less<F>(&self, is_less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::max_by`].
    fn max_by_less<F>(&self, is_less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool;
}

impl<T> OrderedSliceExt<T> for [T] {
    #[inline]
    fn sorted_by<F>(&self, is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        crate::sort_by(self, is_less)
    }

    #[inline]
    fn sorted_by_desc<F>(&self, is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        crate::sort_by_desc(self, is_less)
    }

    #[inline]
    fn sorted_by_key<K, F>(&self, f: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        crate::sort_by_key(self, f)
    }

    #[inline]
    fn is_sorted_by_less<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        crate::is_sorted_by(self, is_less)
    }

    #[inline]
    fn is_sorted_by_less_desc<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        crate::is_sorted_by_desc(self, is_less)
    }

    #[inline]
    fn min_by_less<F>(&self, is_less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        crate::min_by(self, is_less)
    }

    #[inline]
    fn max_by_less<F>(&self, is_less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        crate::max_by(self, is_less)
    }
}
