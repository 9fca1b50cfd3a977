/// A sort implementation driven by a strict ordering predicate instead of `Ord`.
///
/// The property tests in [`tests`] are written against this trait and instantiated per
/// implementation with [`instantiate_sort_tests!`].
pub trait LessSort {
    fn name() -> String;

    /// Sorts `v` in place so that no element is `is_less` than its left neighbour.
    fn sort_in_place_by<T, F>(v: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Returns a sorted copy of `v`, leaving `v` unchanged.
    fn sorted_by<T, F>(v: &[T], is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// Returns a copy of `v` sorted by the negation of `is_less`.
    fn sorted_by_desc<T, F>(v: &[T], is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    fn is_sorted_by<T, F>(v: &[T], is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
