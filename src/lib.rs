//! A raw-storage growable array and the generic in-place sorts tested against it.

/// Declares `SortImpl`, the [`sort_test_tools::Sort`] entry point of a sort module.
///
/// The invoking module has to provide `sort` and `sort_by` with the usual signatures.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod error;
pub mod raw;
pub mod sort;
pub mod vector;

pub use error::VectorError;
pub use vector::Vector;
