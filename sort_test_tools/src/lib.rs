pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod counter;
pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Instantiates the full generic sort test suite as `#[test]` functions for `$sort_impl`.
///
/// Must be invoked at most once per test crate, since the generated function names are fixed.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @plain $sort_impl,
            basic,
            fixed_seed,
            random,
            random_uniform_small_range,
            random_zipf,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            saw_descending,
            pipe_organ,
            random_str,
            random_boxed,
            sort_by_reversed,
            sort_by_key_field,
            sorted_input_unchanged,
            int_edge,
            deterministic,
            observable_is_less,
            drop_balance,
            violate_ord_retain_orig_set,
            panic_retain_orig_set,
        );

        $crate::instantiate_sort_tests!(@typed $sort_impl, u8, u16, u64, u128, i64, isize);
    };
    (@plain $sort_impl:ty, $($test_fn:ident),* $(,)?) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
    (@typed $sort_impl:ty, $($ty:ident),* $(,)?) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<random_type_ $ty>]() {
                    $crate::tests::random_type::<$sort_impl, $ty>();
                }
            }
        )*
    };
}
