use rtl_rs::sort::{combsort, combsort_by, quicksort, quicksort_by};
use rtl_rs::{vector, Vector};
use sort_test_tools::counter::CountRegistry;
use sort_test_tools::patterns;

#[test]
fn quicksort_descending_vector() {
    let mut v: Vector<i32> = vector![5, 4, 3, 2, 1];
    quicksort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn combsort_descending_vector() {
    let mut v: Vector<i32> = vector![5, 4, 3, 2, 1];
    combsort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn sort_sub_range() {
    let mut v: Vector<i32> = vector![9, 8, 3, 1, 2, 0];
    quicksort(&mut v[2..5]);
    assert_eq!(v, [9, 8, 1, 2, 3, 0]);

    combsort(&mut v[..2]);
    assert_eq!(v, [8, 9, 1, 2, 3, 0]);
}

#[test]
fn sorts_agree_on_random_vectors() {
    for len in [0, 1, 2, 17, 100, 1_000] {
        let input: Vector<i32> = patterns::random_uniform(len, -50..50).into_iter().collect();

        let mut expected = input.to_vec();
        expected.sort();

        let mut by_quicksort = input.clone();
        quicksort(&mut by_quicksort);

        let mut by_combsort = input.clone();
        combsort(&mut by_combsort);

        assert_eq!(by_quicksort, expected[..]);
        assert_eq!(by_combsort, expected[..]);
        assert_eq!(by_quicksort, by_combsort);
    }
}

#[test]
fn custom_comparator() {
    let mut words: Vector<String> = ["pear", "fig", "banana", "kiwi"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    quicksort_by(&mut words, |a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    assert_eq!(words, ["fig", "kiwi", "pear", "banana"]);

    combsort_by(&mut words, |a, b| b.cmp(a));
    assert_eq!(words, ["pear", "kiwi", "fig", "banana"]);
}

#[test]
fn sorting_counted_elements_keeps_counts_balanced() {
    let registry = CountRegistry::new();

    {
        let mut v: Vector<_> = patterns::random_uniform(300, 0..40)
            .into_iter()
            .map(|key| registry.track(key))
            .collect();

        quicksort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));

        v.reverse();
        combsort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(registry.live(), 300);
    }

    assert!(registry.is_balanced(), "{:?}", registry.unbalanced());
}
