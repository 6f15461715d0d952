use std::cmp::Ordering;

sort_impl!("rust_quicksort_lomuto_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Textbook quicksort with a Lomuto partition. The pivot is always the first element of the
/// sub-slice, so already sorted, reverse sorted and all-equal inputs hit the quadratic worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 3, 2, 1];
///
/// rtl_rs::sort::quicksort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but every original
/// element remains in `v` exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts `v` recursively.
///
/// Recurses into the shorter side and loops on the longer one, which bounds the stack depth to
/// *O*(log(*n*)) without changing which pivots get picked.
fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        // This is a bad choice on purpose, see the function docs of `sort`.
        let pivot_pos = partition(v, 0, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves the pivot `v[pivot]` to the end, then scans left-to-right swapping every element that
/// compares less than it into a growing prefix. Finally the pivot is swapped in right after that
/// prefix.
///
/// Returns the final position of the pivot. Every element before it compared less, every element
/// after it did not.
fn partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(pivot < len);

    let last = len - 1;
    v.swap(pivot, last);

    let (rest, pivot_slot) = v.split_at_mut(last);
    let pivot = &pivot_slot[0];

    let mut store = 0;
    for i in 0..rest.len() {
        if is_less(&rest[i], pivot) {
            rest.swap(i, store);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut v = [4, 7, 1, 9, 4, 2, 8];
        let pos = partition(&mut v, 0, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(pos, 2);
        assert_eq!(v[pos], 4);
        assert!(v[..pos].iter().all(|&x| x < 4));
        assert!(v[pos + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn partition_sorted_input_is_degenerate() {
        let mut v = [1, 2, 3, 4, 5];
        let pos = partition(&mut v, 0, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(pos, 0);
        assert_eq!(v[0], 1);
    }

    #[test]
    fn sorted_input_uses_quadratic_comparisons() {
        let len = 200;
        let mut v: Vec<u32> = (0..len).collect();
        let mut comps = 0usize;

        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        let len = len as usize;
        assert_eq!(comps, len * (len - 1) / 2);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn descending_five() {
        let mut v = [5, 4, 3, 2, 1];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }
}
