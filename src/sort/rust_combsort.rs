use std::cmp::Ordering;

sort_impl!("rust_combsort_unstable");

// Each pass divides the gap by this and rounds down.
const SHRINK_FACTOR: f64 = 1.247330950103979;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Comb sort compares and swaps elements `gap` apart, shrinking the gap every pass. Once the gap
/// reaches one it keeps doing plain bubble sort passes until one of them performs no swap.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    combsort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but every original
/// element remains in `v` exactly once and the sort terminates.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    combsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn combsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    let mut swapped = false;

    // Bubble sort settles within `len` passes for any total order, more than that means
    // `is_less` is not one.
    let mut gap_one_passes = 0;

    while gap > 1 || swapped {
        if gap > 1 {
            gap = next_gap(gap);
        } else {
            gap_one_passes += 1;
            if gap_one_passes > len {
                return;
            }
        }

        swapped = false;
        for i in 0..len - gap {
            if is_less(&v[i + gap], &v[i]) {
                v.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}

#[inline]
fn next_gap(gap: usize) -> usize {
    // gap >= 2 always yields at least 1.
    ((gap as f64) / SHRINK_FACTOR) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_sequence() {
        let mut gaps = Vec::new();
        let mut gap = 100;
        while gap > 1 {
            gap = next_gap(gap);
            gaps.push(gap);
        }

        assert_eq!(gaps, [80, 64, 51, 40, 32, 25, 20, 16, 12, 9, 7, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn two_elements() {
        let mut v = [2, 1];
        sort(&mut v);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn always_less_terminates() {
        let mut v: Vec<i32> = (0..50).collect();
        sort_by(&mut v, |_, _| Ordering::Less);

        v.sort();
        assert!(v.iter().copied().eq(0..50));
    }
}
