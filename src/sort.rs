// Textbook sorting routines over i32 slices.

/// Pass and swap counts from one bubble sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub swaps: usize,
}

/// In-place adjacent-swap sort. Stops early when a full pass performs
/// no swap, so already-sorted input costs a single pass.
pub fn bubble_sort(arr: &mut [i32]) -> SortStats {
    let mut stats = SortStats { passes: 0, swaps: 0 };
    let n = arr.len();
    if n < 2 {
        return stats;
    }

    for i in 0..n - 1 {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    stats
}

/// Recursive halve-and-merge sort. Stable: ties keep the element from
/// the left half first.
pub fn merge_sort(arr: &mut [i32]) {
    if arr.len() < 2 {
        return;
    }

    let mid = arr.len() / 2;
    let (left, right) = arr.split_at_mut(mid);
    merge_sort(left);
    merge_sort(right);
    merge(arr, mid);
}

// Merge the sorted halves arr[..mid] and arr[mid..] back into arr.
// The temporaries are sized to this merge step only.
fn merge(arr: &mut [i32], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}

pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    // Sorted copy of the input, for permutation checks.
    fn reference_sorted(arr: &[i32]) -> Vec<i32> {
        let mut expected = arr.to_vec();
        expected.sort();
        expected
    }

    #[test]
    fn bubble_sorts_random_input() {
        let original = generate::random(500, 100).unwrap();
        let mut arr = original.clone();
        bubble_sort(&mut arr);
        assert_eq!(arr, reference_sorted(&original));
    }

    #[test]
    fn bubble_sorts_reverse_input() {
        let original = generate::descending(200).unwrap();
        let mut arr = original.clone();
        bubble_sort(&mut arr);
        assert_eq!(arr, reference_sorted(&original));
    }

    #[test]
    fn bubble_early_exit_on_sorted_input() {
        let mut arr = generate::ascending(1_000).unwrap();
        let stats = bubble_sort(&mut arr);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn bubble_handles_trivial_slices() {
        let mut empty: [i32; 0] = [];
        assert_eq!(bubble_sort(&mut empty).passes, 0);

        let mut single = [7];
        assert_eq!(bubble_sort(&mut single).passes, 0);
        assert_eq!(single, [7]);
    }

    #[test]
    fn merge_sorts_random_input() {
        let original = generate::random(500, 100).unwrap();
        let mut arr = original.clone();
        merge_sort(&mut arr);
        assert_eq!(arr, reference_sorted(&original));
    }

    #[test]
    fn merge_sorts_all_shapes() {
        for original in [
            generate::ascending(300).unwrap(),
            generate::descending(300).unwrap(),
            vec![5, 5, 5, 5],
            vec![],
            vec![1],
        ] {
            let mut arr = original.clone();
            merge_sort(&mut arr);
            assert_eq!(arr, reference_sorted(&original));
        }
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
