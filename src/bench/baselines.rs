//! Plain sorting routines, free of step bookkeeping
//!
//! These are the reference implementations the benchmark times. They are
//! deliberately textbook: bubble sort has no early exit, merge sort and quick
//! sort build new vectors recursively.

/// Classic O(n²) bubble sort
pub fn bubble_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Top-down merge sort returning a new vector
pub fn merge_sort(data: &[i64]) -> Vec<i64> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let mid = data.len() / 2;
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);
    merge(&left, &right)
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Three-way quick sort around the middle element
pub fn quick_sort(data: &[i64]) -> Vec<i64> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let pivot = data[data.len() / 2];
    let less: Vec<i64> = data.iter().copied().filter(|&x| x < pivot).collect();
    let equal = data.iter().filter(|&&x| x == pivot).count();
    let greater: Vec<i64> = data.iter().copied().filter(|&x| x > pivot).collect();

    let mut result = quick_sort(&less);
    result.resize(result.len() + equal, pivot);
    result.extend(quick_sort(&greater));
    result
}

/// LSD radix sort, base 10. Values must be non-negative.
pub fn radix_sort(data: &mut [i64]) {
    let Some(&max) = data.iter().max() else {
        return;
    };
    let mut output = vec![0; data.len()];
    let mut exp = 1i64;
    while max / exp > 0 {
        let mut count = [0usize; 10];
        for &value in data.iter() {
            count[((value / exp) % 10) as usize] += 1;
        }
        for d in 1..10 {
            count[d] += count[d - 1];
        }
        for &value in data.iter().rev() {
            let digit = ((value / exp) % 10) as usize;
            output[count[digit] - 1] = value;
            count[digit] -= 1;
        }
        data.copy_from_slice(&output);

        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// Index of the first occurrence of `target`
pub fn linear_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&x| x == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(data: &[i64]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    const CASES: &[&[i64]] = &[
        &[],
        &[42],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        &[1, 1, 1, 1, 1],
        &[64, 34, 25, 12, 22, 11, 90, 5, 22, 11],
    ];

    #[test]
    fn test_in_place_sorts() {
        for case in CASES {
            let mut data = case.to_vec();
            bubble_sort(&mut data);
            assert!(is_sorted(&data), "bubble: {:?}", data);

            let mut data = case.to_vec();
            radix_sort(&mut data);
            assert!(is_sorted(&data), "radix: {:?}", data);
        }
    }

    #[test]
    fn test_copying_sorts() {
        for case in CASES {
            let merged = merge_sort(case);
            assert!(is_sorted(&merged), "merge: {:?}", merged);
            assert_eq!(merged.len(), case.len());

            let quick = quick_sort(case);
            assert!(is_sorted(&quick), "quick: {:?}", quick);
            assert_eq!(quick.len(), case.len());
        }
    }

    #[test]
    fn test_linear_search() {
        let data = [64, 34, 25, 12, 22, 11, 90, 5, 22, 11];
        assert_eq!(linear_search(&data, 22), Some(4));
        assert_eq!(linear_search(&data, -1), None);
    }
}
