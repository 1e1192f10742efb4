/// Rearrange `nums` in-place into the lexicographically next permutation,
/// wrapping to the sorted order after the last one.
///
/// Finds the rightmost ascent, swaps its left element with the smallest
/// larger element to its right, then reverses the suffix.
pub fn next_permutation(nums: &mut [i64]) {
    let n = nums.len();
    if n < 2 {
        return;
    }

    let mut i = n - 1;
    while i > 0 && nums[i - 1] >= nums[i] {
        i -= 1;
    }

    if i > 0 {
        let pivot = i - 1;
        let mut j = n - 1;
        while nums[j] <= nums[pivot] {
            j -= 1;
        }
        nums.swap(pivot, j);
    }

    nums[i..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_to_the_next_permutation() {
        let mut nums = [1, 2, 3];
        next_permutation(&mut nums);
        assert_eq!(nums, [1, 3, 2]);
    }

    #[test]
    fn middle_of_the_sequence() {
        let mut nums = [1, 1, 5];
        next_permutation(&mut nums);
        assert_eq!(nums, [1, 5, 1]);
    }

    #[test]
    fn last_permutation_wraps_to_sorted() {
        let mut nums = [3, 2, 1];
        next_permutation(&mut nums);
        assert_eq!(nums, [1, 2, 3]);
    }

    #[test]
    fn single_element_is_a_fixed_point() {
        let mut nums = [7];
        next_permutation(&mut nums);
        assert_eq!(nums, [7]);
    }
}
