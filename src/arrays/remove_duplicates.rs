/// Compact a sorted slice in-place so its unique values occupy the front,
/// returning how many there are. Elements past the returned length are
/// unspecified.
pub fn remove_duplicates(nums: &mut [i64]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..nums.len() {
        if nums[read] != nums[read - 1] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_sorted_duplicates() {
        let mut nums = [1, 1, 2, 2, 2, 3];
        let len = remove_duplicates(&mut nums);
        assert_eq!(len, 3);
        assert_eq!(&nums[..len], &[1, 2, 3]);
    }

    #[test]
    fn already_unique_is_untouched() {
        let mut nums = [1, 2, 3];
        assert_eq!(remove_duplicates(&mut nums), 3);
        assert_eq!(nums, [1, 2, 3]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove_duplicates(&mut []), 0);
    }
}
