/// For each index, the product of every other element, O(n) and without
/// division: a prefix pass followed by a suffix pass.
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let n = nums.len();
    let mut answer = vec![1i64; n];

    let mut prefix = 1;
    for i in 0..n {
        answer[i] = prefix;
        prefix *= nums[i];
    }
    let mut suffix = 1;
    for i in (0..n).rev() {
        answer[i] *= suffix;
        suffix *= nums[i];
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_exclude_self() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
    }

    #[test]
    fn zero_dominates_every_other_slot() {
        assert_eq!(
            product_except_self(&[-1, 1, 0, -3, 3]),
            vec![0, 0, 9, 0, 0]
        );
    }

    #[test]
    fn empty_input() {
        assert!(product_except_self(&[]).is_empty());
    }
}
