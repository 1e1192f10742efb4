/// The one number missing from an array that should hold `1..=n`, by the
/// closed-form sum.
pub fn missing_number(nums: &[u64], n: u64) -> u64 {
    let expected = n * (n + 1) / 2;
    let actual: u64 = nums.iter().sum();
    expected - actual
}
