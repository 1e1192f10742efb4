/// Reverse a string by swapping characters from both ends, without the
/// iterator shortcut.
pub fn reverse(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let mut left = 0;
    let mut right = chars.len();
    while left + 1 < right {
        right -= 1;
        chars.swap(left, right);
        left += 1;
    }
    chars.into_iter().collect()
}
