use std::collections::HashSet;

/// Length of the longest substring without repeated characters, via a
/// sliding window: the left edge advances past the previous occurrence
/// whenever the right edge would repeat.
pub fn longest_unique_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut window = HashSet::new();
    let mut left = 0;
    let mut best = 0;

    for right in 0..chars.len() {
        while window.contains(&chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(chars[right]);
        best = best.max(right - left + 1);
    }
    best
}
