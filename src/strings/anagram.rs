use std::collections::HashMap;

/// True if `s` and `t` contain exactly the same characters with the same
/// multiplicities. Counting beats sorting: O(n) instead of O(n log n).
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        match counts.get_mut(&c) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&c);
                }
            }
            None => return false,
        }
    }
    counts.is_empty()
}
