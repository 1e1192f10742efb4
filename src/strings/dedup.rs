use std::collections::HashSet;

/// Remove repeated characters, keeping the first occurrence of each.
pub fn remove_duplicate_chars(s: &str) -> String {
    let mut seen = HashSet::new();
    s.chars().filter(|&c| seen.insert(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrences() {
        assert_eq!(remove_duplicate_chars("tree"), "tre");
        assert_eq!(remove_duplicate_chars("banana"), "ban");
    }

    #[test]
    fn unique_input_is_unchanged() {
        assert_eq!(remove_duplicate_chars("abc"), "abc");
        assert_eq!(remove_duplicate_chars(""), "");
    }
}
