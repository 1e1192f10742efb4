/// True if the alphanumeric characters of `s`, compared case-insensitively,
/// read the same in both directions.
pub fn is_palindrome_alphanumeric(s: &str) -> bool {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    let mut left = 0;
    let mut right = chars.len();
    while left + 1 < right {
        right -= 1;
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_punctuation_and_case() {
        assert!(is_palindrome_alphanumeric("A man, a plan, a canal: Panama"));
    }

    #[test]
    fn rejects_non_palindromes() {
        assert!(!is_palindrome_alphanumeric("race a car"));
    }

    #[test]
    fn empty_and_symbol_only_strings_pass() {
        assert!(is_palindrome_alphanumeric(""));
        assert!(is_palindrome_alphanumeric(".,!"));
    }
}
