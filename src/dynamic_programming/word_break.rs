use std::collections::HashSet;

/// True if `s` can be segmented into a sequence of dictionary words.
///
/// `dp[i]` records whether the prefix `s[..i]` segments; each position checks
/// every split point against the word set.
pub fn word_break(s: &str, words: &[&str]) -> bool {
    let word_set: HashSet<&str> = words.iter().copied().collect();
    let n = s.len();
    let mut dp = vec![false; n + 1];
    dp[0] = true;

    for i in 1..=n {
        for j in 0..i {
            if dp[j] && s.is_char_boundary(j) && s.is_char_boundary(i) && word_set.contains(&s[j..i])
            {
                dp[i] = true;
                break;
            }
        }
    }
    dp[n]
}
