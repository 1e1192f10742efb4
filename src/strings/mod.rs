pub mod anagram;
pub mod dedup;
pub mod longest_common_prefix;
pub mod longest_unique_substring;
pub mod palindrome;
pub mod reverse;
