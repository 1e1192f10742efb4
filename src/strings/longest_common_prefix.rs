/// Longest prefix shared by every string in `strs`, empty when there is
/// none. Byte-wise comparison against the first string.
pub fn longest_common_prefix<'a>(strs: &[&'a str]) -> &'a str {
    let Some((&first, rest)) = strs.split_first() else {
        return "";
    };

    let mut len = first.len();
    for s in rest {
        len = len.min(s.len());
        for (i, (a, b)) in first.bytes().zip(s.bytes()).enumerate().take(len) {
            if a != b {
                len = i;
                break;
            }
        }
    }
    &first[..len]
}
