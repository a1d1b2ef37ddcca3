/// Checks whether `s` reads the same forwards and backwards, ignoring case
/// and any non-alphanumeric characters. The empty string counts as a
/// palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let normalized: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}
