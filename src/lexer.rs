//! Splitting of a raw input line into an argument vector.
//!
//! There is no quoting, escaping or expansion: a token is exactly a maximal
//! run of non-delimiter characters.

/// Characters that separate tokens: space, tab, carriage return, newline and
/// the bell character.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Splits `line` into owned argument strings.
///
/// Runs of delimiters collapse, so no empty token is ever produced. An empty
/// or all-delimiter line yields an empty vector. The number and length of
/// tokens is bounded only by memory.
///
/// ```
/// let argv = lsh::split_into_tokens("  ls   -la  ");
/// assert_eq!(argv, ["ls", "-la"]);
/// ```
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
