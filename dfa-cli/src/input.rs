//! Splitting command-line words into symbols

/// One symbol per character, or the non-empty pieces between separators.
pub fn tokenize(input: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(sep) if !sep.is_empty() => input
            .split(sep)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        _ => input.chars().map(String::from).collect(),
    }
}
