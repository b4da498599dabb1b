//! Identifier normalisation helpers.

/// Characters treated as namespace separators in user input.
pub(crate) const SEPARATORS: [char; 2] = ['/', '\\'];

/// Convert a word to StudlyCase the way PHP frameworks do it.
///
/// ## Rules
///
/// 1. Split on `_`, `-` and whitespace
/// 2. Uppercase the first letter of each word
/// 3. Keep the remaining letters as written (acronyms survive)
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "user_repository" | "UserRepository" |
/// | "user-repository" | "UserRepository" |
/// | "userRepository" | "UserRepository" |
/// | "HTTPClient" | "HTTPClient" |
pub fn to_studly_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(w.len());
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split raw user input into non-empty namespace segments.
pub(crate) fn split_segments(raw: &str) -> Vec<&str> {
    raw.split(SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Drop a trailing file extension (`UserRepository.php` -> `UserRepository`).
pub(crate) fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            stem
        }
        _ => segment,
    }
}

/// Why a single segment cannot become a class identifier, if it cannot.
pub(crate) fn segment_problem(segment: &str) -> Option<String> {
    let stem = strip_extension(segment);
    if stem.contains('.') {
        return Some(format!("segment '{}' contains '.'", segment));
    }
    if let Some(bad) = stem
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')))
    {
        return Some(format!("character '{}' is not allowed", bad));
    }
    let studly = to_studly_case(stem);
    match studly.chars().next() {
        None => Some(format!("segment '{}' has no letters", segment)),
        Some(c) if c.is_ascii_digit() => {
            Some(format!("segment '{}' cannot start with a digit", segment))
        }
        Some(_) => None,
    }
}
