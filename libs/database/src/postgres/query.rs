//! Query-building helpers shared by the repositories.

/// `%needle%` for a case-insensitive `lower(column) LIKE` match.
///
/// The needle is lowercased and its LIKE wildcards (`%`, `_`) and the escape
/// character are escaped, so user input matches literally.
pub fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_X"), "%50\\%\\_x%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_plain_needle() {
        assert_eq!(contains_pattern("Acétone"), "%acétone%");
    }
}
