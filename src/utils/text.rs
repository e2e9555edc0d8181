/// Case-insensitive equality, folding each character pair through upper and lower case.
pub fn equals_ignore_case(left: &str, right: &str) -> bool {
    if left.chars().count() != right.chars().count() {
        return false;
    }

    left.chars().zip(right.chars()).all(|(a, b)| {
        a == b
            || a.to_uppercase().eq(b.to_uppercase())
            || a.to_lowercase().eq(b.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_ignore_case() {
        assert!(equals_ignore_case("COMMAND1", "command1"));
        assert!(equals_ignore_case("CoMmAnD2", "command2"));
        assert!(!equals_ignore_case("command", "command1"));
        assert!(!equals_ignore_case("command1 ", "command1"));
        assert!(!equals_ignore_case("command3", "command1"));
    }

    #[test]
    fn test_non_ascii_folding() {
        assert!(equals_ignore_case("ÉCOLE", "école"));
        // Kelvin sign lowercases to ASCII 'k'
        assert!(equals_ignore_case("\u{212A}", "k"));
    }
}
