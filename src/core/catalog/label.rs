//=========================================================================
// Label Formatting
//=========================================================================
//
// Server-supplied category labels may carry a count annotation such as
// "Furniture (12)". Navigation chips show the bare name.
//
// Pattern removed: optional whitespace, '(', one or more ASCII digits,
// ')', end of string.
//
//=========================================================================

/// Removes a trailing parenthesized count from a label.
///
/// Labels without the suffix are returned unchanged.
pub fn strip_count_suffix(label: &str) -> &str {
    let Some(body) = label.strip_suffix(')') else {
        return label;
    };
    let Some(open) = body.rfind('(') else {
        return label;
    };

    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return label;
    }

    body[..open].trim_end()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_count_annotation() {
        assert_eq!(strip_count_suffix("Furniture (12)"), "Furniture");
    }

    #[test]
    fn leaves_plain_label_unchanged() {
        assert_eq!(strip_count_suffix("Furniture"), "Furniture");
    }

    #[test]
    fn strips_without_separating_space() {
        assert_eq!(strip_count_suffix("Rares(3)"), "Rares");
    }

    #[test]
    fn keeps_non_numeric_parentheses() {
        assert_eq!(strip_count_suffix("Pets (new)"), "Pets (new)");
        assert_eq!(strip_count_suffix("Pets ()"), "Pets ()");
        assert_eq!(strip_count_suffix("Pets (1a)"), "Pets (1a)");
    }

    #[test]
    fn only_trailing_suffix_is_removed() {
        assert_eq!(strip_count_suffix("Set (2) Deluxe"), "Set (2) Deluxe");
        assert_eq!(strip_count_suffix("Set (2) (40)"), "Set (2)");
    }

    #[test]
    fn bare_annotation_becomes_empty() {
        assert_eq!(strip_count_suffix("(5)"), "");
    }
}
