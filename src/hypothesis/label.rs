//! Positive-label recognition
//!
//! Each algorithm recognizes a small closed set of positive tokens,
//! case-sensitively; every other label is treated as negative. The two sets
//! differ on purpose: Find-S additionally accepts the cell token `"1"`
//! (a numeric label column), Candidate-Elimination does not.

/// Positive tokens shared by both algorithms
const POSITIVE_TOKENS: [&str; 3] = ["YES", "Yes", "yes"];

/// Extra positive token accepted only by Find-S
const FIND_S_NUMERIC_POSITIVE: &str = "1";

/// Whether Candidate-Elimination treats this label as positive
pub fn is_positive_for_candidate_elimination(label: &str) -> bool {
    POSITIVE_TOKENS.contains(&label)
}

/// Whether Find-S treats this label as positive
pub fn is_positive_for_find_s(label: &str) -> bool {
    POSITIVE_TOKENS.contains(&label) || label == FIND_S_NUMERIC_POSITIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_tokens() {
        for token in ["YES", "Yes", "yes"] {
            assert!(is_positive_for_candidate_elimination(token));
            assert!(is_positive_for_find_s(token));
        }
    }

    #[test]
    fn test_numeric_one_asymmetry() {
        assert!(is_positive_for_find_s("1"));
        assert!(!is_positive_for_candidate_elimination("1"));
    }

    #[test]
    fn test_no_case_normalization() {
        for token in ["YeS", "yES", "Y", "true", "no", "NO"] {
            assert!(!is_positive_for_candidate_elimination(token));
            assert!(!is_positive_for_find_s(token));
        }
    }
}
