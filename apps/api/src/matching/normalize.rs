//! Text normalization applied to every document before any scoring step.

/// Lowercases `raw` and removes every character outside `[a-z0-9\s]`.
///
/// The same normalization runs over the job description and every resume,
/// so all downstream comparison is case- and punctuation-insensitive.
/// Pure and total: empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Senior Rust Engineer (Remote), 5+ yrs!"),
            "senior rust engineer remote 5 yrs"
        );
    }

    #[test]
    fn test_digits_and_whitespace_survive() {
        assert_eq!(normalize("SQL 2019\nPython\t3.11"), "sql 2019\npython\t311");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["", "Hello, World!", "already clean text 42", "émigré café"];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_output_alphabet_is_confined() {
        let out = normalize("Ünïcode & <tags> © 2024 ☃");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace()));
    }

    #[test]
    fn test_empty_input_allowed() {
        assert_eq!(normalize(""), "");
    }
}
