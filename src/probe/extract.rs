//! Version extraction from captured probe output.

use crate::strategy::Extraction;
use regex::Regex;
use std::sync::LazyLock;

/// First dotted numeric sequence of 2-3 groups, rejected when the number
/// runs straight into a letter or digit. That boundary is what keeps
/// elapsed-time figures like `12.4s` from matching while `2.39.1` still
/// does.
static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+){1,2})(?:[^0-9A-Za-z]|$)").expect("version pattern")
});

/// As above, but the number must follow a whitespace character. Used by
/// recipes that need to skip decoy numbers glued to other text.
static VERSION_AFTER_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s(\d+(?:\.\d+){1,2})(?:[^0-9A-Za-z]|$)").expect("version pattern")
});

/// Extract the first version-looking substring from probe output.
///
/// Scans top to bottom and returns the first match, or an empty string when
/// nothing matches; extraction never fails. The [`Extraction`] record can
/// restrict scanning to a single line of the output and/or require a
/// leading whitespace before the number.
pub fn extract(text: &str, extraction: &Extraction) -> String {
    let scanned: &str = match extraction.line {
        Some(n) => match text.lines().nth(n) {
            Some(line) => line,
            None => return String::new(),
        },
        None => text,
    };

    let pattern = if extraction.leading_space {
        &*VERSION_AFTER_SPACE
    } else {
        &*VERSION
    };

    pattern
        .captures(scanned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Extraction = Extraction { line: None, leading_space: false };

    #[test]
    fn test_extract_git_banner() {
        assert_eq!(extract("git version 2.39.1", &DEFAULT), "2.39.1");
    }

    #[test]
    fn test_extract_two_group_version() {
        assert_eq!(extract("tmux 3.3\n", &DEFAULT), "3.3");
    }

    #[test]
    fn test_extract_rejects_number_glued_to_letter() {
        // 3.2a reads as a release tag, not a dotted numeric version
        assert_eq!(extract("tmux 3.2a", &DEFAULT), "");
    }

    #[test]
    fn test_extract_skips_elapsed_time_figures() {
        assert_eq!(extract("build took 12.4s, no version here", &DEFAULT), "");
    }

    #[test]
    fn test_extract_first_match_wins() {
        let out = "tool 1.2.3 (build 4.5.6)";
        assert_eq!(extract(out, &DEFAULT), "1.2.3");
    }

    #[test]
    fn test_extract_multiline_scans_top_down() {
        let out = "Some Tool\nrelease 0.9.1\nbuilt 2025-01-01";
        assert_eq!(extract(out, &DEFAULT), "0.9.1");
    }

    #[test]
    fn test_extract_no_match_is_empty() {
        assert_eq!(extract("no numbers at all", &DEFAULT), "");
        assert_eq!(extract("", &DEFAULT), "");
    }

    #[test]
    fn test_extract_caps_at_three_groups() {
        assert_eq!(extract("kernel 5.15.0.1", &DEFAULT), "5.15.0");
    }

    #[test]
    fn test_extract_single_line_override() {
        let out = "git version 2.39.1\nhub version 2.14.2";
        let second_line = Extraction { line: Some(1), leading_space: true };
        assert_eq!(extract(out, &second_line), "2.14.2");
    }

    #[test]
    fn test_extract_missing_line_is_empty() {
        let only_line = Extraction { line: Some(3), leading_space: false };
        assert_eq!(extract("one line only 1.2.3", &only_line), "");
    }

    #[test]
    fn test_extract_leading_space_skips_glued_numbers() {
        let out = "elapsed:12.44 Version 2.3 of the tool";
        let spaced = Extraction { line: None, leading_space: true };
        assert_eq!(extract(out, &spaced), "2.3");
    }
}
