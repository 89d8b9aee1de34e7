//! Terminal output utilities

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Split a srcset into its candidates; an empty srcset has none
pub fn srcset_candidates(srcset: &str) -> Vec<&str> {
    srcset.split(",\n").filter(|c| !c.is_empty()).collect()
}

/// Describe a srcset by its candidate count, e.g. `31 candidates`
pub fn describe_srcset(srcset: &str) -> String {
    format_count(srcset_candidates(srcset).len(), "candidate", "candidates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "candidate", "candidates"), "1 candidate");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "candidate", "candidates"), "5 candidates");
    }

    #[test]
    fn test_srcset_candidates() {
        assert_eq!(srcset_candidates("a 1x,\nb 2x"), ["a 1x", "b 2x"]);
        assert!(srcset_candidates("").is_empty());
    }

    #[test]
    fn test_empty_srcset_serializes_as_empty_list() {
        let json = serde_json::to_string(&srcset_candidates("")).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_describe_srcset() {
        assert_eq!(describe_srcset("a 1x,\nb 2x"), "2 candidates");
        assert_eq!(describe_srcset("a 100w"), "1 candidate");
        assert_eq!(describe_srcset(""), "0 candidates");
    }
}
