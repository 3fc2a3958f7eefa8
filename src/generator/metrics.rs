//! Size and line statistics for generated source text.

/// Byte size and line count of one generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMetrics {
    /// UTF-8 byte length
    pub bytes: usize,
    /// Number of newline-delimited segments
    pub lines: usize,
}

impl CodeMetrics {
    /// Measures a source string.
    ///
    /// The line count is the number of newline-delimited segments, so a
    /// string without any newline still counts as one line.
    #[must_use]
    pub fn measure(text: &str) -> Self {
        Self {
            bytes: text.len(),
            lines: text.split('\n').count(),
        }
    }

    /// Human-readable size: integer bytes below 1 KiB, otherwise
    /// kibibytes to two decimal places.
    #[must_use]
    pub fn size_display(&self) -> String {
        if self.bytes < 1024 {
            format!("{} bytes", self.bytes)
        } else {
            format!("{:.2} KB", self.bytes as f64 / 1024.0)
        }
    }

    /// One-line summary for the code pane footer.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} | {} lines", self.size_display(), self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_segments() {
        let metrics = CodeMetrics::measure("a\nb\nc\nd\ne");
        assert_eq!(metrics.lines, 5);
        assert_eq!(metrics.bytes, 9);
    }

    #[test]
    fn test_empty_string_is_one_line() {
        let metrics = CodeMetrics::measure("");
        assert_eq!(metrics.lines, 1);
        assert_eq!(metrics.bytes, 0);
    }

    #[test]
    fn test_size_display_byte_boundary() {
        let just_under = CodeMetrics {
            bytes: 1023,
            lines: 1,
        };
        assert_eq!(just_under.size_display(), "1023 bytes");

        let at_boundary = CodeMetrics {
            bytes: 1024,
            lines: 1,
        };
        assert_eq!(at_boundary.size_display(), "1.00 KB");
    }

    #[test]
    fn test_size_display_fractional_kb() {
        let metrics = CodeMetrics {
            bytes: 1536,
            lines: 1,
        };
        assert_eq!(metrics.size_display(), "1.50 KB");
    }

    #[test]
    fn test_utf8_bytes_not_chars() {
        // Multibyte characters count by encoded length
        let metrics = CodeMetrics::measure("héllo");
        assert_eq!(metrics.bytes, 6);
    }

    #[test]
    fn test_summary_format() {
        let metrics = CodeMetrics::measure("one\ntwo");
        assert_eq!(metrics.summary(), "7 bytes | 2 lines");
    }
}
