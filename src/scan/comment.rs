//! Per-line comment stripping.
//!
//! The scanner works line by line, so comment exclusion reduces to finding
//! the effective (non-comment) prefix of each line with a single
//! left-to-right pass. Once comment text is gone, a plain word-boundary
//! match cannot hit `// output foo is driven externally`.

/// Returns the portion of `line` that is live declaration text.
///
/// Rules:
/// - A line whose first non-blank character is `*` is treated as the
///   continuation of a block comment and contributes nothing.
/// - Otherwise the line is truncated at the first `//` or `/*`.
///
/// Text after a same-line `*/` closer is dropped along with the comment.
/// The line-based design trades that rare case for not having to track
/// block-comment state across lines.
pub fn strip_comments(line: &str) -> &str {
    if line.trim_start().starts_with('*') {
        return "";
    }
    let cut = match (line.find("//"), line.find("/*")) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => line.len(),
    };
    &line[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_untouched() {
        assert_eq!(strip_comments("input clk,"), "input clk,");
    }

    #[test]
    fn test_full_line_comment() {
        assert_eq!(strip_comments("// output foo is driven externally"), "");
        assert_eq!(strip_comments("    // input voltage data"), "    ");
    }

    #[test]
    fn test_trailing_comment_truncated() {
        assert_eq!(
            strip_comments("output busy // goes high while sending"),
            "output busy "
        );
    }

    #[test]
    fn test_block_comment_continuation_line() {
        assert_eq!(strip_comments(" * input vref is the reference"), "");
        assert_eq!(strip_comments("\t*/"), "");
    }

    #[test]
    fn test_block_comment_opener_truncates() {
        assert_eq!(strip_comments("input clk, /* rising edge */"), "input clk, ");
    }

    #[test]
    fn test_indented_comment_with_padding() {
        // Many spaces between the marker and the keyword must not matter.
        assert_eq!(strip_comments("//          output padded_out"), "");
    }
}
