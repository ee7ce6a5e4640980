// src/extractors/section.rs

use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
/// Literal heading text delimiting the contributor section of a page.
pub const KEY_INVESTIGATORS_HEADING: &str = "## Key Investigators";

// --- Regex Patterns (Lazy Static) ---
// Markdown ATX heading: one or more leading `#`, a space, rest of line.
// Heading level is not interpreted, only presence and document order.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+ .*$").expect("Failed to compile HEADING_RE"));

/// Returns `(line index, heading text)` for every heading line, in document
/// order. `lines` is expected to already have blank lines stripped.
pub fn extract_headers<'a>(lines: &[&'a str]) -> Vec<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| HEADING_RE.is_match(line))
        .map(|(i, line)| (i, *line))
        .collect()
}

/// Returns the lines strictly between `heading` and the next heading, or
/// the end of the document when `heading` is the last one.
pub fn slice_section<'a>(
    lines: &[&'a str],
    headers: &[(usize, &'a str)],
    heading: &str,
) -> Result<Vec<&'a str>, ExtractError> {
    let position = headers
        .iter()
        .position(|(_, text)| *text == heading)
        .ok_or_else(|| ExtractError::SectionNotFound(heading.to_string()))?;

    let start = headers[position].0 + 1;
    let end = headers
        .get(position + 1)
        .map_or(lines.len(), |(line, _)| *line);

    tracing::debug!("Sliced section '{}': lines {}..{}", heading, start, end);
    Ok(lines[start..end].to_vec())
}

/// Strips a fixed two-character marker from the front of a line: the `"- "`
/// of a list item or the `"# "` of a title heading. Lines shorter than the
/// marker collapse to the empty string.
pub fn strip_marker(line: &str) -> &str {
    line.char_indices()
        .nth(2)
        .map(|(i, _)| &line[i..])
        .unwrap_or("")
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &[&str] = &[
        "# My Project",
        "Intro paragraph, not a heading.",
        "## Key Investigators",
        "- Org (Alice and Bob)",
        "- Carol",
        "## Background",
        "Some text.",
    ];

    #[test]
    fn test_extract_headers_finds_all_levels() {
        let headers = extract_headers(PAGE);

        assert_eq!(
            headers,
            vec![
                (0, "# My Project"),
                (2, "## Key Investigators"),
                (5, "## Background"),
            ]
        );
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        let headers = extract_headers(&["#NoSpace", "plain", "### Deep heading"]);

        assert_eq!(headers, vec![(2, "### Deep heading")]);
    }

    #[test]
    fn test_slice_between_headings() {
        let headers = extract_headers(PAGE);
        let section =
            slice_section(PAGE, &headers, KEY_INVESTIGATORS_HEADING).expect("slice failed");

        assert_eq!(section, vec!["- Org (Alice and Bob)", "- Carol"]);
    }

    #[test]
    fn test_slice_runs_to_end_of_document_for_last_heading() {
        let lines = &["# Title", "## Key Investigators", "- Alice", "- Bob"];
        let headers = extract_headers(lines);
        let section =
            slice_section(lines, &headers, KEY_INVESTIGATORS_HEADING).expect("slice failed");

        assert_eq!(section, vec!["- Alice", "- Bob"]);
    }

    #[test]
    fn test_missing_heading_is_an_error() {
        let lines = &["# Title", "## Background", "Text."];
        let headers = extract_headers(lines);
        let result = slice_section(lines, &headers, KEY_INVESTIGATORS_HEADING);

        assert!(matches!(result, Err(ExtractError::SectionNotFound(_))));
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("- Org (Alice)"), "Org (Alice)");
        assert_eq!(strip_marker("# My Project"), "My Project");
        assert_eq!(strip_marker("-"), "");
        assert_eq!(strip_marker(""), "");
    }
}
