// src/pages/mod.rs
use std::fs;
use std::path::Path;

use crate::extractors::contributors;
use crate::extractors::section;
use crate::utils::error::{ExtractError, PageError};

/// Metadata extracted from one markdown project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub title: String,
    /// Individual names in first-seen order across the contributor lines.
    pub investigators: Vec<String>,
}

/// Reads a markdown project page from disk and extracts its metadata.
pub fn parse_project_page<P: AsRef<Path>>(path: P) -> Result<ProjectMetadata, PageError> {
    let path = path.as_ref();
    tracing::debug!("Parsing project page: {}", path.display());

    let content = fs::read_to_string(path)?;
    Ok(parse_project_source(&content)?)
}

/// Extracts title and investigators from the page content.
///
/// The first heading (any level) is the project title; the lines between the
/// "Key Investigators" heading and the next heading are contributor list
/// items, each prefixed with "- ".
pub fn parse_project_source(content: &str) -> Result<ProjectMetadata, ExtractError> {
    // Strip empty lines before any index arithmetic
    let lines: Vec<&str> = content.split('\n').filter(|line| !line.is_empty()).collect();

    let headers = section::extract_headers(&lines);

    // First heading is the project title, minus its `# ` marker
    let (_, title_line) = headers.first().ok_or(ExtractError::MissingTitle)?;
    let title = section::strip_marker(title_line);

    let investigator_lines =
        section::slice_section(&lines, &headers, section::KEY_INVESTIGATORS_HEADING)?;
    let contributor_lines: Vec<&str> = investigator_lines
        .iter()
        .map(|line| section::strip_marker(line))
        .collect();

    let index = contributors::parse_contributors(contributor_lines)?;

    Ok(ProjectMetadata {
        title: title.to_string(),
        investigators: index
            .individual_to_orgs
            .keys()
            .map(str::to_string)
            .collect(),
    })
}

/// Name of the immediate parent directory of `path`, or the empty string
/// when the path has no parent component.
pub fn parent_directory(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Formats the single-line markdown index entry for one parsed page.
pub fn index_entry(metadata: &ProjectMetadata, directory: &str) -> String {
    format!(
        "1. [{}](Projects/{}/README.md) ({})",
        metadata.title,
        directory,
        metadata.investigators.join(", ")
    )
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
# My Project

Some description text.

## Key Investigators

- Org (Alice and Bob)

## Background

More text.
";

    #[test]
    fn test_parse_full_page() {
        let metadata = parse_project_source(PAGE).expect("parse failed");

        assert_eq!(metadata.title, "My Project");
        assert_eq!(metadata.investigators, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_investigators_keep_first_seen_order() {
        let page = "\
# Ordering

## Key Investigators

- OrgB (Carol)
- OrgA (Alice, Carol and Bob)
";
        let metadata = parse_project_source(page).expect("parse failed");

        assert_eq!(metadata.investigators, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_missing_key_investigators_heading_fails() {
        let page = "# Title\n\nBody text only.\n";
        let result = parse_project_source(page);

        assert!(matches!(
            result,
            Err(ExtractError::SectionNotFound(_))
        ));
    }

    #[test]
    fn test_page_without_headings_fails() {
        let result = parse_project_source("just text\nno headings\n");

        assert!(matches!(result, Err(ExtractError::MissingTitle)));
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(parent_directory(Path::new("Projects/Demo/README.md")), "Demo");
        assert_eq!(parent_directory(Path::new("Projects/README.md")), "Projects");
        assert_eq!(parent_directory(Path::new("README.md")), "");
    }

    #[test]
    fn test_index_entry_format() {
        let metadata = ProjectMetadata {
            title: "My Project".to_string(),
            investigators: vec!["Alice".to_string(), "Bob".to_string()],
        };

        assert_eq!(
            index_entry(&metadata, "Demo"),
            "1. [My Project](Projects/Demo/README.md) (Alice, Bob)"
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = parse_project_page("no/such/page/README.md");

        assert!(matches!(result, Err(PageError::Io(_))));
    }
}
