// src/extractors/contributors.rs

use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// A comma that closes an organization block: immediately preceded by `)`,
// possibly with whitespace in between. Interior commas of a parenthesized
// individuals list never match, so "OrgA (x, y), OrgB (z)" splits into
// exactly two blocks.
static BLOCK_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*,").expect("Failed to compile BLOCK_SEPARATOR_RE"));

/// Insertion-ordered multimap used for both contributor indices.
///
/// Keys keep first-seen order; values keep duplicates. The indices built
/// from a single page hold at most a handful of entries, so lookups are a
/// linear scan over a `Vec` rather than a hash map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl OrderedIndex {
    /// Appends `value` under `key`, creating the key at the end of the
    /// iteration order if it was not seen before. Duplicate values are kept.
    pub fn append(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .entries
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two mirrored indices produced by one parse pass: every individual
/// appearing under an organization also appears as a key of
/// `individual_to_orgs`, and vice versa.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContributorIndex {
    pub org_to_individuals: OrderedIndex,
    pub individual_to_orgs: OrderedIndex,
}

/// Parses raw contributor-list lines into the two mirrored indices.
///
/// Accepts any iterable of string-likes; a single string is simply the
/// one-element case. Empty blocks and empty individual names are logged and
/// skipped; structural violations (a `(` without a closing `)`) are errors.
pub fn parse_contributors<I, S>(lines: I) -> Result<ContributorIndex, ExtractError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = ContributorIndex::default();
    for line in lines {
        parse_line(line.as_ref(), &mut index)?;
    }
    Ok(index)
}

/// Splits one raw line into organization blocks and folds each block into
/// the accumulating indices.
fn parse_line(line: &str, index: &mut ContributorIndex) -> Result<(), ExtractError> {
    for block in split_blocks(line) {
        let block = block.trim();
        if block.is_empty() {
            tracing::debug!("Empty contributor block, skipping");
            continue;
        }

        let (organization, individuals) = parse_block(block)?;
        for individual in individuals {
            if individual.is_empty() {
                tracing::debug!("Organization '{}' has no individuals", organization);
                continue;
            }
            index.org_to_individuals.append(&organization, &individual);
            index.individual_to_orgs.append(&individual, &organization);
        }
    }
    Ok(())
}

/// Splits on commas that follow a closing parenthesis, keeping the `)` with
/// the preceding block and dropping the comma itself. The `regex` crate has
/// no lookbehind, so the split point is computed from the match span instead.
fn split_blocks(line: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for separator in BLOCK_SEPARATOR_RE.find_iter(line) {
        blocks.push(&line[start..separator.start() + 1]);
        start = separator.end();
    }
    blocks.push(&line[start..]);
    blocks
}

/// Parses one trimmed block into `(organization, individuals)`.
///
/// Text before the first `(` is the organization; the parenthesized rest is
/// the individuals string. Without parentheses the whole block is the
/// individuals string and the organization is empty.
fn parse_block(block: &str) -> Result<(String, Vec<String>), ExtractError> {
    match block.find('(') {
        Some(open) => {
            let organization = block[..open].trim().to_string();
            let individuals = block[open + 1..].strip_suffix(')').ok_or_else(|| {
                ExtractError::MalformedContributor(format!(
                    "unbalanced parentheses in '{}'",
                    block
                ))
            })?;
            Ok((organization, parse_individuals(individuals)))
        }
        None => Ok((String::new(), parse_individuals(block))),
    }
}

/// Splits an individuals string on commas and on the literal substring
/// "and". The substring split intentionally mirrors the established
/// convention, including its risk of over-splitting names that contain
/// "and"; downstream consumers rely on the current behavior.
fn parse_individuals(individuals: &str) -> Vec<String> {
    individuals
        .split(',')
        .flat_map(|piece| piece.split("and"))
        .map(|name| name.trim().trim_end_matches('.').trim_end().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
