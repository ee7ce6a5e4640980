// src/extractors/mod.rs
pub mod contributors;
pub mod section;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use contributors::{parse_contributors, ContributorIndex, OrderedIndex};
#[allow(unused_imports)]
pub use section::{extract_headers, slice_section, strip_marker, KEY_INVESTIGATORS_HEADING};
