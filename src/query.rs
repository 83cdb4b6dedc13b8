// this_file: fontindex/src/query.rs
//
// Tag queries against a collected index

use crate::{font::FontDescription, index::Indices};
use std::collections::HashSet;

/// Criteria for querying an index
#[derive(Debug, Clone, Default)]
pub struct QueryCriteria {
    /// Categories, e.g. "serif"
    pub categories: Vec<String>,

    /// Subsets, e.g. "latin-ext"
    pub subsets: Vec<String>,

    /// Variants, e.g. "700italic"
    pub variants: Vec<String>,

    /// Raw tags such as "type:display"
    pub tags: Vec<String>,
}

impl QueryCriteria {
    /// Expand the criteria into the full tag strings stored in the index
    pub fn to_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        tags.extend(self.categories.iter().map(|c| format!("type:{}", c)));
        tags.extend(self.subsets.iter().map(|s| format!("subset:{}", s)));
        tags.extend(self.variants.iter().map(|v| format!("variant:{}", v)));
        tags.extend(self.tags.iter().cloned());
        tags
    }
}

/// Query over the tag index of a collected catalog
pub struct FontQuery {
    tags: Vec<String>,
}

impl FontQuery {
    /// Create a new font query
    pub fn new(criteria: &QueryCriteria) -> Self {
        Self {
            tags: criteria.to_tags(),
        }
    }

    /// Families carrying every queried tag, in index order.
    ///
    /// The tag lists may name ids whose family was later replaced by a
    /// colliding id, so candidates are re-checked against the surviving
    /// description.
    pub fn execute<'a>(&self, indices: &'a Indices) -> Vec<&'a FontDescription> {
        if self.tags.is_empty() {
            return indices.families.values().collect();
        }

        let mut candidates: Option<HashSet<&str>> = None;
        for tag in &self.tags {
            let ids: HashSet<&str> = indices.ids_for_tag(tag).iter().map(String::as_str).collect();
            candidates = Some(match candidates {
                Some(current) => current.intersection(&ids).copied().collect(),
                None => ids,
            });
        }
        let candidates = candidates.unwrap_or_default();

        indices
            .families
            .values()
            .filter(|desc| candidates.contains(desc.id.as_str()) && desc.has_tags(&self.tags))
            .collect()
    }
}
