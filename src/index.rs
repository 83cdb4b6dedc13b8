// this_file: fontindex/src/index.rs
//
// Family and tag indices built from font descriptions

use crate::font::FontDescription;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The persisted catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indices {
    /// Font id to description, in first-seen order
    pub families: IndexMap<String, FontDescription>,

    /// Tag to the ids of every font that carried it, in processing order
    pub tags: IndexMap<String, Vec<String>>,
}

impl Indices {
    /// Create empty indices
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a description to both indices.
    ///
    /// A description whose id is already present replaces the earlier one in
    /// place. Its id is still appended to the tag lists, so tag lists may
    /// name the same id more than once.
    pub fn insert(&mut self, desc: FontDescription) {
        for tag in &desc.tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .push(desc.id.clone());
        }

        if let Some(previous) = self.families.insert(desc.id.clone(), desc) {
            log::debug!("Replacing earlier family with id {}", previous.id);
        }
    }

    /// Ids listed under a tag
    pub fn ids_for_tag(&self, tag: &str) -> &[String] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether no family has been indexed
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl FromIterator<FontDescription> for Indices {
    fn from_iter<I: IntoIterator<Item = FontDescription>>(iter: I) -> Self {
        let mut indices = Indices::new();
        for desc in iter {
            indices.insert(desc);
        }
        indices
    }
}
