//! Catalog words and the prompt templates authored against them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::part::PartId;

/// Unique identifier for a catalog word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// Part lists are short; four inline slots cover prefix-prefix-root-suffix.
pub type PartList = SmallVec<[PartId; 4]>;

/// A whole word composed of parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// Canonical text; equals the parts' texts concatenated in order.
    pub text: String,
    pub parts: PartList,
    /// Vocabulary difficulty, 1 (common) to 5 (rare).
    pub vocab_level: u8,
    pub tags: Vec<String>,
}

impl Word {
    #[must_use]
    pub fn new(id: WordId, text: impl Into<String>, parts: &[PartId], vocab_level: u8) -> Self {
        Self {
            id,
            text: text.into(),
            parts: SmallVec::from_slice(parts),
            vocab_level,
            tags: Vec::new(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether every `required` part appears among this word's parts.
    #[must_use]
    pub fn contains_all(&self, required: &[PartId]) -> bool {
        required.iter().all(|p| self.parts.contains(p))
    }
}

/// An authored challenge, valid for every difficulty at or above `level`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub requires_parts: PartList,
    pub level: u8,
    /// Filled in from the parts when the dictionary is built, if left empty.
    pub description: String,
}

impl PromptTemplate {
    #[must_use]
    pub fn new(level: u8, requires_parts: &[PartId]) -> Self {
        Self {
            requires_parts: SmallVec::from_slice(requires_parts),
            level,
            description: String::new(),
        }
    }

    /// Use a custom description instead of the generated one.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
