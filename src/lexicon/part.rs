//! Word-parts: prefixes, roots and suffixes.

use serde::{Deserialize, Serialize};

/// Unique identifier for a word-part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartId(pub u32);

impl PartId {
    /// Create a new part ID.
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

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part({})", self.0)
    }
}

/// Where a part attaches in a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Prefix,
    Root,
    Suffix,
}

/// An atomic sub-word unit with a meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub kind: PartKind,
    /// Surface text contributed when composed.
    pub text: String,
    pub meaning: String,
}

impl Part {
    #[must_use]
    pub fn new(
        id: PartId,
        kind: PartKind,
        text: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            meaning: meaning.into(),
        }
    }

    /// Text with the conventional hyphen: `re-`, `port`, `-able`.
    #[must_use]
    pub fn display_form(&self) -> String {
        match self.kind {
            PartKind::Prefix => format!("{}-", self.text),
            PartKind::Root => self.text.clone(),
            PartKind::Suffix => format!("-{}", self.text),
        }
    }
}
