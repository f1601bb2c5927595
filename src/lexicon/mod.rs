//! Lexicon: word-parts, words, prompt templates and lookup.
//!
//! ## Key Types
//!
//! - `PartId` / `Part`: prefix, root or suffix with a meaning
//! - `WordId` / `Word`: catalog word composed of ordered parts
//! - `PromptTemplate`: authored challenge with a minimum level
//! - `Dictionary`: validated, immutable lookup over all of the above
//!
//! `catalog::standard()` builds the default English catalog.

pub mod catalog;
pub mod dictionary;
pub mod part;
pub mod word;

pub use dictionary::{Dictionary, DictionaryBuilder};
pub use part::{Part, PartId, PartKind};
pub use word::{PartList, PromptTemplate, Word, WordId};
