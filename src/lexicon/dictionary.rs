//! Part and word lookup.
//!
//! The `Dictionary` stores every part, word and prompt template for a game.
//! It is built once through `DictionaryBuilder`, which rejects authoring
//! mistakes, and is immutable afterwards.
//!
//! ## Example
//!
//! ```
//! use vocab_battle::lexicon::{
//!     DictionaryBuilder, Part, PartId, PartKind, PromptTemplate, Word, WordId,
//! };
//!
//! let re = PartId::new(1);
//! let port = PartId::new(2);
//!
//! let dict = DictionaryBuilder::new()
//!     .part(Part::new(re, PartKind::Prefix, "re", "back"))
//!     .part(Part::new(port, PartKind::Root, "port", "carry"))
//!     .word(Word::new(WordId::new(1), "report", &[re, port], 1))
//!     .prompt(PromptTemplate::new(1, &[port]))
//!     .build()
//!     .unwrap();
//!
//! let text = dict.build_word_from_parts(&[re, port]);
//! assert_eq!(dict.find_word(&text).map(|w| w.id), Some(WordId::new(1)));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use super::part::{Part, PartId, PartKind};
use super::word::{PromptTemplate, Word, WordId};
use crate::core::{BattleError, Result};
use crate::rules::Prompt;

/// Immutable catalog of parts, words and prompt templates.
#[derive(Clone, Debug)]
pub struct Dictionary {
    parts: Vec<Part>,
    part_index: FxHashMap<PartId, usize>,
    words: Vec<Word>,
    word_index: FxHashMap<WordId, usize>,
    text_index: FxHashMap<String, usize>,
    prompts: Vec<PromptTemplate>,
}

impl Dictionary {
    /// Get a part by ID.
    #[must_use]
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.part_index.get(&id).map(|&i| &self.parts[i])
    }

    /// All parts in registration order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts of one kind, in registration order.
    pub fn parts_of_kind(&self, kind: PartKind) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }

    /// Get a word by ID.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.word_index.get(&id).map(|&i| &self.words[i])
    }

    /// All words in registration order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All prompt templates.
    #[must_use]
    pub fn prompt_templates(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    /// Concatenate the parts' text in the order given.
    ///
    /// Unknown IDs contribute nothing, so this never fails.
    #[must_use]
    pub fn build_word_from_parts(&self, ids: &[PartId]) -> String {
        ids.iter()
            .filter_map(|&id| self.part(id))
            .map(|p| p.text.as_str())
            .collect()
    }

    /// Exact lookup by canonical text.
    #[must_use]
    pub fn find_word(&self, text: &str) -> Option<&Word> {
        self.text_index.get(text).map(|&i| &self.words[i])
    }

    /// Words at or below `vocab_level_max` that satisfy the prompt.
    #[must_use]
    pub fn eligible_words_for_prompt(&self, prompt: &Prompt, vocab_level_max: u8) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.vocab_level <= vocab_level_max && w.contains_all(&prompt.requires_parts))
            .collect()
    }

    /// Templates usable at a difficulty level.
    pub fn templates_for_level(&self, level: u8) -> impl Iterator<Item = &PromptTemplate> {
        self.prompts.iter().filter(move |t| t.level <= level)
    }

    fn describe(&self, required: &[PartId]) -> String {
        let pieces: Vec<String> = required
            .iter()
            .filter_map(|&id| self.part(id))
            .map(|p| format!("{} ({})", p.display_form(), p.meaning))
            .collect();
        format!("Build a word using {}", pieces.join(" + "))
    }
}

/// Collects catalog entries and validates them into a `Dictionary`.
#[derive(Clone, Debug, Default)]
pub struct DictionaryBuilder {
    parts: Vec<Part>,
    words: Vec<Word>,
    prompts: Vec<PromptTemplate>,
}

impl DictionaryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a word.
    #[must_use]
    pub fn word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    /// Add a prompt template.
    #[must_use]
    pub fn prompt(mut self, template: PromptTemplate) -> Self {
        self.prompts.push(template);
        self
    }

    /// Validate and index the catalog.
    ///
    /// Fails when IDs repeat, when a word or template references an unknown
    /// part, when a word's text differs from its composed parts, or when a
    /// template has no word at or below its own level that satisfies it.
    /// Words with no parts or empty text and templates requiring no parts
    /// are rejected, so an empty selection never matches anything.
    pub fn build(self) -> Result<Dictionary> {
        let mut part_index = FxHashMap::default();
        for (i, part) in self.parts.iter().enumerate() {
            if part_index.insert(part.id, i).is_some() {
                return Err(BattleError::DuplicatePart(part.id));
            }
        }

        let mut dict = Dictionary {
            parts: self.parts,
            part_index,
            words: Vec::with_capacity(self.words.len()),
            word_index: FxHashMap::default(),
            text_index: FxHashMap::default(),
            prompts: Vec::with_capacity(self.prompts.len()),
        };

        for word in self.words {
            if word.parts.is_empty() || word.text.is_empty() {
                return Err(BattleError::EmptyWord(word.id));
            }
            if let Some(&missing) = word.parts.iter().find(|p| dict.part(**p).is_none()) {
                return Err(BattleError::UnknownPart(missing));
            }
            let composed = dict.build_word_from_parts(&word.parts);
            if composed != word.text {
                return Err(BattleError::WordTextMismatch {
                    id: word.id,
                    text: word.text,
                    composed,
                });
            }
            let i = dict.words.len();
            if dict.word_index.insert(word.id, i).is_some()
                || dict.text_index.contains_key(&word.text)
            {
                return Err(BattleError::DuplicateWord(word.id));
            }
            dict.text_index.insert(word.text.clone(), i);
            dict.words.push(word);
        }

        for mut template in self.prompts {
            let mut seen = FxHashSet::default();
            template.requires_parts.retain(|p| seen.insert(*p));
            if template.requires_parts.is_empty() {
                return Err(BattleError::EmptyPromptTemplate {
                    level: template.level,
                });
            }

            if let Some(&missing) = template
                .requires_parts
                .iter()
                .find(|p| dict.part(**p).is_none())
            {
                return Err(BattleError::UnknownPart(missing));
            }
            if template.description.is_empty() {
                template.description = dict.describe(&template.requires_parts);
            }
            let satisfiable = dict.words.iter().any(|w| {
                w.vocab_level <= template.level && w.contains_all(&template.requires_parts)
            });
            if !satisfiable {
                return Err(BattleError::UnsatisfiablePrompt {
                    prompt: template.description,
                });
            }
            dict.prompts.push(template);
        }

        Ok(dict)
    }
}
