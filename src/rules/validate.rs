//! Answer validation.

use super::prompt::Prompt;
use crate::lexicon::Word;

/// Whether a looked-up word answers the prompt.
///
/// `None` (nothing submitted, or the composition matched no catalog word)
/// is always false. Otherwise every required part must appear among the
/// word's parts, in any order.
#[must_use]
pub fn validate_against_prompt(word: Option<&Word>, prompt: &Prompt) -> bool {
    word.is_some_and(|w| w.contains_all(&prompt.requires_parts))
}
