//! Per-turn prompt selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BattleError, BattleRng, Difficulty, Result};
use crate::lexicon::{Dictionary, PartList, PromptTemplate};

/// Identity of one issued prompt. Strictly increasing per selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PromptId(pub u64);

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prompt({})", self.0)
    }
}

/// The challenge for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub description: String,
    pub time_limit_sec: u32,
    /// A valid answer's parts must include every one of these.
    pub requires_parts: PartList,
    pub difficulty: Difficulty,
}

/// Picks prompts from a dictionary's templates.
///
/// Construction fails if any difficulty has no templates, so picking itself
/// is infallible.
#[derive(Clone, Debug)]
pub struct PromptSelector {
    pools: [Vec<PromptTemplate>; 5],
    next_id: u64,
}

impl PromptSelector {
    /// Index the dictionary's templates by difficulty.
    pub fn new(dictionary: &Dictionary) -> Result<Self> {
        let mut pools: [Vec<PromptTemplate>; 5] = Default::default();

        for (difficulty, pool) in Difficulty::all().zip(pools.iter_mut()) {
            pool.extend(dictionary.templates_for_level(difficulty.level()).cloned());
            if pool.is_empty() {
                return Err(BattleError::EmptyPromptPool(difficulty.level()));
            }
        }

        Ok(Self { pools, next_id: 1 })
    }

    /// Number of templates available at a difficulty.
    #[must_use]
    pub fn pool_size(&self, difficulty: Difficulty) -> usize {
        self.pool(difficulty).len()
    }

    /// Pick a template uniformly and stamp it with a fresh identity.
    pub fn pick_prompt(
        &mut self,
        difficulty: Difficulty,
        time_limit_sec: u32,
        rng: &mut BattleRng,
    ) -> Prompt {
        let pool = &self.pools[difficulty.index()];
        let template = &pool[rng.gen_index(pool.len())];

        let id = PromptId(self.next_id);
        self.next_id += 1;

        debug!(%id, %difficulty, description = %template.description, "prompt selected");

        Prompt {
            id,
            description: template.description.clone(),
            time_limit_sec,
            requires_parts: template.requires_parts.clone(),
            difficulty,
        }
    }

    fn pool(&self, difficulty: Difficulty) -> &[PromptTemplate] {
        &self.pools[difficulty.index()]
    }
}
