//! Built-in English catalog.
//!
//! A small Latin-root vocabulary: 17 prefixes, 9 roots, 8 suffixes, and the
//! words they compose, graded 1 (everyday) to 5 (rare). Every prompt template
//! has at least one answer at or below its own level.

use super::dictionary::{Dictionary, DictionaryBuilder};
use super::part::{Part, PartId, PartKind};
use super::word::{PromptTemplate, Word, WordId};
use crate::core::Result;

pub mod parts {
    use super::PartId;

    // Prefixes
    pub const RE: PartId = PartId::new(1);
    pub const EX: PartId = PartId::new(2);
    pub const IM: PartId = PartId::new(3);
    pub const TRANS: PartId = PartId::new(4);
    pub const PRE: PartId = PartId::new(5);
    pub const IN: PartId = PartId::new(6);
    pub const CON: PartId = PartId::new(7);
    pub const INTER: PartId = PartId::new(8);
    pub const DIS: PartId = PartId::new(9);
    pub const SUB: PartId = PartId::new(10);
    pub const DE: PartId = PartId::new(11);
    pub const PRO: PartId = PartId::new(12);
    pub const E: PartId = PartId::new(13);
    pub const CONTRA: PartId = PartId::new(14);
    pub const INTRO: PartId = PartId::new(15);
    pub const RETRO: PartId = PartId::new(16);
    pub const UN: PartId = PartId::new(17);

    // Roots
    pub const PORT: PartId = PartId::new(20);
    pub const JECT: PartId = PartId::new(21);
    pub const DICT: PartId = PartId::new(22);
    pub const STRUCT: PartId = PartId::new(23);
    pub const SPECT: PartId = PartId::new(24);
    pub const RUPT: PartId = PartId::new(25);
    pub const FORM: PartId = PartId::new(26);
    pub const TRACT: PartId = PartId::new(27);
    pub const PRESS: PartId = PartId::new(28);

    // Suffixes
    pub const ABLE: PartId = PartId::new(40);
    pub const ION: PartId = PartId::new(41);
    pub const OR: PartId = PartId::new(42);
    pub const IVE: PartId = PartId::new(43);
    pub const URE: PartId = PartId::new(44);
    pub const ATION: PartId = PartId::new(45);
    pub const IBLE: PartId = PartId::new(46);
    pub const ER: PartId = PartId::new(47);
}

use parts::*;

const PARTS: &[(PartId, PartKind, &str, &str)] = &[
    (RE, PartKind::Prefix, "re", "again, back"),
    (EX, PartKind::Prefix, "ex", "out"),
    (IM, PartKind::Prefix, "im", "in, into"),
    (TRANS, PartKind::Prefix, "trans", "across"),
    (PRE, PartKind::Prefix, "pre", "before"),
    (IN, PartKind::Prefix, "in", "in, not"),
    (CON, PartKind::Prefix, "con", "together"),
    (INTER, PartKind::Prefix, "inter", "between"),
    (DIS, PartKind::Prefix, "dis", "apart"),
    (SUB, PartKind::Prefix, "sub", "under"),
    (DE, PartKind::Prefix, "de", "down, away"),
    (PRO, PartKind::Prefix, "pro", "forward"),
    (E, PartKind::Prefix, "e", "out of"),
    (CONTRA, PartKind::Prefix, "contra", "against"),
    (INTRO, PartKind::Prefix, "intro", "inward"),
    (RETRO, PartKind::Prefix, "retro", "backward"),
    (UN, PartKind::Prefix, "un", "not"),
    (PORT, PartKind::Root, "port", "carry"),
    (JECT, PartKind::Root, "ject", "throw"),
    (DICT, PartKind::Root, "dict", "say"),
    (STRUCT, PartKind::Root, "struct", "build"),
    (SPECT, PartKind::Root, "spect", "look"),
    (RUPT, PartKind::Root, "rupt", "break"),
    (FORM, PartKind::Root, "form", "shape"),
    (TRACT, PartKind::Root, "tract", "pull"),
    (PRESS, PartKind::Root, "press", "push"),
    (ABLE, PartKind::Suffix, "able", "can be"),
    (ION, PartKind::Suffix, "ion", "act of"),
    (OR, PartKind::Suffix, "or", "one who"),
    (IVE, PartKind::Suffix, "ive", "tending to"),
    (URE, PartKind::Suffix, "ure", "result of"),
    (ATION, PartKind::Suffix, "ation", "process of"),
    (IBLE, PartKind::Suffix, "ible", "able to be"),
    (ER, PartKind::Suffix, "er", "one who"),
];

const WORDS: &[(&str, &[PartId], u8, &str)] = &[
    // Level 1
    ("report", &[RE, PORT], 1, "verb"),
    ("export", &[EX, PORT], 1, "verb"),
    ("import", &[IM, PORT], 1, "verb"),
    ("eject", &[E, JECT], 1, "verb"),
    ("predict", &[PRE, DICT], 1, "verb"),
    ("inspect", &[IN, SPECT], 1, "verb"),
    ("erupt", &[E, RUPT], 1, "verb"),
    ("reform", &[RE, FORM], 1, "verb"),
    ("extract", &[EX, TRACT], 1, "verb"),
    ("express", &[EX, PRESS], 1, "verb"),
    ("reporter", &[RE, PORT, ER], 1, "noun"),
    // Level 2
    ("portable", &[PORT, ABLE], 2, "adjective"),
    ("transport", &[TRANS, PORT], 2, "verb"),
    ("deport", &[DE, PORT], 2, "verb"),
    ("reject", &[RE, JECT], 2, "verb"),
    ("inject", &[IN, JECT], 2, "verb"),
    ("project", &[PRO, JECT], 2, "noun"),
    ("construct", &[CON, STRUCT], 2, "verb"),
    ("respect", &[RE, SPECT], 2, "verb"),
    ("inform", &[IN, FORM], 2, "verb"),
    ("transform", &[TRANS, FORM], 2, "verb"),
    ("subtract", &[SUB, TRACT], 2, "verb"),
    ("distract", &[DIS, TRACT], 2, "verb"),
    ("contract", &[CON, TRACT], 2, "noun"),
    ("impress", &[IM, PRESS], 2, "verb"),
    ("depress", &[DE, PRESS], 2, "verb"),
    ("interrupt", &[INTER, RUPT], 2, "verb"),
    ("disrupt", &[DIS, RUPT], 2, "verb"),
    ("pressure", &[PRESS, URE], 2, "noun"),
    ("tractor", &[TRACT, OR], 2, "noun"),
    // Level 3
    ("prediction", &[PRE, DICT, ION], 3, "noun"),
    ("inspection", &[IN, SPECT, ION], 3, "noun"),
    ("construction", &[CON, STRUCT, ION], 3, "noun"),
    ("instruct", &[IN, STRUCT], 3, "verb"),
    ("destruct", &[DE, STRUCT], 3, "verb"),
    ("expression", &[EX, PRESS, ION], 3, "noun"),
    ("impressive", &[IM, PRESS, IVE], 3, "adjective"),
    ("injection", &[IN, JECT, ION], 3, "noun"),
    ("projector", &[PRO, JECT, OR], 3, "noun"),
    ("inspector", &[IN, SPECT, OR], 3, "noun"),
    ("interruption", &[INTER, RUPT, ION], 3, "noun"),
    ("extraction", &[EX, TRACT, ION], 3, "noun"),
    ("formation", &[FORM, ATION], 3, "noun"),
    // Level 4
    ("transportation", &[TRANS, PORT, ATION], 4, "noun"),
    ("transformation", &[TRANS, FORM, ATION], 4, "noun"),
    ("predictable", &[PRE, DICT, ABLE], 4, "adjective"),
    ("respectable", &[RE, SPECT, ABLE], 4, "adjective"),
    ("constructive", &[CON, STRUCT, IVE], 4, "adjective"),
    ("destructive", &[DE, STRUCT, IVE], 4, "adjective"),
    ("instructor", &[IN, STRUCT, OR], 4, "noun"),
    ("disruptive", &[DIS, RUPT, IVE], 4, "adjective"),
    ("contradict", &[CONTRA, DICT], 4, "verb"),
    // Level 5
    ("contradiction", &[CONTRA, DICT, ION], 5, "noun"),
    ("introspection", &[INTRO, SPECT, ION], 5, "noun"),
    ("retrospective", &[RETRO, SPECT, IVE], 5, "adjective"),
    ("unpredictable", &[UN, PRE, DICT, ABLE], 5, "adjective"),
    ("deportation", &[DE, PORT, ATION], 5, "noun"),
    ("inexpressible", &[IN, EX, PRESS, IBLE], 5, "adjective"),
    ("indestructible", &[IN, DE, STRUCT, IBLE], 5, "adjective"),
];

const PROMPTS: &[(u8, &[PartId])] = &[
    (1, &[PORT]),
    (1, &[JECT]),
    (1, &[DICT]),
    (1, &[SPECT]),
    (1, &[RUPT]),
    (1, &[FORM]),
    (1, &[TRACT]),
    (1, &[PRESS]),
    (1, &[RE]),
    (1, &[EX]),
    (2, &[TRANS]),
    (2, &[CON]),
    (2, &[INTER]),
    (2, &[DIS]),
    (2, &[SUB]),
    (2, &[STRUCT]),
    (2, &[ABLE]),
    (2, &[URE]),
    (2, &[OR]),
    (2, &[EX, PORT]),
    (2, &[RE, JECT]),
    (3, &[ION]),
    (3, &[IVE]),
    (3, &[PRO]),
    (3, &[DE]),
    (3, &[ATION]),
    (3, &[IN, SPECT]),
    (3, &[CON, STRUCT]),
    (3, &[SPECT, OR]),
    (3, &[PRESS, ION]),
    (4, &[TRANS, ATION]),
    (4, &[DICT, ABLE]),
    (4, &[STRUCT, IVE]),
    (4, &[RUPT, IVE]),
    (4, &[CONTRA]),
    (5, &[IBLE]),
    (5, &[RETRO]),
    (5, &[INTRO]),
    (5, &[UN]),
    (5, &[DE, PORT, ATION]),
    (5, &[CONTRA, DICT, ION]),
];

/// Build the built-in catalog.
pub fn standard() -> Result<Dictionary> {
    let mut builder = DictionaryBuilder::new();

    for &(id, kind, text, meaning) in PARTS {
        builder = builder.part(Part::new(id, kind, text, meaning));
    }
    for (i, &(text, parts, level, tag)) in WORDS.iter().enumerate() {
        let id = WordId::new(i as u32 + 1);
        builder = builder.word(Word::new(id, text, parts, level).with_tag(tag));
    }
    for &(level, required) in PROMPTS {
        builder = builder.prompt(PromptTemplate::new(level, required));
    }

    builder.build()
}
