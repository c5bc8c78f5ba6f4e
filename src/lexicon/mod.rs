//! The lexical database: WordNet flat files (WNDB) loaded once into an
//! immutable in-memory structure.
//!
//! The database is read-only after `load` and is shared behind an `Arc`, so
//! any number of concurrent lookups need no synchronization.

mod loader;
mod morphy;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::errors::Result;
use crate::types::{Lemma, PartOfSpeech, Sense};

/// Lookup order across parts of speech, matching the order the original
/// WordNet tools enumerate senses in.
pub const LOOKUP_ORDER: [PartOfSpeech; 4] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
];

/// A lemma-level antonym cross-reference, kept unresolved until a sense is
/// materialized. Word numbers are 1-based per the database format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AntonymPtr {
    pub source: usize,
    pub target_pos: PartOfSpeech,
    pub target_offset: u64,
    pub target_word: usize,
}

/// One parsed synset record from a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SynsetRecord {
    pub pos: PartOfSpeech,
    pub words: Vec<String>,
    pub definition: String,
    pub examples: Vec<String>,
    pub antonyms: Vec<AntonymPtr>,
}

/// Per-part-of-speech database counts, reported by [`Lexicon::stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PosCounts {
    pub lemmas: u64,
    pub synsets: u64,
}

/// Immutable in-memory WordNet database.
///
/// Index entries map a (lemma, part-of-speech) pair to synset offsets in
/// database order — WNDB frequency order, which is the relevance order that
/// lookups must preserve. Synset records are keyed by the data file they
/// live in, with adjective satellites stored under the adjective file.
pub struct Lexicon {
    index: HashMap<(String, PartOfSpeech), Vec<u64>>,
    synsets: HashMap<(PartOfSpeech, u64), SynsetRecord>,
    exceptions: HashMap<(String, PartOfSpeech), Vec<String>>,
}

/// Collapses a synset type onto the data file that stores it.
fn file_pos(pos: PartOfSpeech) -> PartOfSpeech {
    match pos {
        PartOfSpeech::AdjectiveSatellite => PartOfSpeech::Adjective,
        other => other,
    }
}

impl Lexicon {
    /// Loads the database from a WNDB directory.
    ///
    /// This is the one-time startup step; a missing or malformed file fails
    /// the whole load rather than leaving a partially usable database.
    pub fn load(dir: &Path) -> Result<Lexicon> {
        loader::load_dir(dir)
    }

    /// Returns every sense of `word`, in database order: parts of speech in
    /// [`LOOKUP_ORDER`], and within each part of speech the index file's
    /// frequency order. Unknown words yield an empty list, never an error.
    ///
    /// Normalization (case folding, space-to-underscore, morphology) happens
    /// here — callers pass the query string through untouched.
    pub fn senses(&self, word: &str) -> Vec<Sense> {
        let normalized = word.to_lowercase().replace(' ', "_");

        let mut senses = Vec::new();
        for pos in LOOKUP_ORDER {
            let Some(base) = self.base_form(&normalized, pos) else {
                continue;
            };
            if let Some(offsets) = self.index.get(&(base, pos)) {
                for &offset in offsets {
                    if let Some(sense) = self.materialize(pos, offset) {
                        senses.push(sense);
                    }
                }
            }
        }
        senses
    }

    /// Finds the base form of `form` present in the index for `pos`:
    /// the form itself, then the exception list, then suffix detachment.
    fn base_form(&self, form: &str, pos: PartOfSpeech) -> Option<String> {
        if self.index.contains_key(&(form.to_string(), pos)) {
            return Some(form.to_string());
        }

        if let Some(bases) = self.exceptions.get(&(form.to_string(), pos)) {
            for base in bases {
                if self.index.contains_key(&(base.clone(), pos)) {
                    return Some(base.clone());
                }
            }
        }

        for candidate in morphy::detachments(form, pos) {
            if self.index.contains_key(&(candidate.clone(), pos)) {
                return Some(candidate);
            }
        }

        None
    }

    /// Builds a [`Sense`] from a stored synset record, resolving antonym
    /// pointers to target lemma names. Dangling pointers are skipped.
    fn materialize(&self, pos: PartOfSpeech, offset: u64) -> Option<Sense> {
        let record = self.synsets.get(&(file_pos(pos), offset))?;

        let mut lemmas: Vec<Lemma> = record
            .words
            .iter()
            .map(|w| Lemma::new(w.clone()))
            .collect();

        for ptr in &record.antonyms {
            let Some(lemma) = lemmas.get_mut(ptr.source - 1) else {
                continue;
            };
            let key = (file_pos(ptr.target_pos), ptr.target_offset);
            if let Some(target) = self.synsets.get(&key) {
                if let Some(name) = target.words.get(ptr.target_word - 1) {
                    lemma.antonyms.push(name.clone());
                }
            }
        }

        Some(Sense {
            lemmas,
            pos: record.pos,
            definition: record.definition.clone(),
            examples: record.examples.clone(),
        })
    }

    /// Per-part-of-speech lemma and synset counts, in [`LOOKUP_ORDER`].
    /// Adjective satellites count toward the adjective synset total.
    pub fn stats(&self) -> Vec<(PartOfSpeech, PosCounts)> {
        let mut counts: HashMap<PartOfSpeech, PosCounts> = HashMap::new();
        for (_, pos) in self.index.keys() {
            counts.entry(*pos).or_default().lemmas += 1;
        }
        for (pos, _) in self.synsets.keys() {
            counts.entry(*pos).or_default().synsets += 1;
        }

        LOOKUP_ORDER
            .iter()
            .map(|pos| (*pos, counts.remove(pos).unwrap_or_default()))
            .collect()
    }
}
