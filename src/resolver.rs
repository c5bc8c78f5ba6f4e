use std::sync::Arc;

use crate::lexicon::Lexicon;
use crate::types::Sense;

/// Resolves a word against the lexical database.
///
/// The database handle is injected at construction so tests can run against
/// fixture data, and cloning the resolver shares the same loaded database.
#[derive(Clone)]
pub struct LexicalResolver {
    lexicon: Arc<Lexicon>,
}

impl LexicalResolver {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        LexicalResolver { lexicon }
    }

    /// Returns the senses the database associates with `word`, in database
    /// order. An unknown word resolves to an empty list; there is no
    /// per-query error path. The word is passed through untouched — any
    /// normalization is the database's own.
    pub fn resolve(&self, word: &str) -> Vec<Sense> {
        self.lexicon.senses(word)
    }

    /// Returns the underlying database handle.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
