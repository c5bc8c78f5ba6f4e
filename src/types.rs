use serde::{Deserialize, Serialize};

/// Part-of-speech categories used by the WordNet database.
///
/// `AdjectiveSatellite` is WordNet's `s` synset type; it is stored in the
/// adjective data file and displayed with the adjective tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

#[allow(clippy::should_implement_trait)]
impl PartOfSpeech {
    /// Returns the string representation of this part of speech.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::AdjectiveSatellite => "adj_satellite",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Parses a string into a `PartOfSpeech`, returning `None` for
    /// unrecognized values.
    pub fn from_str(s: &str) -> Option<PartOfSpeech> {
        match s {
            "noun" => Some(PartOfSpeech::Noun),
            "verb" => Some(PartOfSpeech::Verb),
            "adj" => Some(PartOfSpeech::Adjective),
            "adj_satellite" => Some(PartOfSpeech::AdjectiveSatellite),
            "adv" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Returns the one-character synset type code used in the database files.
    pub fn symbol(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parses a database synset type code into a `PartOfSpeech`.
    pub fn from_symbol(c: char) -> Option<PartOfSpeech> {
        match c {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' => Some(PartOfSpeech::Adjective),
            's' => Some(PartOfSpeech::AdjectiveSatellite),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Returns the tag shown in formatted output.
    ///
    /// Adjective satellites display as plain adjectives.
    pub fn display_tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }
}

/// A surface form belonging to a sense.
///
/// `antonyms` holds the names of antonym lemmas in other senses, already
/// resolved from the database's cross-reference pointers, in pointer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub name: String,
    pub antonyms: Vec<String>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Lemma {
            name: name.into(),
            antonyms: Vec::new(),
        }
    }
}

/// One distinct meaning of a word (a synset).
///
/// Lemma order is the database's order; the first lemma is the canonical
/// display name for the sense by construction, never by re-sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub lemmas: Vec<Lemma>,
    pub pos: PartOfSpeech,
    pub definition: String,
    pub examples: Vec<String>,
}
