use crate::types::PartOfSpeech;

/// Suffix detachment rules from the WordNet morphology algorithm, per part
/// of speech. Each pair is (suffix, replacement), tried in order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
    ("s", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Returns candidate base forms produced by suffix detachment, in rule
/// order. Candidates are not checked against the index here; the caller
/// filters them against the lemmas actually present in the database.
pub(crate) fn detachments(form: &str, pos: PartOfSpeech) -> Vec<String> {
    let rules = match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJ_RULES,
        PartOfSpeech::Adverb => &[],
    };

    let mut candidates = Vec::new();
    for (suffix, replacement) in rules {
        if let Some(stem) = form.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{}{}", stem, replacement);
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}
