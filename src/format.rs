use crate::types::Sense;

/// Document shown while the query field is empty.
pub const PLACEHOLDER: &str = "...";

/// The fixed document for a word with no senses in the database.
pub fn not_found(word: &str) -> String {
    format!("\"{}\" not found :/", word)
}

/// Markdown assembly over explicit line and block primitives, so block
/// boundaries and ordering stay testable independent of call sites.
struct DocumentBuilder {
    out: String,
}

impl DocumentBuilder {
    fn new() -> Self {
        DocumentBuilder { out: String::new() }
    }

    /// Sense header: bold display name, part-of-speech tag, definition,
    /// followed by a blank line.
    fn header(&mut self, name: &str, tag: &str, definition: &str) {
        self.out
            .push_str(&format!("**{}** ({}): {}\n\n", name, tag, definition));
    }

    /// Bold section label on its own line.
    fn label(&mut self, text: &str) {
        self.out.push_str(&format!("**{}:**\n", text));
    }

    /// One bulleted line.
    fn bullet_line(&mut self, text: &str) {
        self.out.push_str(&format!("- {}\n", text));
    }

    /// Bulleted items joined on single newlines, without a trailing newline.
    fn bullet_items(&mut self, items: &[String]) {
        let lines: Vec<String> = items.iter().map(|i| format!("- {}", i)).collect();
        self.out.push_str(&lines.join("\n"));
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Horizontal rule separating sense blocks.
    fn rule(&mut self) {
        self.out.push_str("---\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Formats the senses of `word` into the result document.
///
/// Pure and deterministic: identical inputs produce byte-identical output,
/// and sense blocks appear exactly in input order. An empty sense list
/// yields the fixed not-found document.
///
/// Per sense block: header, then an Examples section if any examples exist,
/// then — only when the sense has more than one lemma — a Synonyms section
/// listing every lemma whose name differs from the queried word, and an
/// Antonyms section collecting the first antonym of each such lemma that
/// has one. Lemmas without antonyms contribute nothing to the antonym list.
pub fn format_senses(word: &str, senses: &[Sense]) -> String {
    if senses.is_empty() {
        return not_found(word);
    }

    let mut doc = DocumentBuilder::new();
    for sense in senses {
        let Some(head) = sense.lemmas.first() else {
            continue;
        };
        doc.header(&head.name, sense.pos.display_tag(), &sense.definition);

        if !sense.examples.is_empty() {
            doc.label("Examples");
            for example in &sense.examples {
                doc.bullet_line(example);
            }
        }

        if sense.lemmas.len() > 1 {
            let mut synonyms = Vec::new();
            let mut antonyms = Vec::new();

            for lemma in &sense.lemmas {
                if lemma.name != word {
                    synonyms.push(lemma.name.clone());

                    // Only the first antonym per lemma is surfaced.
                    if let Some(first) = lemma.antonyms.first() {
                        antonyms.push(first.clone());
                    }
                }
            }

            if !synonyms.is_empty() {
                doc.newline();
                doc.label("Synonyms");
                doc.bullet_items(&synonyms);
            }

            if !antonyms.is_empty() {
                doc.newline();
                doc.newline();
                doc.label("Antonyms");
                doc.bullet_items(&antonyms);
            }
        }

        doc.newline();
        doc.rule();
    }

    doc.newline();
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Lemma, PartOfSpeech, Sense};

    fn sense(lemmas: &[&str], pos: PartOfSpeech, definition: &str, examples: &[&str]) -> Sense {
        Sense {
            lemmas: lemmas.iter().map(|l| Lemma::new(*l)).collect(),
            pos,
            definition: definition.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_not_found_document() {
        assert_eq!(format_senses("zzzqx", &[]), "\"zzzqx\" not found :/");
    }

    #[test]
    fn test_single_sense_block_shape() {
        let s = sense(&["good"], PartOfSpeech::Adjective, "benefit", &[]);
        let doc = format_senses("good", &[s]);
        assert_eq!(doc, "**good** (adj): benefit\n\n\n---\n\n");
    }

    #[test]
    fn test_synonyms_exclude_queried_word() {
        let s = sense(&["good", "well"], PartOfSpeech::Adjective, "benefit", &[]);
        let doc = format_senses("good", &[s]);
        assert!(doc.contains("**Synonyms:**\n- well"));
        assert!(!doc.contains("- good\n"));
        assert!(!doc.contains("**Antonyms:**"));
        assert!(!doc.contains("**Examples:**"));
    }

    #[test]
    fn test_examples_before_synonyms() {
        let s = sense(
            &["good", "well"],
            PartOfSpeech::Adjective,
            "benefit",
            &["She has a good heart."],
        );
        let doc = format_senses("good", &[s]);
        let examples_at = doc.find("**Examples:**").unwrap();
        let synonyms_at = doc.find("**Synonyms:**").unwrap();
        assert!(examples_at < synonyms_at);
        assert!(doc.contains("- She has a good heart.\n"));
    }

    #[test]
    fn test_first_antonym_only() {
        let mut s = sense(&["good", "well"], PartOfSpeech::Adjective, "benefit", &[]);
        s.lemmas[1].antonyms = vec!["ill".to_string(), "badly".to_string()];
        let doc = format_senses("good", &[s]);
        assert!(doc.contains("**Antonyms:**\n- ill"));
        assert!(!doc.contains("badly"));
    }

    #[test]
    fn test_lemma_without_antonyms_contributes_no_line() {
        let mut s = sense(
            &["big", "large", "great"],
            PartOfSpeech::Adjective,
            "above average in size",
            &[],
        );
        s.lemmas[2].antonyms = vec!["small".to_string()];
        let doc = format_senses("big", &[s]);
        assert!(doc.contains("**Synonyms:**\n- large\n- great"));
        assert!(doc.contains("**Antonyms:**\n- small\n---"));
    }

    #[test]
    fn test_single_lemma_has_no_synonym_sections() {
        let mut s = sense(&["unique"], PartOfSpeech::Adjective, "one of a kind", &[]);
        s.lemmas[0].antonyms = vec!["common".to_string()];
        let doc = format_senses("unique", &[s]);
        assert!(!doc.contains("**Synonyms:**"));
        assert!(!doc.contains("**Antonyms:**"));
    }

    #[test]
    fn test_block_order_follows_input_order() {
        let a = sense(&["alpha"], PartOfSpeech::Noun, "first", &[]);
        let b = sense(&["beta"], PartOfSpeech::Noun, "second", &[]);
        let forward = format_senses("q", &[a.clone(), b.clone()]);
        let reversed = format_senses("q", &[b, a]);
        assert!(forward.find("alpha").unwrap() < forward.find("beta").unwrap());
        assert!(reversed.find("beta").unwrap() < reversed.find("alpha").unwrap());
    }

    #[test]
    fn test_idempotent_output() {
        let s = sense(&["cat", "feline"], PartOfSpeech::Noun, "a small mammal", &["the cat sat"]);
        let first = format_senses("cat", &[s.clone()]);
        let second = format_senses("cat", &[s]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_newline() {
        let s = sense(&["cat"], PartOfSpeech::Noun, "a small mammal", &[]);
        assert!(format_senses("cat", &[s]).ends_with("---\n\n"));
    }
}
