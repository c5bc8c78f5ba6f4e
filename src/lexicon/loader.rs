use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{DictError, Result};
use crate::types::PartOfSpeech;

use super::{AntonymPtr, Lexicon, SynsetRecord, LOOKUP_ORDER};

/// File name suffix for each part of speech (`index.noun`, `data.noun`,
/// `noun.exc`, and so on).
fn file_suffix(pos: PartOfSpeech) -> &'static str {
    match pos {
        PartOfSpeech::Noun => "noun",
        PartOfSpeech::Verb => "verb",
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "adj",
        PartOfSpeech::Adverb => "adv",
    }
}

/// Loads the full database from a WNDB directory.
///
/// Index and data files for all four parts of speech are required; the
/// morphology exception lists (`*.exc`) are optional. Any missing required
/// file or malformed record aborts the load.
pub(crate) fn load_dir(dir: &Path) -> Result<Lexicon> {
    if !dir.is_dir() {
        return Err(DictError::Database {
            message: "database directory not found".to_string(),
            path: dir.display().to_string(),
        });
    }

    let mut lexicon = Lexicon {
        index: HashMap::new(),
        synsets: HashMap::new(),
        exceptions: HashMap::new(),
    };

    for pos in LOOKUP_ORDER {
        let suffix = file_suffix(pos);

        let index_path = dir.join(format!("index.{}", suffix));
        parse_index(&index_path, pos, &mut lexicon)?;

        let data_path = dir.join(format!("data.{}", suffix));
        parse_data(&data_path, pos, &mut lexicon)?;

        let exc_path = dir.join(format!("{}.exc", suffix));
        if exc_path.exists() {
            parse_exceptions(&exc_path, pos, &mut lexicon)?;
        }

        debug!(pos = pos.as_str(), "loaded part-of-speech files");
    }

    info!(
        lemmas = lexicon.index.len(),
        synsets = lexicon.synsets.len(),
        dir = %dir.display(),
        "lexical database loaded"
    );
    Ok(lexicon)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DictError::Database {
        message: format!("failed to read database file: {}", e),
        path: path.display().to_string(),
    })
}

fn parse_error(path: &Path, line: u32, message: impl Into<String>) -> DictError {
    DictError::Parse {
        message: message.into(),
        path: path.display().to_string(),
        line: Some(line),
    }
}

/// Parses an index file (`lemma pos synset_cnt p_cnt [ptr...] sense_cnt
/// tagsense_cnt offset...`), preserving offset order — WNDB lists a lemma's
/// synsets in frequency order, which is the relevance order queries rely on.
fn parse_index(path: &Path, pos: PartOfSpeech, lexicon: &mut Lexicon) -> Result<()> {
    let contents = read_file(path)?;

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx as u32 + 1;
        // License header lines start with two spaces.
        if line.starts_with(' ') || line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let lemma = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing lemma"))?;
        let _pos_sym = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing pos"))?;
        let synset_cnt: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| parse_error(path, line_no, "bad synset count"))?;
        let p_cnt: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| parse_error(path, line_no, "bad pointer count"))?;
        for _ in 0..p_cnt {
            fields
                .next()
                .ok_or_else(|| parse_error(path, line_no, "truncated pointer symbols"))?;
        }
        let _sense_cnt = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing sense count"))?;
        let _tagsense_cnt = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing tagsense count"))?;

        let mut offsets = Vec::with_capacity(synset_cnt);
        for _ in 0..synset_cnt {
            let offset: u64 = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| parse_error(path, line_no, "truncated offset list"))?;
            offsets.push(offset);
        }

        lexicon.index.insert((lemma.to_string(), pos), offsets);
    }

    Ok(())
}

/// Parses a data file (`offset lex_filenum ss_type w_cnt word lex_id ...
/// p_cnt [ptr...] ... | gloss`). Words keep database order; the gloss is
/// split into a definition and quoted example sentences; lemma-level antonym
/// pointers (`!`) are retained for resolution at query time.
fn parse_data(path: &Path, file_pos: PartOfSpeech, lexicon: &mut Lexicon) -> Result<()> {
    let contents = read_file(path)?;

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx as u32 + 1;
        if line.starts_with(' ') || line.is_empty() {
            continue;
        }

        let (columns, gloss) = line
            .split_once(" | ")
            .ok_or_else(|| parse_error(path, line_no, "missing gloss separator"))?;

        let mut fields = columns.split_whitespace();
        let offset: u64 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| parse_error(path, line_no, "bad synset offset"))?;
        let _lex_filenum = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing lex filenum"))?;
        let ss_type = fields
            .next()
            .and_then(|f| f.chars().next())
            .and_then(PartOfSpeech::from_symbol)
            .ok_or_else(|| parse_error(path, line_no, "bad synset type"))?;

        let w_cnt = fields
            .next()
            .and_then(|f| usize::from_str_radix(f, 16).ok())
            .ok_or_else(|| parse_error(path, line_no, "bad word count"))?;
        let mut words = Vec::with_capacity(w_cnt);
        for _ in 0..w_cnt {
            let word = fields
                .next()
                .ok_or_else(|| parse_error(path, line_no, "truncated word list"))?;
            let _lex_id = fields
                .next()
                .ok_or_else(|| parse_error(path, line_no, "truncated word list"))?;
            words.push(decode_word(word));
        }

        let p_cnt: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| parse_error(path, line_no, "bad pointer count"))?;
        let mut antonyms = Vec::new();
        for _ in 0..p_cnt {
            let symbol = fields
                .next()
                .ok_or_else(|| parse_error(path, line_no, "truncated pointer"))?;
            let target_offset: u64 = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| parse_error(path, line_no, "bad pointer offset"))?;
            let target_pos = fields
                .next()
                .and_then(|f| f.chars().next())
                .and_then(PartOfSpeech::from_symbol)
                .ok_or_else(|| parse_error(path, line_no, "bad pointer pos"))?;
            let st = fields
                .next()
                .ok_or_else(|| parse_error(path, line_no, "missing pointer source/target"))?;
            // Length is checked in bytes; reject non-ASCII before slicing.
            if st.len() != 4 || !st.is_ascii() {
                return Err(parse_error(path, line_no, "bad pointer source/target"));
            }
            let source = usize::from_str_radix(&st[..2], 16)
                .map_err(|_| parse_error(path, line_no, "bad pointer source"))?;
            let target_word = usize::from_str_radix(&st[2..], 16)
                .map_err(|_| parse_error(path, line_no, "bad pointer target"))?;

            // Lemma-level antonym pointers have nonzero word numbers;
            // everything else (hypernyms, similar-to, ...) is ignored.
            if symbol == "!" && source != 0 && target_word != 0 {
                antonyms.push(AntonymPtr {
                    source,
                    target_pos,
                    target_offset,
                    target_word,
                });
            }
        }

        let (definition, examples) = split_gloss(gloss);

        lexicon.synsets.insert(
            (file_pos, offset),
            SynsetRecord {
                pos: ss_type,
                words,
                definition,
                examples,
                antonyms,
            },
        );
    }

    Ok(())
}

/// Parses a morphology exception list: each line is an inflected form
/// followed by one or more base forms.
fn parse_exceptions(path: &Path, pos: PartOfSpeech, lexicon: &mut Lexicon) -> Result<()> {
    let contents = read_file(path)?;

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx as u32 + 1;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let inflected = fields
            .next()
            .ok_or_else(|| parse_error(path, line_no, "missing inflected form"))?;
        let bases: Vec<String> = fields.map(str::to_string).collect();
        if bases.is_empty() {
            return Err(parse_error(path, line_no, "missing base form"));
        }
        lexicon
            .exceptions
            .insert((inflected.to_string(), pos), bases);
    }

    Ok(())
}

/// Decodes a database word: underscores become spaces and the adjective
/// syntactic-position marker (`(a)`, `(p)`, `(ip)`) is stripped.
fn decode_word(word: &str) -> String {
    let word = word
        .strip_suffix("(a)")
        .or_else(|| word.strip_suffix("(p)"))
        .or_else(|| word.strip_suffix("(ip)"))
        .unwrap_or(word);
    word.replace('_', " ")
}

/// Splits a gloss into a definition and example sentences. Examples are the
/// `;`-separated segments wrapped in double quotes; the remaining segments
/// form the definition.
fn split_gloss(gloss: &str) -> (String, Vec<String>) {
    let mut definition_parts = Vec::new();
    let mut examples = Vec::new();

    for part in gloss.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.starts_with('"') {
            examples.push(part.trim_matches('"').to_string());
        } else {
            definition_parts.push(part);
        }
    }

    (definition_parts.join("; "), examples)
}
