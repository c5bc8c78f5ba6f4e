use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use lexitype::format::PLACEHOLDER;
use lexitype::lexicon::Lexicon;
use lexitype::pipeline::QueryPipeline;
use lexitype::resolver::LexicalResolver;

fn write_fixture(dir: &Path) {
    fs::write(dir.join("index.noun"), "good n 1 0 1 0 00000101\n").unwrap();
    fs::write(dir.join("data.noun"), "00000101 09 n 01 good 0 000 | benefit\n").unwrap();
    fs::write(dir.join("index.verb"), "run v 1 0 1 0 00000200\n").unwrap();
    fs::write(dir.join("data.verb"), "00000200 29 v 01 run 0 000 | move fast\n").unwrap();
    fs::write(
        dir.join("index.adj"),
        "good a 1 0 1 0 00000001\nwell a 1 1 ! 1 0 00000001\nill a 1 1 ! 1 0 00000002\n",
    )
    .unwrap();
    fs::write(
        dir.join("data.adj"),
        "00000001 00 a 02 good 0 well 0 001 ! 00000002 a 0201 | having desirable qualities; \"a good day\"\n\
         00000002 00 a 01 ill 0 000 | bad\n",
    )
    .unwrap();
    fs::write(dir.join("index.adv"), "quickly r 1 0 1 0 00000300\n").unwrap();
    fs::write(
        dir.join("data.adv"),
        "00000300 02 r 01 quickly 0 000 | with speed\n",
    )
    .unwrap();
}

fn fixture_pipeline(dir: &Path) -> QueryPipeline {
    let lexicon = Arc::new(Lexicon::load(dir).unwrap());
    QueryPipeline::new(LexicalResolver::new(lexicon))
}

#[test]
fn test_empty_query_yields_placeholder() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let pipeline = fixture_pipeline(dir.path());

    assert_eq!(pipeline.document_for(""), PLACEHOLDER);
    assert_eq!(pipeline.document_for(""), "...");
}

#[test]
fn test_unknown_word_yields_not_found_document() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let pipeline = fixture_pipeline(dir.path());

    assert_eq!(pipeline.document_for("zzzqx"), "\"zzzqx\" not found :/");
}

#[test]
fn test_end_to_end_document_bytes() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let pipeline = fixture_pipeline(dir.path());

    let expected = "**good** (noun): benefit\n\n\n---\n\
                    **good** (adj): having desirable qualities\n\n\
                    **Examples:**\n\
                    - a good day\n\
                    \n**Synonyms:**\n\
                    - well\n\
                    \n**Antonyms:**\n\
                    - ill\n\
                    ---\n\n";
    assert_eq!(pipeline.document_for("good"), expected);
}

#[test]
fn test_repeated_queries_are_identical() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let pipeline = fixture_pipeline(dir.path());

    assert_eq!(pipeline.document_for("good"), pipeline.document_for("good"));
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let pipeline = Arc::new(fixture_pipeline(dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = Arc::clone(&pipeline);
            std::thread::spawn(move || p.document_for("good"))
        })
        .collect();

    let docs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(docs.windows(2).all(|w| w[0] == w[1]));
}
