//! End-to-end runs over in-memory JSONL

use doc_types::{DocResult, Document, OutputRecord, Span};
use pretty_assertions::assert_eq;
use quality_taggers::{Tagger, TaggerError, TaggerRegistry};
use std::io::{Cursor, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tagger_cli::{RunConfig, RunSummary, Runner};

const INPUT: &str = r#"{"id":"a","text":"the cat the cat the cat"}
{"id":"b","text":"a\na\nb\n","source":"web"}

{"id":"c","text":""}
"#;

fn run(runner: &Runner, input: &str) -> (anyhow::Result<RunSummary>, Vec<OutputRecord>) {
    let mut output = Vec::new();
    let summary = runner.run(Cursor::new(input), &mut output);
    let records = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (summary, records)
}

/// Single whole-document score stored under `key`
fn score(record: &OutputRecord, key: &str) -> (usize, usize, f64) {
    let spans = &record.attributes[key];
    assert_eq!(spans.len(), 1, "expected one span under {}", key);
    spans[0]
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12, "{} != {}", actual, expected);
}

fn config(taggers: &[&str]) -> RunConfig {
    RunConfig {
        experiment: "test".to_string(),
        taggers: taggers.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_run_writes_one_record_per_document() {
    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(&registry, config(&["gopher_v1"])).unwrap();

    let (summary, records) = run(&runner, INPUT);

    assert_eq!(summary.unwrap(), RunSummary { processed: 3, skipped: 0 });
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let (start, end, bigram) = score(
        &records[0],
        "test__gopher_v1__fraction_of_characters_in_most_common_2grams",
    );
    assert_eq!((start, end), (0, 23));
    assert_close(bigram, 6.0 / 18.0);

    let (_, end, duplicate_lines) =
        score(&records[1], "test__gopher_v1__fraction_of_duplicate_lines");
    assert_eq!(end, 6);
    assert_close(duplicate_lines, 2.0 / 3.0);

    assert_eq!(
        score(&records[2], "test__gopher_v1__character_count"),
        (0, 0, 0.0)
    );
    assert!(!records[2]
        .attributes
        .contains_key("test__gopher_v1__fraction_of_characters_in_most_common_2grams"));
}

#[test]
fn test_whitespace_only_document_is_flagged_incomplete() {
    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(&registry, config(&["gopher_v1"])).unwrap();

    let input = "{\"id\":\"blank\",\"text\":\" \\n \\n\"}\n{\"id\":\"words\",\"text\":\"x\\nx\"}\n";
    let (summary, records) = run(&runner, input);

    assert_eq!(summary.unwrap(), RunSummary { processed: 2, skipped: 0 });
    assert_eq!(score(&records[0], "test__gopher_v1__complete"), (0, 4, 0.0));
    assert_eq!(score(&records[1], "test__gopher_v1__complete"), (0, 3, 1.0));

    // no words: line metrics keep their defaults
    assert_eq!(
        score(&records[0], "test__gopher_v1__fraction_of_duplicate_lines"),
        (0, 4, 0.0)
    );
    assert_eq!(
        score(&records[1], "test__gopher_v1__fraction_of_duplicate_lines"),
        (0, 3, 1.0)
    );
}

#[test]
fn test_malformed_lines_are_skipped() {
    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(&registry, config(&["char_length_v1"])).unwrap();

    let input = "{\"id\":\"ok\",\"text\":\"fine\"}\nnot json\n{\"id\":\"missing text\"}\n";
    let (summary, records) = run(&runner, input);

    assert_eq!(summary.unwrap(), RunSummary { processed: 1, skipped: 2 });
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].attributes["test__char_length_v1__length"], vec![(0, 4, 4.0)]);
}

#[test]
fn test_fail_fast_stops_at_first_bad_line() {
    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(
        &registry,
        RunConfig {
            skip_failed_documents: false,
            ..config(&["char_length_v1"])
        },
    )
    .unwrap();

    let input = "{\"id\":\"ok\",\"text\":\"fine\"}\nnot json\n{\"id\":\"late\",\"text\":\"x\"}\n";
    let (summary, records) = run(&runner, input);

    let err = summary.unwrap_err();
    assert!(err.to_string().starts_with("Line 2:"));
    assert_eq!(records.len(), 1);
}

struct SlowTagger;

impl Tagger for SlowTagger {
    fn name(&self) -> &str {
        "slow_v1"
    }

    fn predict<'a>(&self, doc: &'a Document) -> Result<DocResult<'a>, TaggerError> {
        thread::sleep(Duration::from_millis(25));
        Ok(DocResult::new(doc, vec![Span::new(0, 0, "slow", 1.0)])?)
    }
}

#[test]
fn test_budget_exceeded_is_a_document_failure() {
    let mut registry = TaggerRegistry::with_defaults().unwrap();
    registry.register("slow_v1", Arc::new(SlowTagger)).unwrap();

    let runner = Runner::new(
        &registry,
        RunConfig {
            max_document_ms: Some(1),
            ..config(&["char_length_v1", "slow_v1"])
        },
    )
    .unwrap();

    let doc = Document::new("d", "text");
    let err = runner.tag_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        TaggerError::BudgetExceeded { ref tagger, budget_ms: 1, .. } if tagger == "slow_v1"
    ));

    let (summary, records) = run(&runner, "{\"id\":\"d\",\"text\":\"text\"}\n");
    assert_eq!(summary.unwrap(), RunSummary { processed: 0, skipped: 1 });
    assert!(records.is_empty());
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
experiment = "from_file"
taggers = ["char_length_v1", "gopher_v1"]
excerpt_chars = 40
"#
    )
    .unwrap();

    let config = RunConfig::from_file(file.path()).unwrap();
    assert_eq!(config.experiment, "from_file");

    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(&registry, config).unwrap();
    let (summary, records) = run(&runner, "{\"id\":\"x\",\"text\":\"hi there\"}\n");

    assert_eq!(summary.unwrap().processed, 1);
    assert!(records[0].attributes.contains_key("from_file__char_length_v1__length"));
    assert!(records[0].attributes.contains_key("from_file__gopher_v1__word_count"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = RunConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_output_is_deterministic() {
    let registry = TaggerRegistry::with_defaults().unwrap();
    let runner = Runner::new(&registry, config(&["gopher_v1", "char_length_v1"])).unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    runner.run(Cursor::new(INPUT), &mut first).unwrap();
    runner.run(Cursor::new(INPUT), &mut second).unwrap();
    assert_eq!(first, second);
}
