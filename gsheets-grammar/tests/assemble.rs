//! End-to-end assembly tests against fixture fragment directories

use gsheets_grammar::{Assembler, GrammarDocument, GrammarError, GrammarMetadata, OutcomeAction};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn assembles_all_fixture_categories() {
    let assembler = Assembler::new(fixture_path("syntax"), GrammarMetadata::default());
    let (doc, report) = assembler.assemble().unwrap();

    let keys: Vec<_> = doc.repository.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["functions", "strings", "errors", "constants", "operators"]
    );

    // one include per repository key, same order, no duplicates
    let include_keys: Vec<_> = doc.patterns.iter().map(|i| i.key()).collect();
    assert_eq!(include_keys, keys);

    // functions come out sorted: A.VERAGE before IF before MIN
    let functions = &doc.repository["functions"].patterns;
    assert_eq!(functions.len(), 5);
    assert_eq!(
        functions[0].pattern.as_deref(),
        Some("(A\\.VERAGE(?=\\())")
    );
    assert_eq!(functions[1].pattern.as_deref(), Some("(IF(?=\\())"));

    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.rule_count(), 5 + 1 + 1 + 2 + 3);
}

#[test]
fn assembly_is_idempotent() {
    let assembler = Assembler::new(fixture_path("syntax"), GrammarMetadata::default());
    let (first, _) = assembler.assemble().unwrap();
    let (second, _) = assembler.assemble().unwrap();
    assert_eq!(
        first.to_json_string().unwrap(),
        second.to_json_string().unwrap()
    );
}

#[test]
fn missing_rule_set_fragments_are_skipped() {
    let assembler = Assembler::new(fixture_path("partial"), GrammarMetadata::default());
    let (doc, report) = assembler.assemble().unwrap();

    let keys: Vec<_> = doc.repository.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["functions"]);

    let skipped = report
        .entries
        .iter()
        .filter(|e| e.action == OutcomeAction::Skipped)
        .count();
    assert_eq!(skipped, 4);
}

#[test]
fn base_grammar_categories_are_carried_over() {
    let assembler = Assembler::new(fixture_path("partial"), GrammarMetadata::default())
        .with_base_grammar(fixture_path("base").join("gsheets.tmLanguage.json"));
    let (doc, _) = assembler.assemble().unwrap();

    // comments came from the base and is untouched; functions was regenerated
    let keys: Vec<_> = doc.repository.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["comments", "functions"]);
    assert_eq!(
        doc.repository["comments"].patterns[0].pattern.as_deref(),
        Some("//.*$")
    );
    let functions = &doc.repository["functions"].patterns;
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].pattern.as_deref(), Some("(COUNT(?=\\())"));

    // includes regenerated over the merged key set
    let include_keys: Vec<_> = doc.patterns.iter().map(|i| i.key()).collect();
    assert_eq!(include_keys, keys);
}

#[test]
fn configured_but_missing_base_falls_back_to_scratch() {
    let assembler = Assembler::new(fixture_path("partial"), GrammarMetadata::default())
        .with_base_grammar(fixture_path("base").join("no-such-grammar.json"));
    let (doc, _) = assembler.assemble().unwrap();
    assert_eq!(doc.repository.len(), 1);
    assert_eq!(doc.name, "gsheets");
}

#[test]
fn empty_function_list_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.txt"), "\n\n").unwrap();
    let output = dir.path().join("gsheets.tmLanguage.json");

    let assembler = Assembler::new(dir.path(), GrammarMetadata::default());
    let err = assembler.assemble_to(&output).unwrap_err();
    assert!(matches!(err, GrammarError::EmptyNameList { .. }));
    assert!(!output.exists());
}

#[test]
fn malformed_rule_set_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.txt"), "SUM\n").unwrap();
    fs::write(dir.path().join("strings.json"), "{\"patterns\": []}").unwrap();

    let assembler = Assembler::new(dir.path(), GrammarMetadata::default());
    let err = assembler.assemble().unwrap_err();
    assert!(matches!(err, GrammarError::MalformedFragment { .. }));
}

#[test]
fn written_grammar_matches_the_expected_layout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.txt"), "SUM\nMIN\n").unwrap();
    fs::write(
        dir.path().join("constants.json"),
        "[{\"name\": \"constant.language.boolean.gsheets\", \"match\": \"\\\\b(TRUE|FALSE)\\\\b\"}]",
    )
    .unwrap();

    let assembler = Assembler::new(dir.path(), GrammarMetadata::default());
    let (doc, _) = assembler.assemble().unwrap();

    insta::assert_snapshot!(doc.to_json_string().unwrap(), @r###"
{
    "$schema": "https://raw.githubusercontent.com/martinring/tmlanguage/master/tmlanguage.json",
    "name": "gsheets",
    "scopeName": "source.gsheets",
    "patterns": [
        {
            "include": "#functions"
        },
        {
            "include": "#constants"
        }
    ],
    "repository": {
        "functions": {
            "patterns": [
                {
                    "name": "entity.name.function.gsheets",
                    "match": "(MIN(?=\\())"
                },
                {
                    "name": "entity.name.function.gsheets",
                    "match": "(SUM(?=\\())"
                }
            ]
        },
        "constants": {
            "patterns": [
                {
                    "name": "constant.language.boolean.gsheets",
                    "match": "\\b(TRUE|FALSE)\\b"
                }
            ]
        }
    }
}
"###);
}

#[test]
fn write_overwrites_an_existing_grammar() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.txt"), "SUM\n").unwrap();
    let output = dir.path().join("gsheets.tmLanguage.json");
    fs::write(&output, "stale contents").unwrap();

    let assembler = Assembler::new(dir.path(), GrammarMetadata::default());
    assembler.assemble_to(&output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let doc = GrammarDocument::from_json_str(&written).unwrap();
    assert_eq!(doc.repository["functions"].patterns.len(), 1);
}
