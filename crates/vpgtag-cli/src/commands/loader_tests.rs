use std::fs;

use super::loader::load_grammar;

#[test]
fn text_grammar_named_by_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Parens.g4");
    fs::write(&path, "grammar Nested;\ns : '(' s ')' | ;\n").unwrap();

    let grammar = load_grammar(&path).unwrap();

    assert_eq!(grammar.name(), Some("Nested"));
    assert_eq!(grammar.symbol_name(grammar.start()), "s");
}

#[test]
fn headerless_grammar_named_by_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Parens.g4");
    fs::write(&path, "s : '(' s ')' | ;\n").unwrap();

    let grammar = load_grammar(&path).unwrap();

    assert_eq!(grammar.name(), Some("Parens"));
}

#[test]
fn json_grammar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parens.json");
    let json = r#"{
        "name": "Parens",
        "start": "s",
        "terminals": ["'('", "')'"],
        "non_terminals": ["s"],
        "rules": {
            "s": [
                [
                    { "name": "'('", "kind": "terminal", "suffix": "none" },
                    { "name": "s", "kind": "non_terminal", "suffix": "none" },
                    { "name": "')'", "kind": "terminal", "suffix": "none" }
                ],
                []
            ]
        }
    }"#;
    fs::write(&path, json).unwrap();

    let grammar = load_grammar(&path).unwrap();

    assert_eq!(grammar.name(), Some("Parens"));
    assert_eq!(grammar.alternatives(grammar.start()).count(), 2);
}

#[test]
fn errors_carry_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Action.g4");
    fs::write(&path, "grammar Action;\ns : 'x' {act();} ;\n").unwrap();

    let err = load_grammar(&path).unwrap_err();

    assert!(err.contains("Action.g4"));
    assert!(err.contains("embedded action"));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_grammar(&dir.path().join("nope.g4")).unwrap_err();

    assert!(err.starts_with("failed to read"));
}
