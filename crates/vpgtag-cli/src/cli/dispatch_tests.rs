//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Analysis flags map onto `AnalysisConfig`
//! 2. Defaults match the library defaults
//! 3. Required positionals are enforced

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{batch_command, check_command, dump_command};

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "Json.g4"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.grammar_path, PathBuf::from("Json.g4"));
    assert_eq!(params.config.max_non_terminals, 70);
    assert!(!params.config.brute_force);
    assert!(params.config.remove_contradictions);
    assert!(params.config.simplify);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_analysis_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "Json.g4",
            "--max-nonterminals",
            "200",
            "--brute-force",
            "--keep-contradictions",
            "--no-simplify",
            "--color",
            "never",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.config.max_non_terminals, 200);
    assert!(params.config.brute_force);
    assert!(!params.config.remove_contradictions);
    assert!(!params.config.simplify);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn check_requires_grammar() {
    let result = check_command().try_get_matches_from(["check"]);

    assert!(result.is_err());
}

#[test]
fn max_nonterminals_must_be_a_number() {
    let result =
        check_command().try_get_matches_from(["check", "Json.g4", "--max-nonterminals", "many"]);

    assert!(result.is_err());
}

#[test]
fn dump_json_flag() {
    let m = dump_command()
        .try_get_matches_from(["dump", "Json.g4", "--json", "--color", "always"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Always);
    assert!(params.color.should_colorize());
}

#[test]
fn batch_default_output() {
    let m = batch_command()
        .try_get_matches_from(["batch", "grammars-v4"])
        .unwrap();
    let params = BatchParams::from_matches(&m);

    assert_eq!(params.input_dir, PathBuf::from("grammars-v4"));
    assert_eq!(params.output_dir, PathBuf::from("results"));
}

#[test]
fn batch_output_and_analysis_flags() {
    let m = batch_command()
        .try_get_matches_from(["batch", "grammars-v4", "-o", "out", "--brute-force"])
        .unwrap();
    let params = BatchParams::from_matches(&m);

    assert_eq!(params.output_dir, PathBuf::from("out"));
    assert!(params.config.brute_force);
}

#[test]
fn batch_rejects_color() {
    let result = batch_command().try_get_matches_from(["batch", "dir", "--color", "always"]);

    assert!(result.is_err());
}

#[test]
fn help_lists_analysis_flags() {
    let help = dump_command().render_help().to_string();

    assert!(help.contains("--max-nonterminals"));
    assert!(help.contains("--brute-force"));
    assert!(help.contains("--keep-contradictions"));
    assert!(help.contains("--no-simplify"));
}
