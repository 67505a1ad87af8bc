//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar file (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file (.g4 text, or .json)")
}

/// Directory walked for `.g4` files (positional).
pub fn input_dir_arg() -> Arg {
    Arg::new("input_dir")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory searched recursively for .g4 files")
}

/// Report directory (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("OUT")
        .default_value("results")
        .value_parser(value_parser!(PathBuf))
        .help("Directory receiving the report files")
}

/// Size gate before cycle enumeration (--max-nonterminals).
pub fn max_non_terminals_arg() -> Arg {
    Arg::new("max_non_terminals")
        .long("max-nonterminals")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Skip cycle analysis for grammars with more nonterminals [default: 70]")
}

/// Cross-check with the exhaustive tagging search (--brute-force).
pub fn brute_force_arg() -> Arg {
    Arg::new("brute_force")
        .long("brute-force")
        .action(ArgAction::SetTrue)
        .help("Compare the tagging against an exhaustive search")
}

/// Keep conflicting pairs in the pair table (--keep-contradictions).
pub fn keep_contradictions_arg() -> Arg {
    Arg::new("keep_contradictions")
        .long("keep-contradictions")
        .action(ArgAction::SetTrue)
        .help("Keep pairs that conflict with the committed tagging")
}

/// Skip the simple-form rewrite (--no-simplify).
pub fn no_simplify_arg() -> Arg {
    Arg::new("no_simplify")
        .long("no-simplify")
        .action(ArgAction::SetTrue)
        .help("Analyze without extracting long call/return spans")
}

/// Serialized report instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the report as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
