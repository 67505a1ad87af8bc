//! Command builders for the CLI.
//!
//! Every command accepts the analysis flags, so the same grammar can be
//! checked, dumped and batch-processed under one configuration.

use clap::Command;

use super::args::*;

/// Add the flags that map onto `AnalysisConfig`.
fn with_analysis_args(cmd: Command) -> Command {
    cmd.arg(max_non_terminals_arg())
        .arg(brute_force_arg())
        .arg(keep_contradictions_arg())
        .arg(no_simplify_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("vpgtag")
        .about("Classify context-free grammars as Visibly Pushdown Grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(batch_command())
}

/// Classify one grammar.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Classify one grammar")
        .after_help(
            r#"EXAMPLES:
  vpgtag check Json.g4                     # prints VPG, not a VPG or too large
  vpgtag check grammar.json                # pre-resolved JSON grammar
  vpgtag check Java.g4 --max-nonterminals 200"#,
        )
        .arg(grammar_path_arg())
        .arg(color_arg());

    with_analysis_args(cmd)
}

/// Show the tagged grammar and its analysis.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the tagged grammar, partition, pairs and cycles")
        .after_help(
            r#"EXAMPLES:
  vpgtag dump Json.g4                      # tagged grammar and analysis
  vpgtag dump Json.g4 --json               # serialized report
  vpgtag dump Json.g4 --no-simplify        # before span extraction"#,
        )
        .arg(grammar_path_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_analysis_args(cmd)
}

/// Analyze a directory tree of grammars.
pub fn batch_command() -> Command {
    let cmd = Command::new("batch")
        .about("Analyze every .g4 grammar under a directory and write reports")
        .after_help(
            r#"EXAMPLES:
  vpgtag batch grammars-v4                 # reports under ./results
  vpgtag batch grammars-v4 -o out          # reports under ./out
  vpgtag batch grammars-v4 --brute-force   # also write *_tagged_all.txt"#,
        )
        .arg(input_dir_arg())
        .arg(output_dir_arg());

    with_analysis_args(cmd)
}
