//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use vpgtag_lib::{AnalysisConfig, DEFAULT_MAX_NON_TERMINALS};

use super::ColorChoice;
use crate::commands::batch::BatchArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub config: AnalysisConfig,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            config: parse_config(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub grammar_path: PathBuf,
    pub config: AnalysisConfig,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            config: parse_config(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            config: p.config,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct BatchParams {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: AnalysisConfig,
}

impl BatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_dir: m
                .get_one::<PathBuf>("input_dir")
                .cloned()
                .unwrap_or_default(),
            output_dir: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("results")),
            config: parse_config(m),
        }
    }
}

impl From<BatchParams> for BatchArgs {
    fn from(p: BatchParams) -> Self {
        Self {
            input_dir: p.input_dir,
            output_dir: p.output_dir,
            config: p.config,
        }
    }
}

fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_config(m: &ArgMatches) -> AnalysisConfig {
    AnalysisConfig::default()
        .with_max_non_terminals(
            m.get_one::<usize>("max_non_terminals")
                .copied()
                .unwrap_or(DEFAULT_MAX_NON_TERMINALS),
        )
        .with_brute_force(m.get_flag("brute_force"))
        .with_remove_contradictions(!m.get_flag("keep_contradictions"))
        .with_simplify(!m.get_flag("no_simplify"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
