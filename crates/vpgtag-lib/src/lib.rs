//! vpgtag: classify context-free grammars as Visibly Pushdown Grammars.
//!
//! # Example
//!
//! ```
//! use vpgtag_lib::{AnalysisConfig, GrammarAnalyzer, parse_grammar};
//!
//! let raw = parse_grammar("grammar Parens; s : '(' s ')' | ;").unwrap();
//! let grammar = vpgtag_lib::Grammar::from_raw(&raw).unwrap();
//! let analysis = GrammarAnalyzer::new(AnalysisConfig::default())
//!     .tag(grammar)
//!     .validate();
//!
//! assert!(analysis.is_vpg());
//! ```
//!
//! The pipeline, pass by pass:
//! - `grammar` - symbol arena, left-recursion removal, pair harvesting,
//!   precedence tagging, tagging repair, simple-form rewriting, printing
//! - `analyze` - dependency graph, cycle enumeration, cycle validity
//! - `oracle` - exhaustive well-matched tagging search for cross-checks
//! - `parser` - grammar-definition text front end
//! - `pipeline` - staged driver and configuration
//! - `report` - serializable results

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod grammar;
pub mod oracle;
pub mod parser;
pub mod pipeline;
pub mod report;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod report_tests;

pub use grammar::{
    Alternative, Grammar, GrammarPrinter, Node, NodeId, NodeKind, Occurrence, RawGrammar,
    RawOccurrence, Suffix, TerminalClass,
};
pub use parser::parse_grammar;
pub use pipeline::{
    Analysis, AnalysisConfig, CycleVerdict, DEFAULT_MAX_NON_TERMINALS, GrammarAnalyzer,
    OracleComparison, TaggedGrammar, Verdict,
};
pub use report::Report;

/// Errors that can occur while ingesting a grammar.
///
/// Every variant is local to one grammar: batch drivers skip the grammar
/// and continue with the next one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No start rule could be determined.
    #[error("no parser rules found in grammar `{grammar}`")]
    NoRules { grammar: String },

    /// A rule body contains an embedded action or semantic predicate.
    #[error("rule `{rule}` contains an embedded action `{text}`")]
    ActionBlock { rule: String, text: String },

    /// An alternative references a name that was never declared.
    #[error("unknown symbol `{name}`")]
    UnknownSymbol { name: String },

    /// The grammar-definition text could not be read.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("invalid grammar JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for grammar ingestion.
pub type Result<T> = std::result::Result<T, Error>;
