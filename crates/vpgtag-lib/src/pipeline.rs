//! Staged analysis driver.
//!
//! ```text
//! Grammar ──tag──▶ TaggedGrammar ──validate──▶ Analysis
//! ```
//!
//! `tag` removes immediate left recursion, runs the two tagging rounds and
//! rewrites into simple form. `validate` enumerates dependency cycles (when
//! the grammar is small enough) and judges each of them.

use std::fmt;

use serde::Serialize;

use crate::analyze::{DepGraph, is_cycle_valid, is_valid};
use crate::grammar::{Grammar, NodeId};
use crate::oracle::{Tagging, brute_force_tagging};
use crate::report::Report;

/// Largest reachable nonterminal count for which cycles are enumerated.
pub const DEFAULT_MAX_NON_TERMINALS: usize = 70;

/// Analysis settings.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Size gate before cycle enumeration.
    pub max_non_terminals: usize,
    /// Cross-check the tagging against the exhaustive search.
    pub brute_force: bool,
    /// Drop conflicting pairs from the pair table while tagging.
    pub remove_contradictions: bool,
    /// Rewrite into simple form before cycle analysis.
    pub simplify: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_non_terminals: DEFAULT_MAX_NON_TERMINALS,
            brute_force: false,
            remove_contradictions: true,
            simplify: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_max_non_terminals(mut self, max: usize) -> Self {
        self.max_non_terminals = max;
        self
    }

    pub fn with_brute_force(mut self, value: bool) -> Self {
        self.brute_force = value;
        self
    }

    pub fn with_remove_contradictions(mut self, value: bool) -> Self {
        self.remove_contradictions = value;
        self
    }

    pub fn with_simplify(mut self, value: bool) -> Self {
        self.simplify = value;
        self
    }
}

/// Grammar-level outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Vpg,
    NotVpg,
    /// Cycle enumeration skipped by the size gate.
    TooLarge,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Vpg => "VPG",
            Verdict::NotVpg => "not a VPG",
            Verdict::TooLarge => "too large",
        })
    }
}

/// One enumerated cycle and whether it passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleVerdict {
    pub vertices: Vec<NodeId>,
    pub valid: bool,
}

/// Exhaustive-search tagging next to the heuristic one.
#[derive(Clone, Debug)]
pub struct OracleComparison {
    pub tagging: Tagging,
    pub agrees: bool,
}

pub struct GrammarAnalyzer {
    config: AnalysisConfig,
}

impl GrammarAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn tag(&self, mut grammar: Grammar) -> TaggedGrammar {
        let had_left_recursion = grammar.is_left_recursive();
        if had_left_recursion {
            grammar.remove_left_recursion();
        }

        grammar.tag(self.config.remove_contradictions);
        if self.config.simplify {
            grammar.to_simple_form();
        }

        TaggedGrammar {
            grammar,
            had_left_recursion,
            config: self.config.clone(),
        }
    }

    /// `tag` followed by `validate`.
    pub fn analyze(&self, grammar: Grammar) -> Analysis {
        self.tag(grammar).validate()
    }
}

/// A grammar after left-recursion removal, tagging and simplification.
pub struct TaggedGrammar {
    grammar: Grammar,
    had_left_recursion: bool,
    config: AnalysisConfig,
}

impl TaggedGrammar {
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn had_left_recursion(&self) -> bool {
        self.had_left_recursion
    }

    pub fn validate(self) -> Analysis {
        let grammar = self.grammar;
        let oracle = self.config.brute_force.then(|| compare_with_oracle(&grammar));

        let (verdict, cycles) = if grammar.non_terminal_count() > self.config.max_non_terminals {
            (Verdict::TooLarge, Vec::new())
        } else {
            let graph = DepGraph::build(&grammar);
            let cycles = graph.enumerate_cycles();
            let verdict = if is_valid(&grammar, &graph, &cycles) {
                Verdict::Vpg
            } else {
                Verdict::NotVpg
            };
            let verdicts = cycles
                .iter()
                .map(|cycle| CycleVerdict {
                    vertices: cycle.vertices().to_vec(),
                    valid: is_cycle_valid(&grammar, &cycle.edges(&graph)),
                })
                .collect();
            (verdict, verdicts)
        };

        tracing::info!(
            grammar = grammar.name().unwrap_or("<anonymous>"),
            non_terminals = grammar.non_terminal_count(),
            call = grammar.call().len(),
            ret = grammar.ret().len(),
            cycles = cycles.len(),
            left_recursive = self.had_left_recursion,
            %verdict,
            "analyzed grammar"
        );

        Analysis {
            grammar,
            had_left_recursion: self.had_left_recursion,
            verdict,
            cycles,
            oracle,
        }
    }
}

fn compare_with_oracle(grammar: &Grammar) -> OracleComparison {
    let tagging = brute_force_tagging(grammar);
    let agrees = tagging.agrees_with(grammar);
    if !agrees {
        tracing::warn!(
            grammar = grammar.name().unwrap_or("<anonymous>"),
            heuristic_call = grammar.call().len(),
            oracle_call = tagging.call.len(),
            "brute-force tagging differs from heuristic tagging"
        );
    }
    OracleComparison { tagging, agrees }
}

/// Final result for one grammar.
pub struct Analysis {
    grammar: Grammar,
    pub had_left_recursion: bool,
    pub verdict: Verdict,
    /// Empty when the size gate skipped enumeration.
    pub cycles: Vec<CycleVerdict>,
    pub oracle: Option<OracleComparison>,
}

impl Analysis {
    /// The rewritten grammar with its tagging.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn is_vpg(&self) -> bool {
        self.verdict == Verdict::Vpg
    }

    /// Whether at least one terminal was tagged call.
    pub fn is_tagged(&self) -> bool {
        !self.grammar.call().is_empty()
    }

    pub fn report(&self) -> Report {
        Report::from_analysis(self)
    }
}
