//! Serializable analysis results with names resolved.

use serde::Serialize;

use crate::grammar::{Grammar, NodeId};
use crate::pipeline::{Analysis, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub grammar: Option<String>,
    pub start: String,
    pub verdict: Verdict,
    pub had_left_recursion: bool,
    pub non_terminals: usize,
    pub call: Vec<String>,
    pub ret: Vec<String>,
    pub plain: Vec<String>,
    /// Distinct candidate pairs in harvest order.
    pub pairs: Vec<(String, String)>,
    pub cycles: Vec<CycleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle: Option<OracleReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub non_terminals: Vec<String>,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OracleReport {
    pub call: Vec<String>,
    pub ret: Vec<String>,
    pub agrees: bool,
}

impl Report {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let grammar = analysis.grammar();
        let name = |id: NodeId| grammar.symbol_name(id).to_string();

        Self {
            grammar: grammar.name().map(str::to_string),
            start: name(grammar.start()),
            verdict: analysis.verdict,
            had_left_recursion: analysis.had_left_recursion,
            non_terminals: grammar.non_terminal_count(),
            call: sorted_names(grammar, grammar.call().iter().copied()),
            ret: sorted_names(grammar, grammar.ret().iter().copied()),
            plain: sorted_names(grammar, grammar.plain_terminals()),
            pairs: grammar
                .distinct_pairs()
                .into_iter()
                .map(|(c, r)| (name(c), name(r)))
                .collect(),
            cycles: analysis
                .cycles
                .iter()
                .map(|cycle| CycleReport {
                    non_terminals: cycle.vertices.iter().map(|&v| name(v)).collect(),
                    valid: cycle.valid,
                })
                .collect(),
            oracle: analysis.oracle.as_ref().map(|oracle| OracleReport {
                call: sorted_names(grammar, oracle.tagging.call.iter().copied()),
                ret: sorted_names(grammar, oracle.tagging.ret.iter().copied()),
                agrees: oracle.agrees,
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Partition, pairs and verdict, one item per line.
    pub fn render_info(&self) -> String {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(c, r)| format!("({c}, {r})"))
            .collect();
        let verdict = match self.verdict {
            Verdict::Vpg => "Valid",
            Verdict::NotVpg => "Invalid",
            Verdict::TooLarge => "Too large",
        };
        format!(
            "call\t{}\nret \t{}\npairs: \t{}\n{verdict}\n",
            list(&self.call),
            list(&self.ret),
            list(&pairs)
        )
    }

    /// Oracle partition and whether it matches; `None` without an oracle run.
    pub fn render_oracle(&self) -> Option<String> {
        let oracle = self.oracle.as_ref()?;
        Some(format!(
            "call\t{}\nret \t{}\n{}\n",
            list(&oracle.call),
            list(&oracle.ret),
            if oracle.agrees { "Same" } else { "Different" }
        ))
    }
}

fn sorted_names(grammar: &Grammar, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    let mut names: Vec<String> = ids
        .into_iter()
        .map(|id| grammar.symbol_name(id).to_string())
        .collect();
    names.sort();
    names
}

fn list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
