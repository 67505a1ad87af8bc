//! Cycle validity.
//!
//! A cycle is compatible with the call/return discipline when either
//! - some edge is bracketed: its prefix ends with a call terminal and its
//!   suffix ends with a return terminal, or
//! - every edge is tail recursive (empty suffix) and some prefix can produce
//!   a terminal, so the cycle cannot spin on the empty string.

use super::cycles::Cycle;
use super::graph::{DepGraph, Edge};
use crate::grammar::{Grammar, NodeId, reachable_from};

/// Whether every cycle of the graph is valid.
pub fn is_valid(grammar: &Grammar, graph: &DepGraph, cycles: &[Cycle]) -> bool {
    cycles
        .iter()
        .all(|cycle| is_cycle_valid(grammar, &cycle.edges(graph)))
}

pub fn is_cycle_valid(grammar: &Grammar, edges: &[&Edge]) -> bool {
    if edges.iter().any(|edge| is_bracketed(grammar, edge)) {
        return true;
    }

    if edges.iter().any(|edge| !edge.suffix.is_empty()) {
        return false;
    }

    edges
        .iter()
        .flat_map(|edge| &edge.prefix)
        .any(|&symbol| grammar.is_terminal(symbol) || can_derive_nonempty(grammar, symbol))
}

fn is_bracketed(grammar: &Grammar, edge: &Edge) -> bool {
    match (edge.prefix.last(), edge.suffix.last()) {
        (Some(before), Some(after)) => {
            grammar.call().contains(before) && grammar.ret().contains(after)
        }
        _ => false,
    }
}

/// Whether any terminal is reachable from `nt`.
///
/// An over-approximation of non-emptiness: a terminal behind an unproductive
/// rule still counts.
pub fn can_derive_nonempty(grammar: &Grammar, nt: NodeId) -> bool {
    reachable_from(grammar, nt)
        .into_iter()
        .flat_map(|n| grammar.alternatives(n))
        .flatten()
        .any(|occ| grammar.is_terminal(occ.node))
}
