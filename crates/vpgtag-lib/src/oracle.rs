//! Exhaustive well-matched tagging search.
//!
//! Tries every ordered pair of distinct terminals and keeps a pair when the
//! whole grammar stays well matched under the extended tagging. Quadratic in
//! the terminal count times the grammar size; meant for cross-checking the
//! frequency heuristic on small grammars.

use indexmap::IndexSet;

use crate::grammar::{Grammar, NodeId};

/// A call/return assignment found by the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tagging {
    pub call: IndexSet<NodeId>,
    pub ret: IndexSet<NodeId>,
}

impl Tagging {
    /// Set equality with the grammar's own tagging.
    pub fn agrees_with(&self, grammar: &Grammar) -> bool {
        &self.call == grammar.call() && &self.ret == grammar.ret()
    }
}

/// Greedily extend an empty tagging with every pair that keeps the grammar
/// well matched, in terminal discovery order.
pub fn brute_force_tagging(grammar: &Grammar) -> Tagging {
    let mut tagging = Tagging::default();
    let terminals = grammar.terminals();

    for &c in terminals {
        for &r in terminals {
            if c == r || tagging.ret.contains(&c) || tagging.call.contains(&r) {
                continue;
            }

            let mut call = tagging.call.clone();
            call.insert(c);
            let mut ret = tagging.ret.clone();
            ret.insert(r);
            if is_well_matched(grammar, &call, &ret) {
                tagging.call = call;
                tagging.ret = ret;
            }
        }
    }

    tracing::debug!(
        call = tagging.call.len(),
        ret = tagging.ret.len(),
        "brute-force tagging"
    );
    tagging
}

/// Whether every reachable alternative is balanced under `call`/`ret`.
///
/// Each alternative is checked on its own stack: a return must pop a call
/// of the same alternative, and nothing may stay open at its end. A tagged
/// occurrence with a repetition suffix fails outright, whichever side it is
/// tagged on: `call` and `ret` never share a terminal here, so requiring
/// membership in both would let suffixed delimiters through.
pub fn is_well_matched(grammar: &Grammar, call: &IndexSet<NodeId>, ret: &IndexSet<NodeId>) -> bool {
    for nt in grammar.reachable_non_terminals() {
        for alt in grammar.alternatives(nt) {
            let mut depth = 0usize;
            for occ in alt {
                let is_call = call.contains(&occ.node);
                let is_ret = ret.contains(&occ.node);
                if (is_call || is_ret) && !occ.suffix.is_none() {
                    return false;
                }

                if is_call {
                    depth += 1;
                } else if is_ret {
                    let Some(open) = depth.checked_sub(1) else {
                        return false;
                    };
                    depth = open;
                }
            }
            if depth != 0 {
                return false;
            }
        }
    }
    true
}
