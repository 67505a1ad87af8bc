//! Call/return tagging.
//!
//! Three passes, run as harvest → tag → repair → tag:
//! - [`Grammar::harvest_pairs`] collects candidate `(call, return)` pairs
//! - [`Grammar::tag_by_precedence`] commits pairs most-frequent first
//! - [`Grammar::remove_non_matching_tagging`] demotes unbalanced terminals

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use super::{Alternative, Grammar, NodeId};

/// Which side of a pair a terminal sits on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Role {
    Call,
    Return,
}

impl Grammar {
    /// Collect candidate pairs from every reachable alternative.
    ///
    /// Recomputes the reachable symbols, then resets the pair multiset and
    /// the plain set. A terminal with a repetition suffix, or with no partner
    /// in an alternative, becomes plain.
    pub fn harvest_pairs(&mut self) {
        self.refresh_symbols();
        let mut pairs = Vec::new();
        let mut plain = IndexSet::new();

        for nt in self.reachable_non_terminals() {
            for alt in self.alternatives(nt) {
                self.harvest_alternative(alt, &mut pairs, &mut plain);
            }
        }

        tracing::debug!(
            pairs = pairs.len(),
            plain = plain.len(),
            "harvested candidate pairs"
        );
        self.pairs = pairs;
        self.plain = plain;
    }

    fn harvest_alternative(
        &self,
        alt: &Alternative,
        pairs: &mut Vec<(NodeId, NodeId)>,
        plain: &mut IndexSet<NodeId>,
    ) {
        let occurrences = alt.occurrences();
        let mut paired = HashSet::new();

        for (i, c) in occurrences.iter().enumerate() {
            if !self.is_terminal(c.node) {
                continue;
            }

            let mut found = false;
            if c.suffix.is_none() {
                for r in occurrences[i + 1..].iter().rev() {
                    if self.is_terminal(r.node) && r.suffix.is_none() && r.node != c.node {
                        pairs.push((c.node, r.node));
                        found = true;
                        paired.insert(c.node);
                        paired.insert(r.node);
                    }
                }
            } else {
                plain.insert(c.node);
            }

            if !found && !paired.contains(&c.node) {
                plain.insert(c.node);
            }
        }
    }

    /// Greedy tagging: commit pairs in descending frequency.
    ///
    /// Equal frequencies keep first-harvest order. A pair is skipped when
    /// both sides are the same terminal, either side is plain, or either
    /// side already holds the opposite role. With `remove_contradictions`,
    /// skipped pairs are deleted from the multiset.
    pub fn tag_by_precedence(&mut self, remove_contradictions: bool) {
        self.call.clear();
        self.ret.clear();

        let mut counts: IndexMap<(NodeId, NodeId), usize> = IndexMap::new();
        for &pair in &self.pairs {
            *counts.entry(pair).or_default() += 1;
        }
        let mut ranked: Vec<_> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let mut rejected = HashSet::new();
        for ((c, r), _) in ranked {
            if self.contradicts(c, r) {
                rejected.insert((c, r));
                continue;
            }
            self.call.insert(c);
            self.ret.insert(r);
        }

        if remove_contradictions {
            self.pairs.retain(|pair| !rejected.contains(pair));
        }

        tracing::debug!(
            call = self.call.len(),
            ret = self.ret.len(),
            rejected = rejected.len(),
            "tagged by precedence"
        );
    }

    fn contradicts(&self, c: NodeId, r: NodeId) -> bool {
        c == r
            || self.plain.contains(&c)
            || self.plain.contains(&r)
            || self.ret.contains(&c)
            || self.call.contains(&r)
    }

    /// Demote tagged terminals that outnumber their partner in some alternative.
    ///
    /// Only suffix-free occurrences are counted. Demoted terminals join the
    /// plain set and leave `call`/`ret`; rerun [`tag_by_precedence`] after.
    ///
    /// [`tag_by_precedence`]: Grammar::tag_by_precedence
    pub fn remove_non_matching_tagging(&mut self) {
        let mut demoted = IndexSet::new();

        for nt in self.reachable_non_terminals() {
            for alt in self.alternatives(nt) {
                let mut counts: IndexMap<NodeId, usize> = IndexMap::new();
                for occ in alt {
                    if self.is_terminal(occ.node) && occ.suffix.is_none() {
                        *counts.entry(occ.node).or_default() += 1;
                    }
                }

                for (&t, &count) in &counts {
                    let role = if self.call.contains(&t) {
                        Role::Call
                    } else if self.ret.contains(&t) {
                        Role::Return
                    } else {
                        continue;
                    };
                    let partner_count = self
                        .partner(t, role)
                        .and_then(|p| counts.get(&p).copied())
                        .unwrap_or(0);
                    if count > partner_count {
                        demoted.insert(t);
                    }
                }
            }
        }

        for t in &demoted {
            self.call.shift_remove(t);
            self.ret.shift_remove(t);
        }
        tracing::debug!(demoted = demoted.len(), "removed non-matching tagging");
        self.plain.extend(demoted);
    }

    /// The first pair in the pair table with `t` on the given side.
    pub(crate) fn partner(&self, t: NodeId, role: Role) -> Option<NodeId> {
        self.pairs.iter().find_map(|&(c, r)| match role {
            Role::Call if c == t => Some(r),
            Role::Return if r == t => Some(c),
            _ => None,
        })
    }

    /// Distinct pairs in first-harvest order.
    pub fn distinct_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let unique: IndexSet<(NodeId, NodeId)> = self.pairs.iter().copied().collect();
        unique.into_iter().collect()
    }

    /// Run the two-round tagging: tag, repair, tag again.
    pub fn tag(&mut self, remove_contradictions: bool) {
        self.harvest_pairs();
        self.tag_by_precedence(remove_contradictions);
        self.remove_non_matching_tagging();
        self.tag_by_precedence(remove_contradictions);
    }
}
