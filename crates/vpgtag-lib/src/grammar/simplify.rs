//! Single-gap rewriting.
//!
//! After this pass at most one symbol separates a call occurrence from its
//! matching return occurrence. Longer interiors are moved into synthesized
//! nonterminals named after their contents (`_L_a_b^STAR`).

use indexmap::{IndexMap, IndexSet};

use super::tagging::Role;
use super::{Alternative, Grammar, NodeId, NodeKind, Occurrence};

impl Grammar {
    /// Rewrite the grammar into simple form. No-op without call terminals.
    ///
    /// Returns the synthesized nonterminals.
    pub fn to_simple_form(&mut self) -> Vec<NodeId> {
        if self.call.is_empty() {
            return Vec::new();
        }

        let mut worklist: IndexSet<NodeId> = self.reachable_non_terminals().into_iter().collect();
        // Synthesized nonterminal to the span it was created for.
        let mut created: IndexMap<NodeId, Vec<Occurrence>> = IndexMap::new();
        let mut next = 0;

        while let Some(&nt) = worklist.get_index(next) {
            next += 1;
            let mut rewritten = IndexSet::new();
            for alt in self.take_alternatives(nt) {
                rewritten.insert(self.simplify_alternative(alt, &mut created));
            }
            self.set_alternatives(nt, rewritten);

            // Interiors can hold further call/return spans.
            worklist.extend(created.keys().copied());
        }

        self.refresh_symbols();
        tracing::debug!(
            synthesized = created.len(),
            non_terminals = self.non_terminal_count(),
            "converted to simple form"
        );
        created.into_keys().collect()
    }

    fn simplify_alternative(
        &mut self,
        alt: Alternative,
        created: &mut IndexMap<NodeId, Vec<Occurrence>>,
    ) -> Alternative {
        let mut occurrences = alt.into_vec();
        let mut i = 0;

        while i < occurrences.len() {
            let c = occurrences[i].node;
            if self.call.contains(&c)
                && let Some(r) = self.partner(c, Role::Call)
                && let Some(j) = matching_return(&occurrences, i, r)
                && j - i > 2
            {
                let interior: Vec<Occurrence> = occurrences.drain(i + 1..j).collect();
                let span = self.synthesize(interior, created);
                occurrences.insert(i + 1, Occurrence::bare(span));
            }
            i += 1;
        }

        Alternative::new(occurrences)
    }

    /// Nonterminal whose rule is exactly `interior`.
    ///
    /// Names join the interior symbol names, so different spans can collide;
    /// a colliding name gets primes appended until it is free or names the
    /// same span.
    fn synthesize(
        &mut self,
        interior: Vec<Occurrence>,
        created: &mut IndexMap<NodeId, Vec<Occurrence>>,
    ) -> NodeId {
        let mut name = String::from("_L");
        for occ in &interior {
            name.push('_');
            name.push_str(self.symbol_name(occ.node));
            if !occ.suffix.is_none() {
                name.push('^');
                name.push_str(occ.suffix.tag());
            }
        }

        loop {
            let Some(id) = self.find(&name, NodeKind::NonTerminal) else {
                let id = self.intern_node(&name, NodeKind::NonTerminal);
                self.add_alternative(id, Alternative::new(interior.clone()));
                created.insert(id, interior);
                return id;
            };
            if self.is_span_rule(id, &interior, created) {
                return id;
            }
            name.push('\'');
        }
    }

    /// Whether `id` was built for `interior`, or already has it as its only rule.
    ///
    /// Synthesized rules are compared by their original span, since the
    /// worklist may have rewritten their body since.
    fn is_span_rule(
        &self,
        id: NodeId,
        interior: &[Occurrence],
        created: &IndexMap<NodeId, Vec<Occurrence>>,
    ) -> bool {
        if let Some(span) = created.get(&id) {
            return span.as_slice() == interior;
        }
        let mut alternatives = self.alternatives(id);
        matches!(
            (alternatives.next(), alternatives.next()),
            (Some(alt), None) if alt.occurrences() == interior
        )
    }
}

/// Position of the return occurrence that balances the call at `i`.
///
/// Nested occurrences of the same call terminal push the match further right.
fn matching_return(occurrences: &[Occurrence], i: usize, ret: NodeId) -> Option<usize> {
    let call = occurrences[i].node;
    let mut depth = 0usize;
    for (k, occ) in occurrences.iter().enumerate().skip(i + 1) {
        if occ.node == call {
            depth += 1;
        } else if occ.node == ret {
            if depth == 0 {
                return Some(k);
            }
            depth -= 1;
        }
    }
    None
}
