//! Immediate left-recursion detection and removal.
//!
//! Only direct recursion (`A : A α`) is handled. Recursion through a chain
//! of other nonterminals is neither detected nor rewritten.

use indexmap::IndexSet;

use super::{Alternative, Grammar, NodeId, NodeKind, Occurrence};

impl Grammar {
    /// Whether a reachable nonterminal has an alternative starting with itself.
    pub fn is_left_recursive(&self) -> bool {
        self.reachable_non_terminals()
            .into_iter()
            .any(|nt| self.is_immediately_left_recursive(nt))
    }

    pub fn is_immediately_left_recursive(&self, nt: NodeId) -> bool {
        self.alternatives(nt)
            .any(|alt| alt.first().is_some_and(|occ| occ.node == nt))
    }

    /// Rewrite every nonterminal of the arena into right-recursive form.
    ///
    /// `A : A α | β` becomes `A : β A'` and `A' : α A' | ε`. Without any `β`,
    /// `A` becomes `A : A'`. Returns the introduced nonterminals.
    pub fn remove_left_recursion(&mut self) -> Vec<NodeId> {
        let candidates: Vec<NodeId> = self.all_non_terminals().collect();
        let created: Vec<NodeId> = candidates
            .into_iter()
            .filter_map(|nt| self.remove_immediate_left_recursion(nt))
            .collect();

        self.refresh_symbols();
        tracing::debug!(
            introduced = created.len(),
            non_terminals = self.non_terminal_count(),
            "removed left recursion"
        );
        created
    }

    fn remove_immediate_left_recursion(&mut self, nt: NodeId) -> Option<NodeId> {
        if !self.is_immediately_left_recursive(nt) {
            return None;
        }

        let mut alphas = Vec::new();
        let mut betas = Vec::new();
        for alt in self.take_alternatives(nt) {
            if alt.first().is_some_and(|occ| occ.node == nt) {
                alphas.push(alt.iter().skip(1).copied().collect::<Alternative>());
            } else {
                betas.push(alt);
            }
        }

        let base = self.symbol_name(nt).to_string();
        let prime = self.fresh_non_terminal(&base);
        let tail = Occurrence::bare(prime);

        let mut head_rules = IndexSet::new();
        if betas.is_empty() {
            head_rules.insert(Alternative::new(vec![tail]));
        }
        for mut beta in betas {
            beta.push(tail);
            head_rules.insert(beta);
        }

        let mut prime_rules = IndexSet::new();
        for mut alpha in alphas {
            alpha.push(tail);
            prime_rules.insert(alpha);
        }
        prime_rules.insert(Alternative::empty());

        self.set_alternatives(nt, head_rules);
        self.set_alternatives(prime, prime_rules);
        Some(prime)
    }

    /// Create a nonterminal named `base'`, adding primes until the name is free.
    fn fresh_non_terminal(&mut self, base: &str) -> NodeId {
        let mut name = format!("{base}'");
        while self.find(&name, NodeKind::NonTerminal).is_some() {
            name.push('\'');
        }
        self.intern_node(&name, NodeKind::NonTerminal)
    }
}
