//! Grammar arena and symbol model.
//!
//! Symbols live in an arena indexed by [`NodeId`]. Alternatives hold ids, never
//! copies, so a symbol mentioned by many alternatives is one node. Occurrence
//! state (the repetition suffix) sits next to the id in [`Occurrence`].
//!
//! Passes are `impl Grammar` blocks split by concern:
//! - `left_recursion` - immediate left-recursion detection and removal
//! - `tagging` - pair harvesting, precedence tagging, tagging repair
//! - `simplify` - single-gap rewriting of call/return spans
//! - `printer` - tagged grammar rendering

mod left_recursion;
mod printer;
mod raw;
mod simplify;
mod tagging;

#[cfg(test)]
mod left_recursion_tests;
#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod simplify_tests;

use std::collections::HashMap;

use indexmap::IndexSet;
use vpgtag_core::{Interner, Symbol};

pub use printer::GrammarPrinter;
pub use raw::{RawGrammar, RawOccurrence};

/// Stable handle of a node in the grammar arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Repetition suffix attached to one occurrence of a symbol.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Suffix {
    #[default]
    None,
    Optional,
    Star,
    Plus,
}

impl Suffix {
    pub fn is_none(self) -> bool {
        self == Suffix::None
    }

    /// Surface syntax of the suffix (`""`, `?`, `*`, `+`).
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::None => "",
            Suffix::Optional => "?",
            Suffix::Star => "*",
            Suffix::Plus => "+",
        }
    }

    /// Upper-case tag used when naming synthesized nonterminals.
    pub fn tag(self) -> &'static str {
        match self {
            Suffix::None => "NONE",
            Suffix::Optional => "OPTIONAL",
            Suffix::Star => "STAR",
            Suffix::Plus => "PLUS",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Terminal,
    NonTerminal,
}

/// Grammar-global classification of a terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminalClass {
    Call,
    Return,
    Plain,
}

/// One symbol of the grammar. Identity is `(name, kind)`.
#[derive(Debug, Clone)]
pub enum Node {
    Terminal {
        name: Symbol,
    },
    NonTerminal {
        name: Symbol,
        rules: IndexSet<Alternative>,
    },
}

impl Node {
    pub fn name(&self) -> Symbol {
        match self {
            Node::Terminal { name } | Node::NonTerminal { name, .. } => *name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Terminal { .. } => NodeKind::Terminal,
            Node::NonTerminal { .. } => NodeKind::NonTerminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal { .. })
    }
}

/// A symbol reference inside an alternative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Occurrence {
    pub node: NodeId,
    pub suffix: Suffix,
}

impl Occurrence {
    pub fn new(node: NodeId, suffix: Suffix) -> Self {
        Self { node, suffix }
    }

    /// Occurrence without a repetition suffix.
    pub fn bare(node: NodeId) -> Self {
        Self::new(node, Suffix::None)
    }
}

/// One right-hand side: an ordered sequence of occurrences.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Alternative(Vec<Occurrence>);

impl Alternative {
    pub fn new(occurrences: Vec<Occurrence>) -> Self {
        Self(occurrences)
    }

    /// The epsilon alternative.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Occurrence> {
        self.0.first()
    }

    pub fn push(&mut self, occurrence: Occurrence) {
        self.0.push(occurrence);
    }

    pub fn into_vec(self) -> Vec<Occurrence> {
        self.0
    }
}

impl FromIterator<Occurrence> for Alternative {
    fn from_iter<I: IntoIterator<Item = Occurrence>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Alternative {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A grammar: the symbol arena, the start symbol, and derived tagging state.
///
/// Derived state (`terminals`, `non_terminals`, `pairs`, `call`, `ret`) is
/// recomputed wholesale by the passes, never patched incrementally.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: Option<String>,
    interner: Interner,
    nodes: Vec<Node>,
    lookup: HashMap<(Symbol, NodeKind), NodeId>,
    start: NodeId,
    /// Nonterminals reachable from `start`, in traversal order.
    non_terminals: IndexSet<NodeId>,
    /// Terminals reachable from `start`, in discovery order.
    terminals: IndexSet<NodeId>,
    /// Candidate `(call, return)` pairs; a multiset, order is harvest order.
    pub(crate) pairs: Vec<(NodeId, NodeId)>,
    /// Terminals that can never be tagged.
    pub(crate) plain: IndexSet<NodeId>,
    pub(crate) call: IndexSet<NodeId>,
    pub(crate) ret: IndexSet<NodeId>,
}

impl Grammar {
    /// Create a grammar holding only its start nonterminal.
    pub fn new(start: &str) -> Self {
        let mut grammar = Self {
            name: None,
            interner: Interner::new(),
            nodes: Vec::new(),
            lookup: HashMap::new(),
            start: NodeId(0),
            non_terminals: IndexSet::new(),
            terminals: IndexSet::new(),
            pairs: Vec::new(),
            plain: IndexSet::new(),
            call: IndexSet::new(),
            ret: IndexSet::new(),
        };
        grammar.start = grammar.intern_node(start, NodeKind::NonTerminal);
        grammar.refresh_symbols();
        grammar
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get or create the node with this name and kind.
    pub fn intern_node(&mut self, name: &str, kind: NodeKind) -> NodeId {
        let sym = self.interner.intern(name);
        if let Some(&id) = self.lookup.get(&(sym, kind)) {
            return id;
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(match kind {
            NodeKind::Terminal => Node::Terminal { name: sym },
            NodeKind::NonTerminal => Node::NonTerminal {
                name: sym,
                rules: IndexSet::new(),
            },
        });
        self.lookup.insert((sym, kind), id);
        id
    }

    /// Find an existing node by name and kind.
    pub fn find(&self, name: &str, kind: NodeKind) -> Option<NodeId> {
        let sym = self.interner.get(name)?;
        self.lookup.get(&(sym, kind)).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn symbol_name(&self, id: NodeId) -> &str {
        self.interner.resolve(self.node(id).name())
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.node(id).is_terminal()
    }

    /// Alternatives of a nonterminal; terminals have none.
    pub fn alternatives(&self, id: NodeId) -> impl Iterator<Item = &Alternative> + '_ {
        let rules = match self.node(id) {
            Node::NonTerminal { rules, .. } => Some(rules),
            Node::Terminal { .. } => None,
        };
        rules.into_iter().flatten()
    }

    /// Add an alternative to a nonterminal. Duplicates collapse.
    pub fn add_alternative(&mut self, id: NodeId, alternative: Alternative) {
        if let Node::NonTerminal { rules, .. } = &mut self.nodes[id.index()] {
            rules.insert(alternative);
        }
    }

    /// Replace the rule set of a nonterminal.
    pub(crate) fn set_alternatives(&mut self, id: NodeId, alternatives: IndexSet<Alternative>) {
        if let Node::NonTerminal { rules, .. } = &mut self.nodes[id.index()] {
            *rules = alternatives;
        }
    }

    /// Move the rule set out of a nonterminal, leaving it empty.
    pub(crate) fn take_alternatives(&mut self, id: NodeId) -> IndexSet<Alternative> {
        match &mut self.nodes[id.index()] {
            Node::NonTerminal { rules, .. } => std::mem::take(rules),
            Node::Terminal { .. } => IndexSet::new(),
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Every nonterminal in the arena, reachable or not.
    pub fn all_non_terminals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.is_terminal())
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Nonterminals reachable from the start symbol.
    pub fn non_terminals(&self) -> &IndexSet<NodeId> {
        &self.non_terminals
    }

    /// Terminals reachable from the start symbol.
    pub fn terminals(&self) -> &IndexSet<NodeId> {
        &self.terminals
    }

    pub fn non_terminal_count(&self) -> usize {
        self.non_terminals.len()
    }

    pub fn call(&self) -> &IndexSet<NodeId> {
        &self.call
    }

    pub fn ret(&self) -> &IndexSet<NodeId> {
        &self.ret
    }

    /// Candidate pair multiset in harvest order.
    pub fn pairs(&self) -> &[(NodeId, NodeId)] {
        &self.pairs
    }

    pub fn classify(&self, id: NodeId) -> TerminalClass {
        if self.call.contains(&id) {
            TerminalClass::Call
        } else if self.ret.contains(&id) {
            TerminalClass::Return
        } else {
            TerminalClass::Plain
        }
    }

    /// Reachable terminals tagged neither call nor return.
    pub fn plain_terminals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.terminals
            .iter()
            .copied()
            .filter(|t| !self.call.contains(t) && !self.ret.contains(t))
    }

    /// Nonterminals reachable from `start`, in depth-first worklist order.
    ///
    /// The start symbol always comes first.
    pub fn reachable_non_terminals(&self) -> Vec<NodeId> {
        reachable_from(self, self.start)
    }

    /// Recompute the reachable terminal and nonterminal sets.
    pub(crate) fn refresh_symbols(&mut self) {
        let non_terminals: IndexSet<NodeId> = self.reachable_non_terminals().into_iter().collect();
        let terminals = non_terminals
            .iter()
            .flat_map(|&nt| self.alternatives(nt))
            .flat_map(|alt| alt.iter())
            .map(|occ| occ.node)
            .filter(|&id| self.is_terminal(id))
            .collect();
        self.non_terminals = non_terminals;
        self.terminals = terminals;
    }
}

/// Nonterminals reachable from `root` (inclusive), in worklist pop order.
pub(crate) fn reachable_from(grammar: &Grammar, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut visited = IndexSet::new();
    let mut stack = vec![root];
    visited.insert(root);

    while let Some(nt) = stack.pop() {
        order.push(nt);
        for alt in grammar.alternatives(nt) {
            for occ in alt {
                if !grammar.is_terminal(occ.node) && visited.insert(occ.node) {
                    stack.push(occ.node);
                }
            }
        }
    }

    order
}
