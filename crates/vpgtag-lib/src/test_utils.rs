//! Shared fixtures for unit tests.

use std::collections::{BTreeSet, HashSet};

use crate::grammar::{Grammar, NodeId, NodeKind, Occurrence, Suffix};
use crate::parse_grammar;

/// Parse and resolve a text grammar; panics on invalid fixtures.
pub fn grammar(src: &str) -> Grammar {
    let raw = parse_grammar(src).expect("fixture must parse");
    Grammar::from_raw(&raw).expect("fixture must resolve")
}

/// Parse, resolve and run the two tagging rounds.
pub fn tagged(src: &str) -> Grammar {
    let mut g = grammar(src);
    g.tag(true);
    g
}

pub fn nt(grammar: &Grammar, name: &str) -> NodeId {
    grammar
        .find(name, NodeKind::NonTerminal)
        .unwrap_or_else(|| panic!("no nonterminal `{name}`"))
}

pub fn t(grammar: &Grammar, name: &str) -> NodeId {
    grammar
        .find(name, NodeKind::Terminal)
        .unwrap_or_else(|| panic!("no terminal `{name}`"))
}

/// Sorted symbol names.
pub fn names(grammar: &Grammar, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    let mut names: Vec<String> = ids
        .into_iter()
        .map(|id| grammar.symbol_name(id).to_string())
        .collect();
    names.sort();
    names
}

/// Terminal strings of at most `max_len` symbols derivable from `root`.
///
/// Leftmost expansion with pruning; repetition suffixes unfold lazily.
pub fn language(grammar: &Grammar, root: NodeId, max_len: usize) -> BTreeSet<Vec<String>> {
    let max_items = 2 * max_len + 4;
    let mut result = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![vec![Occurrence::bare(root)]];

    while let Some(form) = stack.pop() {
        if !seen.insert(form.clone()) {
            continue;
        }

        let is_final = |occ: &Occurrence| grammar.is_terminal(occ.node) && occ.suffix.is_none();
        let finals = form.iter().filter(|occ| is_final(occ)).count();
        if finals > max_len || form.len() > max_items {
            continue;
        }

        let Some(pos) = form.iter().position(|occ| !is_final(occ)) else {
            result.insert(
                form.iter()
                    .map(|occ| grammar.symbol_name(occ.node).to_string())
                    .collect(),
            );
            continue;
        };

        let occ = form[pos];
        let bare = Occurrence::bare(occ.node);
        let replacements: Vec<Vec<Occurrence>> = match occ.suffix {
            Suffix::Optional => vec![vec![], vec![bare]],
            Suffix::Star => vec![vec![], vec![bare, occ]],
            Suffix::Plus => vec![vec![bare, Occurrence::new(occ.node, Suffix::Star)]],
            Suffix::None => grammar
                .alternatives(occ.node)
                .map(|alt| alt.occurrences().to_vec())
                .collect(),
        };

        for replacement in replacements {
            let mut next = form[..pos].to_vec();
            next.extend(replacement);
            next.extend_from_slice(&form[pos + 1..]);
            stack.push(next);
        }
    }

    result
}

/// Render a language as one space-separated word per line, `ε` for empty.
pub fn render_language(words: &BTreeSet<Vec<String>>) -> String {
    words
        .iter()
        .map(|w| if w.is_empty() { "ε".to_string() } else { w.join(" ") })
        .collect::<Vec<_>>()
        .join("\n")
}
