//! Name-level grammar description handed over by the ingestion front ends.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::{Alternative, Grammar, NodeKind, Occurrence, Suffix};
use crate::{Error, Result};

/// A grammar before name resolution.
///
/// Produced by [`parse_grammar`](crate::parse_grammar) or decoded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGrammar {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub terminals: IndexSet<String>,
    #[serde(default)]
    pub non_terminals: IndexSet<String>,
    /// Nonterminal name to its alternatives.
    #[serde(default)]
    pub rules: IndexMap<String, Vec<Vec<RawOccurrence>>>,
}

/// One symbol reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOccurrence {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub suffix: Suffix,
}

impl RawOccurrence {
    pub fn terminal(name: impl Into<String>, suffix: Suffix) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Terminal,
            suffix,
        }
    }

    pub fn non_terminal(name: impl Into<String>, suffix: Suffix) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::NonTerminal,
            suffix,
        }
    }
}

impl RawGrammar {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<anonymous>".to_string())
    }

    fn is_declared(&self, occ: &RawOccurrence) -> bool {
        match occ.kind {
            NodeKind::Terminal => self.terminals.contains(&occ.name),
            NodeKind::NonTerminal => {
                self.non_terminals.contains(&occ.name) || self.rules.contains_key(&occ.name)
            }
        }
    }
}

impl Grammar {
    /// Resolve a name-level grammar into the symbol arena.
    ///
    /// Rule keys count as nonterminal declarations. Every referenced name
    /// must be declared with the matching kind.
    pub fn from_raw(raw: &RawGrammar) -> Result<Self> {
        let start = match raw.start.as_deref() {
            Some(start) if raw.non_terminals.contains(start) || raw.rules.contains_key(start) => {
                start
            }
            _ => {
                return Err(Error::NoRules {
                    grammar: raw.display_name(),
                });
            }
        };

        let mut grammar = Grammar::new(start).with_name(raw.name.clone());
        for name in &raw.non_terminals {
            grammar.intern_node(name, NodeKind::NonTerminal);
        }
        for name in &raw.terminals {
            grammar.intern_node(name, NodeKind::Terminal);
        }

        for (lhs, alternatives) in &raw.rules {
            let lhs = grammar.intern_node(lhs, NodeKind::NonTerminal);
            for raw_alt in alternatives {
                let mut alt = Alternative::empty();
                for occ in raw_alt {
                    if !raw.is_declared(occ) {
                        return Err(Error::UnknownSymbol {
                            name: occ.name.clone(),
                        });
                    }
                    let node = grammar.intern_node(&occ.name, occ.kind);
                    alt.push(Occurrence::new(node, occ.suffix));
                }
                grammar.add_alternative(lhs, alt);
            }
        }

        grammar.refresh_symbols();
        Ok(grammar)
    }
}
