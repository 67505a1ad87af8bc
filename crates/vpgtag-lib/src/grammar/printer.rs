//! Tagged grammar rendering.
//!
//! Rules are printed in reachability order, ANTLR style:
//!
//! ```text
//! s	: <'(' s ')'>
//! 	|
//! 	;
//! ```
//!
//! Call terminals get a leading `<`, return terminals a trailing `>`.

use std::fmt;

use vpgtag_core::Colors;

use super::{Grammar, NodeId, TerminalClass};

pub struct GrammarPrinter<'g> {
    grammar: &'g Grammar,
    colors: Colors,
    tags: bool,
}

impl<'g> GrammarPrinter<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            colors: Colors::OFF,
            tags: true,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Whether to print call/return markers.
    pub fn with_tags(mut self, value: bool) -> Self {
        self.tags = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl fmt::Write) -> fmt::Result {
        for (i, nt) in self.grammar.reachable_non_terminals().into_iter().enumerate() {
            if i > 0 {
                w.write_str("\n\n")?;
            }
            self.format_rule(w, nt)?;
        }
        Ok(())
    }

    /// Render a single rule.
    pub fn format_rule(&self, w: &mut impl fmt::Write, nt: NodeId) -> fmt::Result {
        let c = &self.colors;
        write!(w, "{}{}{}", c.rule, self.grammar.symbol_name(nt), c.reset)?;

        for (i, alt) in self.grammar.alternatives(nt).enumerate() {
            if i == 0 {
                write!(w, "\t{}:{}", c.dim, c.reset)?;
            } else {
                write!(w, "\n\t{}|{}", c.dim, c.reset)?;
            }
            for occ in alt {
                w.write_char(' ')?;
                self.format_symbol(w, occ.node)?;
                if !occ.suffix.is_none() {
                    write!(w, "{}{}{}", c.dim, occ.suffix.as_str(), c.reset)?;
                }
            }
        }

        write!(w, "\n\t{};{}", c.dim, c.reset)
    }

    fn format_symbol(&self, w: &mut impl fmt::Write, id: NodeId) -> fmt::Result {
        let c = &self.colors;
        let name = self.grammar.symbol_name(id);
        if !self.tags || !self.grammar.is_terminal(id) {
            return w.write_str(name);
        }

        match self.grammar.classify(id) {
            TerminalClass::Call => write!(w, "{}<{}{}", c.call, name, c.reset),
            TerminalClass::Return => write!(w, "{}{}>{}", c.ret, name, c.reset),
            TerminalClass::Plain => w.write_str(name),
        }
    }
}

impl fmt::Display for GrammarPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(f)
    }
}
