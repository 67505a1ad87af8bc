//! Symbol-name interning for the grammar arena.
//!
//! The arena keys nodes by `(Symbol, kind)`, so every name is stored once and
//! identity checks compare integers.

use std::collections::HashMap;

/// Handle to a name stored in an [`Interner`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

/// Name table handing out one [`Symbol`] per distinct string.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    ids: HashMap<Box<str>, Symbol>,
    names: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The symbol for `name`, allocated on first sight.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.get(name) {
            return sym;
        }

        let sym = Symbol(self.names.len() as u32);
        self.names.push(name.into());
        self.ids.insert(name.into(), sym);
        sym
    }

    /// The symbol for `name` if it was interned before.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.ids.get(name).copied()
    }

    /// Name behind a symbol. Symbols from another interner may panic.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.names[sym.0 as usize]
    }
}
