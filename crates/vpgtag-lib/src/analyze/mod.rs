//! Cycle analysis over a tagged grammar.
//!
//! - `graph` - nonterminal dependency graph with per-occurrence context
//! - `cycles` - exhaustive simple-cycle enumeration
//! - `validity` - per-cycle and grammar-level verdicts

mod cycles;
mod graph;
mod validity;


pub use cycles::Cycle;
pub use graph::{DepGraph, Edge, EdgeId};
pub use validity::{can_derive_nonempty, is_cycle_valid, is_valid};
