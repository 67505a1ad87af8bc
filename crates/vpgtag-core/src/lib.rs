#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the vpgtag crates.
//!
//! - **Interning**: grammar symbol names become cheap `Symbol` handles, so the
//!   grammar arena can key nodes by name without cloning strings.
//! - **Colors**: the ANSI palette used by the grammar printers.

mod colors;
mod interner;

pub use colors::Colors;
pub use interner::{Interner, Symbol};

#[cfg(test)]
mod interner_tests;
