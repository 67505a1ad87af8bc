pub mod batch;
pub mod check;
pub mod dump;
pub mod loader;

#[cfg(test)]
mod loader_tests;
