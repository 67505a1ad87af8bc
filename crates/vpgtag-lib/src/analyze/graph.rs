//! Nonterminal dependency graph.
//!
//! One vertex per reachable nonterminal, one edge per nonterminal occurrence.
//! Each edge keeps the symbols around the occurrence in its alternative.

use indexmap::IndexMap;

use super::cycles::{Cycle, CycleEnumerator};
use crate::grammar::{Grammar, NodeId};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// `from → to`, where `to` occurs in an alternative of `from`.
///
/// Two occurrences of the same reference are two edges, even when their
/// contexts are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Symbols of the alternative before the occurrence.
    pub prefix: Vec<NodeId>,
    /// Symbols of the alternative after the occurrence.
    pub suffix: Vec<NodeId>,
}

/// Read-only view over one grammar snapshot. Rebuild after mutating the grammar.
#[derive(Debug, Clone, Default)]
pub struct DepGraph {
    vertices: IndexMap<NodeId, Vec<EdgeId>>,
    edges: Vec<Edge>,
}

impl DepGraph {
    pub fn build(grammar: &Grammar) -> Self {
        let mut graph = Self::default();
        let start = grammar.start();
        let mut stack = vec![start];
        graph.vertices.insert(start, Vec::new());

        while let Some(from) = stack.pop() {
            for alt in grammar.alternatives(from) {
                let symbols: Vec<NodeId> = alt.iter().map(|occ| occ.node).collect();
                for (i, &to) in symbols.iter().enumerate() {
                    if grammar.is_terminal(to) {
                        continue;
                    }

                    graph.add_edge(Edge {
                        from,
                        to,
                        prefix: symbols[..i].to_vec(),
                        suffix: symbols[i + 1..].to_vec(),
                    });
                    if !graph.vertices.contains_key(&to) {
                        graph.vertices.insert(to, Vec::new());
                        stack.push(to);
                    }
                }
            }
        }

        tracing::debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            "built dependency graph"
        );
        graph
    }

    fn add_edge(&mut self, edge: Edge) {
        let id = EdgeId(self.edges.len() as u32);
        self.vertices.entry(edge.from).or_default().push(id);
        self.edges.push(edge);
    }

    /// Vertices in discovery order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn out_edges(&self, vertex: NodeId) -> &[EdgeId] {
        self.vertices
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every distinct simple cycle, each with the edges that close it.
    pub fn enumerate_cycles(&self) -> Vec<Cycle> {
        CycleEnumerator::enumerate(self)
    }
}
