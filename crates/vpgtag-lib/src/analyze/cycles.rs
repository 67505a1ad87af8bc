//! Simple-cycle enumeration.
//!
//! Depth-first search from every vertex. A vertex leaves the path once its
//! subtree is explored and may be entered again along another path, so every
//! simple cycle is found, not just one witness per component. Worst-case
//! running time is exponential in the vertex count.

use indexmap::{IndexMap, IndexSet};

use super::graph::{DepGraph, Edge, EdgeId};
use crate::grammar::NodeId;

/// A closed walk `v0 → v1 → ... → v0` without repeated vertices.
///
/// `edges[i]` leaves `vertices[i]`; the last edge returns to `vertices[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    vertices: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl Cycle {
    pub fn vertices(&self) -> &[NodeId] {
        &self.vertices
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn edges<'g>(&self, graph: &'g DepGraph) -> Vec<&'g Edge> {
        self.edges.iter().map(|&id| graph.edge(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

pub(crate) struct CycleEnumerator<'g> {
    graph: &'g DepGraph,
    /// Vertex to its position in `path`.
    on_path: IndexMap<NodeId, usize>,
    path: Vec<NodeId>,
    /// `edge_path[i]` connects `path[i]` to `path[i + 1]`.
    edge_path: Vec<EdgeId>,
    cycles: IndexSet<Cycle>,
}

impl<'g> CycleEnumerator<'g> {
    pub(crate) fn enumerate(graph: &'g DepGraph) -> Vec<Cycle> {
        let mut enumerator = Self {
            graph,
            on_path: IndexMap::new(),
            path: Vec::new(),
            edge_path: Vec::new(),
            cycles: IndexSet::new(),
        };

        for vertex in graph.vertices() {
            enumerator.dfs(vertex);
        }

        tracing::debug!(cycles = enumerator.cycles.len(), "enumerated cycles");
        enumerator.cycles.into_iter().collect()
    }

    fn dfs(&mut self, current: NodeId) {
        self.on_path.insert(current, self.path.len());
        self.path.push(current);

        let graph = self.graph;
        for &id in graph.out_edges(current) {
            let target = graph.edge(id).to;
            if let Some(&start) = self.on_path.get(&target) {
                let mut edges = self.edge_path[start..].to_vec();
                edges.push(id);
                self.cycles.insert(Cycle {
                    vertices: self.path[start..].to_vec(),
                    edges,
                });
                continue;
            }

            self.edge_path.push(id);
            self.dfs(target);
            self.edge_path.pop();
        }

        self.path.pop();
        self.on_path.swap_remove(&current);
    }
}
