//! Token reference graph.
//!
//! An edge `A → B` means token A's value contains an alias reference to
//! token B. References to paths absent from the set are not edges; the
//! resolver reports those separately.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use tether_core::types::collections::FxHashMap;
use tether_tokens::model::TokenPath;
use tether_tokens::set::TokenSet;

pub struct TokenGraph {
    graph: DiGraph<TokenPath, ()>,
    nodes: FxHashMap<TokenPath, NodeIndex>,
}

impl TokenGraph {
    pub fn build(set: &TokenSet) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: FxHashMap<TokenPath, NodeIndex> = FxHashMap::default();

        for token in set.iter() {
            let index = graph.add_node(token.path.clone());
            nodes.insert(token.path.clone(), index);
        }
        for token in set.iter() {
            let Some(&from) = nodes.get(&token.path) else {
                continue;
            };
            for alias in &token.aliases {
                if let Some(&to) = nodes.get(alias) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, nodes }
    }

    /// Tokens this token references (out-edges).
    pub fn consumes(&self, path: &TokenPath) -> Vec<TokenPath> {
        self.neighbors(path, Direction::Outgoing)
    }

    /// Tokens that reference this token (in-edges).
    pub fn consumed_by(&self, path: &TokenPath) -> Vec<TokenPath> {
        self.neighbors(path, Direction::Incoming)
    }

    fn neighbors(&self, path: &TokenPath, direction: Direction) -> Vec<TokenPath> {
        match self.nodes.get(path) {
            Some(&index) => self
                .graph
                .neighbors_directed(index, direction)
                .map(|n| self.graph[n].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
