//! A mutable attributed graph whose successive states can be recorded as snapshots.
//!
//! Nodes are identified by name.  Nodes and edges are stored in indexed arrays, and
//! each node keeps the indexes of its incoming and outgoing edges, so the graph can be
//! cloned into a fully independent copy with a plain derive.

mod attributes;
mod dot_parser;
mod dot_writer;
mod edge;
mod node;
pub mod snapshot;

use std::collections::HashMap;
use std::fmt::Display;

use crate::error::{Error, Result};

pub use self::attributes::{Attributes, LABEL, LEN, SHAPE};
pub use self::edge::{Edge, EdgeDisposition};
pub use self::node::Node;

/// Whether edges have a direction.  Written out as `graph` or `digraph`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

impl GraphKind {
    /// Dot keyword that opens a graph of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "graph",
            GraphKind::Directed => "digraph",
        }
    }

    /// Dot edge operator for this kind.
    pub fn edge_op(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "--",
            GraphKind::Directed => "->",
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    /// Written out as `strict`; graphviz then merges parallel edges.
    strict: bool,
    name: Option<String>,
    /// Graph level attributes (overlap, splines, sep...).
    attributes: Attributes,
    /// All nodes in the graph.
    nodes: Vec<Node>,
    /// All edges in the graph.
    edges: Vec<Edge>,
    /// Node name to index into nodes.
    node_index: HashMap<String, usize>,
}

impl Graph {
    /// A new, empty, undirected graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// A new, empty, directed graph.
    pub fn new_directed() -> Self {
        Graph::with_kind(GraphKind::Directed)
    }

    pub fn with_kind(kind: GraphKind) -> Self {
        Graph {
            kind,
            ..Graph::default()
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Return the node indexed by node_idx.
    pub fn get_node(&self, node_idx: usize) -> &Node {
        &self.nodes[node_idx]
    }

    /// Return a mutable node indexed by node_idx.
    pub fn get_node_mut(&mut self, node_idx: usize) -> &mut Node {
        &mut self.nodes[node_idx]
    }

    /// Return the edge indexed by edge_idx.
    pub fn get_edge(&self, edge_idx: usize) -> &Edge {
        &self.edges[edge_idx]
    }

    /// Return mutable edge indexed by edge_idx.
    pub fn get_edge_mut(&mut self, edge_idx: usize) -> &mut Edge {
        &mut self.edges[edge_idx]
    }

    pub fn nodes_iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn nodes_iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn edges_iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the index of the named node.
    pub fn node_idx(&self, name: &str) -> Option<usize> {
        self.node_index.get(name).copied()
    }

    /// Add a node identified by name, and return the node's index in the graph.
    ///
    /// Adding a name that is already present returns the existing index.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(idx) = self.node_idx(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node::new(name));
        self.node_index.insert(name.to_string(), idx);

        idx
    }

    /// Return the index of the edge joining src_node and dst_node, if any.
    ///
    /// For undirected graphs either orientation matches.
    pub fn find_edge(&self, src_node: usize, dst_node: usize) -> Option<usize> {
        let directed = self.is_directed();

        self.nodes[src_node]
            .get_all_edges()
            .copied()
            .find(|edge_idx| self.edges[*edge_idx].connects(src_node, dst_node, directed))
    }

    /// Add an edge between two nodes, and return the edge's index in the graph.
    ///
    /// If the nodes are already joined, the existing edge index is returned.
    pub fn add_edge(&mut self, src_node: usize, dst_node: usize) -> usize {
        if let Some(idx) = self.find_edge(src_node, dst_node) {
            return idx;
        }
        let idx = self.edges.len();
        self.edges.push(Edge::new(src_node, dst_node));

        self.nodes[src_node].add_edge(idx, EdgeDisposition::Out);
        self.nodes[dst_node].add_edge(idx, EdgeDisposition::In);

        idx
    }

    /// Add an edge between the named nodes, adding the nodes if needed.
    pub fn add_edge_by_name(&mut self, src_name: &str, dst_name: &str) -> usize {
        let src_node = self.add_node(src_name);
        let dst_node = self.add_node(dst_name);

        self.add_edge(src_node, dst_node)
    }

    /// Return the (src, dst) names of an edge.
    pub fn edge_names(&self, edge_idx: usize) -> (&str, &str) {
        let edge = &self.edges[edge_idx];

        (
            self.nodes[edge.src_node].name(),
            self.nodes[edge.dst_node].name(),
        )
    }

    /// Set an attribute on the named node.
    pub fn set_node_attr(&mut self, name: &str, key: &str, value: impl ToString) -> Result<()> {
        let idx = self.require_node(name)?;
        self.nodes[idx].attributes.set(key, value);

        Ok(())
    }

    /// Set an attribute on the edge between the named nodes.
    pub fn set_edge_attr(
        &mut self,
        src_name: &str,
        dst_name: &str,
        key: &str,
        value: impl ToString,
    ) -> Result<()> {
        let idx = self.require_edge(src_name, dst_name)?;
        self.edges[idx].attributes.set(key, value);

        Ok(())
    }

    /// Remove the edge between the named nodes.
    pub fn remove_edge(&mut self, src_name: &str, dst_name: &str) -> Result<()> {
        let idx = self.require_edge(src_name, dst_name)?;
        self.edges.remove(idx);
        self.reindex();

        Ok(())
    }

    /// Remove the named node and every edge touching it.
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        let removed = self.require_node(name)?;
        self.nodes.remove(removed);
        self.edges
            .retain(|edge| edge.src_node != removed && edge.dst_node != removed);

        for edge in self.edges.iter_mut() {
            if edge.src_node > removed {
                edge.src_node -= 1;
            }
            if edge.dst_node > removed {
                edge.dst_node -= 1;
            }
        }
        self.reindex();

        Ok(())
    }

    fn require_node(&self, name: &str) -> Result<usize> {
        self.node_idx(name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    fn require_edge(&self, src_name: &str, dst_name: &str) -> Result<usize> {
        let src_node = self.require_node(src_name)?;
        let dst_node = self.require_node(dst_name)?;

        self.find_edge(src_node, dst_node)
            .ok_or_else(|| Error::UnknownEdge {
                src: src_name.to_string(),
                dst: dst_name.to_string(),
            })
    }

    /// Rebuild the name map and the per node edge lists after a removal.
    fn reindex(&mut self) {
        self.node_index.clear();
        for (idx, node) in self.nodes.iter_mut().enumerate() {
            node.clear_edges();
            self.node_index.insert(node.name.clone(), idx);
        }
        for (idx, edge) in self.edges.iter().enumerate() {
            self.nodes[edge.src_node].add_edge(idx, EdgeDisposition::Out);
            self.nodes[edge.dst_node].add_edge(idx, EdgeDisposition::In);
        }
    }
}

/// Displays the graph as dot.
impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.to_dot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new_directed();
        let a_idx = graph.add_node("A");
        let b_idx = graph.add_node("B");

        graph.add_edge(a_idx, b_idx);

        {
            let node_a = &graph.nodes[a_idx];
            let node_b = &graph.nodes[b_idx];

            assert_eq!(node_a.in_edges, vec![]);
            assert_eq!(node_a.out_edges, vec![0]);
            assert_eq!(node_b.in_edges, vec![0]);
            assert_eq!(node_b.out_edges, vec![]);
        }

        let c_idx = graph.add_node("C");
        graph.add_edge(a_idx, c_idx);
        graph.add_edge(b_idx, c_idx);

        {
            let node_a = &graph.nodes[a_idx];
            let node_b = &graph.nodes[b_idx];
            let node_c = &graph.nodes[c_idx];

            assert_eq!(node_a.in_edges, vec![]);
            assert_eq!(node_a.out_edges, vec![0, 1]);
            assert_eq!(node_b.in_edges, vec![0]);
            assert_eq!(node_b.out_edges, vec![2]);
            assert_eq!(node_c.in_edges, vec![1, 2]);
            assert_eq!(node_c.out_edges, vec![]);
        }
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();

        let a_idx = graph.add_node("a");
        assert_eq!(graph.add_node("a"), a_idx);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_undirected_edge_is_reused_in_either_direction() {
        let mut graph = Graph::new();

        let ab = graph.add_edge_by_name("a", "b");
        assert_eq!(graph.add_edge_by_name("b", "a"), ab);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_directed_edges_keep_orientation() {
        let mut graph = Graph::new_directed();

        let ab = graph.add_edge_by_name("a", "b");
        let ba = graph.add_edge_by_name("b", "a");

        assert_ne!(ab, ba);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_names(ba), ("b", "a"));
    }

    #[test]
    fn test_set_attrs() {
        let mut graph = Graph::new();
        graph.add_edge_by_name("a", "b");

        graph.set_node_attr("a", "color", "red").unwrap();
        graph.set_edge_attr("b", "a", LEN, 3).unwrap();

        assert_eq!(graph.get_node(0).attributes().get("color"), Some("red"));
        assert_eq!(graph.get_edge(0).len(), Some("3"));
        assert!(matches!(
            graph.set_node_attr("z", "color", "red"),
            Err(Error::UnknownNode(name)) if name == "z"
        ));
        assert!(matches!(
            graph.set_edge_attr("a", "a", LEN, 1),
            Err(Error::UnknownEdge { .. })
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::new();
        graph.add_edge_by_name("a", "b");
        graph.add_edge_by_name("b", "c");
        graph.add_edge_by_name("c", "a");

        graph.remove_edge("c", "b").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_names(0), ("a", "b"));
        assert_eq!(graph.edge_names(1), ("c", "a"));

        let c_idx = graph.node_idx("c").unwrap();
        assert_eq!(graph.get_node(c_idx).out_edges, vec![1]);
        assert_eq!(graph.get_node(c_idx).in_edges, vec![]);
        assert!(graph.remove_edge("b", "c").is_err());
    }

    #[test]
    fn test_remove_node() {
        let mut graph = Graph::new();
        graph.add_edge_by_name("a", "b");
        graph.add_edge_by_name("b", "c");
        graph.add_edge_by_name("c", "d");

        graph.remove_node("b").unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_idx("b"), None);
        assert_eq!(graph.node_idx("c"), Some(1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_names(0), ("c", "d"));
        assert_eq!(graph.get_node(0).degree(), 0);
        assert!(matches!(graph.remove_node("b"), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut graph = Graph::new();
        graph.add_edge_by_name("a", "b");
        graph.set_edge_attr("a", "b", LEN, 1).unwrap();

        let copy = graph.clone();
        graph.set_edge_attr("a", "b", LEN, 5).unwrap();
        graph.add_edge_by_name("b", "c");

        assert_eq!(copy.get_edge(0).len(), Some("1"));
        assert_eq!(copy.edge_count(), 1);
        assert_eq!(copy.node_count(), 2);
    }
}
