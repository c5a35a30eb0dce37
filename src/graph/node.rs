//! Represents a node (vertice) within a graph.

use super::attributes::Attributes;
use super::edge::EdgeDisposition;

// Represents the node element of a graph.  Sometimes called a vertice.
//
// Nodes are connected together via Edges.  Each node has a list of edges coming in and edges
// going out of this node.  Note that this means that each edge is represented twice: Once in
// the outgoing node, and once in the incoming node.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Node {
    // Unique within a graph: the graph keeps a name to index map.
    pub(super) name: String,
    /// Attributes written out to dot (shape, color, label...).
    pub(super) attributes: Attributes,
    /// Edges incoming to this node.  Each entry is a edge index into the graph's edges list.
    pub(super) in_edges: Vec<usize>,
    /// Edges outcoming from this node.  Each entry is a edge index into the graph's edges list.
    pub(super) out_edges: Vec<usize>,
}

impl Node {
    /// Return a new node which is not yet connected to a graph.
    pub(super) fn new(name: &str) -> Self {
        Node {
            name: name.to_string(),
            attributes: Attributes::new(),
            in_edges: vec![],
            out_edges: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Add either an in our out edge to the node.
    pub(super) fn add_edge(&mut self, edge: usize, disposition: EdgeDisposition) {
        match disposition {
            EdgeDisposition::In => self.in_edges.push(edge),
            EdgeDisposition::Out => self.out_edges.push(edge),
        };
    }

    /// Remove edge indexes from node.
    pub(super) fn clear_edges(&mut self) {
        self.in_edges = vec![];
        self.out_edges = vec![];
    }

    /// Return all in and out edges associated with a node.
    pub fn get_all_edges(&self) -> impl Iterator<Item = &usize> {
        self.out_edges.iter().chain(self.in_edges.iter())
    }

    /// Number of edges touching this node.
    pub fn degree(&self) -> usize {
        self.in_edges.len() + self.out_edges.len()
    }
}
