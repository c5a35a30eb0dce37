//! Represents an edge connecting two nodes within a graph.

use super::attributes::{Attributes, LEN};

// EdgeDisposition indicates whether a edge is incoming our outgoing with respect to a particular node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EdgeDisposition {
    In,
    Out,
}

/// An edge connects two nodes in a graph, from src_node to dst_node.
///
/// In an undirected graph the orientation only records the order in which
/// the edge was added.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Edge {
    /// Node that this edge points from.  This is an index into graph.nodes.
    pub src_node: usize,
    /// Node that this edge points to.  This is an index into graph.nodes.
    pub dst_node: usize,
    /// Attributes written out to dot (len, label, weight, color...).
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(src_node: usize, dst_node: usize) -> Self {
        Edge {
            src_node,
            dst_node,
            attributes: Attributes::new(),
        }
    }

    /// True if this edge joins the two nodes.
    ///
    /// Orientation only matters when directed is set.
    pub fn connects(&self, src_node: usize, dst_node: usize, directed: bool) -> bool {
        (self.src_node == src_node && self.dst_node == dst_node)
            || (!directed && self.src_node == dst_node && self.dst_node == src_node)
    }

    /// The raw len attribute, if any.
    pub fn len(&self) -> Option<&str> {
        self.attributes.get(LEN)
    }
}
