//! Snapshots for graphs: one recorded state per step of an explanation.
//!
//! Each snapshot is a deep copy, so the source graph can keep changing after it
//! has been recorded.

use log::debug;

use super::Graph;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshots {
    frames: Vec<Graph>,
}

impl Snapshots {
    pub fn new() -> Snapshots {
        Snapshots { frames: Vec::new() }
    }

    /// Record a copy of the graph as the next snapshot.
    pub fn snapshot(&mut self, graph: &Graph) {
        self.frames.push(graph.clone());
        debug!(
            "recorded snapshot {} ({} nodes, {} edges)",
            self.frames.len() - 1,
            graph.node_count(),
            graph.edge_count()
        );
    }

    pub fn get(&self, frame: usize) -> Option<&Graph> {
        self.frames.get(frame)
    }

    pub fn total_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Graph> {
        self.frames.iter()
    }

    /// Forget every recorded snapshot.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl From<Vec<Graph>> for Snapshots {
    fn from(frames: Vec<Graph>) -> Self {
        Snapshots { frames }
    }
}

impl Extend<Graph> for Snapshots {
    fn extend<I: IntoIterator<Item = Graph>>(&mut self, iter: I) {
        self.frames.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Snapshots {
    type Item = &'a Graph;
    type IntoIter = std::slice::Iter<'a, Graph>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
