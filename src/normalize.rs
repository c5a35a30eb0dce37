//! Attribute normalization applied to each snapshot before it is rendered.

use crate::error::{Error, Result};
use crate::graph::{Graph, LABEL, LEN, SHAPE};

/// Give every node an ellipse shape.
pub fn set_nodes_to_ellipse(graph: &mut Graph) {
    for node in graph.nodes_iter_mut() {
        node.attributes_mut().set(SHAPE, "ellipse");
    }
}

/// Copy every edge's len into its label.
///
/// Fails on the first edge without a len.
pub fn set_len_as_label(graph: &mut Graph) -> Result<()> {
    for edge_idx in 0..graph.edge_count() {
        let len = match graph.get_edge(edge_idx).len() {
            Some(len) => len.to_string(),
            None => {
                let (src, dst) = graph.edge_names(edge_idx);
                return Err(Error::MissingEdgeLength {
                    src: src.to_string(),
                    dst: dst.to_string(),
                });
            }
        };
        graph.get_edge_mut(edge_idx).attributes.set(LABEL, len);
    }
    Ok(())
}

/// Multiply every edge len by factor.  Edges without a len are left alone.
pub fn scale_edge_lengths(graph: &mut Graph, factor: f64) -> Result<()> {
    for edge_idx in 0..graph.edge_count() {
        let Some(len) = graph.get_edge(edge_idx).len() else {
            continue;
        };
        let scaled = match len.trim().parse::<f64>() {
            Ok(len) => len * factor,
            Err(_) => {
                let (src, dst) = graph.edge_names(edge_idx);
                return Err(Error::InvalidEdgeLength {
                    src: src.to_string(),
                    dst: dst.to_string(),
                    value: len.to_string(),
                });
            }
        };
        graph.get_edge_mut(edge_idx).attributes.set(LEN, scaled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_triangle() -> Graph {
        Graph::parse("graph { a -- b [len=2]; b -- c [len=3]; c -- a [len=1.5] }").unwrap()
    }

    #[test]
    fn test_set_nodes_to_ellipse() {
        let mut graph = weighted_triangle();
        graph.set_node_attr("a", SHAPE, "box").unwrap();

        set_nodes_to_ellipse(&mut graph);

        assert!(graph
            .nodes_iter()
            .all(|node| node.attributes().get(SHAPE) == Some("ellipse")));
    }

    #[test]
    fn test_set_len_as_label() {
        let mut graph = weighted_triangle();

        set_len_as_label(&mut graph).unwrap();

        let labels: Vec<_> = graph
            .edges_iter()
            .map(|edge| edge.attributes.get(LABEL).unwrap())
            .collect();
        assert_eq!(labels, vec!["2", "3", "1.5"]);
    }

    #[test]
    fn test_set_len_as_label_without_len() {
        let mut graph = Graph::parse("graph { a -- b [len=2]; b -- c }").unwrap();

        match set_len_as_label(&mut graph) {
            Err(Error::MissingEdgeLength { src, dst }) => {
                assert_eq!((src.as_str(), dst.as_str()), ("b", "c"));
            }
            other => panic!("expected MissingEdgeLength, got {other:?}"),
        }
    }

    #[test]
    fn test_scale_edge_lengths() {
        let mut graph = Graph::parse("graph { a -- b [len=2]; b -- c [len=3]; c -- d }").unwrap();

        scale_edge_lengths(&mut graph, 0.5).unwrap();

        let lens: Vec<_> = graph.edges_iter().map(|edge| edge.len()).collect();
        assert_eq!(lens, vec![Some("1"), Some("1.5"), None]);
    }

    #[test]
    fn test_scale_edge_lengths_rejects_text() {
        let mut graph = Graph::parse("graph { a -- b [len=long] }").unwrap();

        assert!(matches!(
            scale_edge_lengths(&mut graph, 0.5),
            Err(Error::InvalidEdgeLength { value, .. }) if value == "long"
        ));
    }
}
