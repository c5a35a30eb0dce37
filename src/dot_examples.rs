//! Examples of graph sequences to be used for testing and display.
//!
//! Each example is one dot string holding one graph per step.

use crate::graph::snapshot::Snapshots;
use crate::graph::Graph;

pub const DOT_EXAMPLES: [(&str, &str); 5] = [
    ("single_edge",         "graph { a -- b [len=1]; }"),
    ("weighted_triangle",   "graph { a -- b [len=2]; b -- c [len=3]; c -- a [len=4]; }"),
    ("directed_path",       "digraph { s -> t [len=1]; t -> u [len=2.5]; }"),
    (
        "growing_path",
        "graph { a -- b [len=1]; }
         graph { a -- b [len=1]; b -- c [len=2]; }
         graph { a -- b [len=1]; b -- c [len=2]; c -- d [len=3]; }",
    ),
    (
        "dijkstra_steps",
        "graph steps {
            overlap=false
            s [color=red];
            s -- a [len=7]; s -- b [len=2]; a -- b [len=3]; a -- t [len=1]; b -- t [len=8];
         }
         graph steps {
            overlap=false
            s [color=red]; b [color=red];
            s -- a [len=7]; s -- b [len=2, color=red]; a -- b [len=3]; a -- t [len=1]; b -- t [len=8];
         }
         graph steps {
            overlap=false
            s [color=red]; b [color=red]; a [color=red];
            s -- a [len=7]; s -- b [len=2, color=red]; a -- b [len=3, color=red];
            a -- t [len=1]; b -- t [len=8];
         }
         graph steps {
            overlap=false
            s [color=red]; b [color=red]; a [color=red]; t [color=red];
            s -- a [len=7]; s -- b [len=2, color=red]; a -- b [len=3, color=red];
            a -- t [len=1, color=red]; b -- t [len=8];
         }",
    ),
];

/// The dot text of the named example.
pub fn dot_example_str(title: &str) -> Option<&'static str> {
    DOT_EXAMPLES
        .iter()
        .find(|(dot_title, _)| *dot_title == title)
        .map(|(_, dot)| *dot)
}

/// Every step of the named example, recorded as snapshots.
///
/// panics if the example doesn't exist or doesn't parse.
pub fn dot_example_snapshots(title: &str) -> Snapshots {
    let Some(dot) = dot_example_str(title) else {
        panic!("Could not find requested example: {title}")
    };
    match Graph::parse_all(dot) {
        Ok(graphs) => Snapshots::from(graphs),
        Err(e) => panic!("Example {title} is not valid dot: {e}"),
    }
}
