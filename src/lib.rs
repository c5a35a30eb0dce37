//! graph-snapshot: record the states of a graph as it changes, one snapshot per step,
//! and turn them into TikZ figures plus the Beamer slide or LaTeX document that
//! shows them.
//!
//! Layout is done by graphviz (`neato`, which honours the `len` edge attribute) and
//! TikZ code by `dot2tex`; both run as external programs.
//!
//! # Example
//!
//! ```no_run
//! use graph_snapshot::{compile, latex, CompileOptions, ExternalTools, Graph, Snapshots};
//! use std::path::Path;
//!
//! let mut graph = Graph::new();
//! let mut snapshots = Snapshots::new();
//!
//! graph.add_edge_by_name("a", "b");
//! graph.set_edge_attr("a", "b", "len", 2).unwrap();
//! snapshots.snapshot(&graph);
//!
//! graph.add_edge_by_name("b", "c");
//! graph.set_edge_attr("b", "c", "len", 3).unwrap();
//! snapshots.snapshot(&graph);
//!
//! let dir = Path::new("figures");
//! compile(dir, &snapshots, &CompileOptions::default(), &ExternalTools::default()).unwrap();
//! let slide = latex::beamer_slide(dir, Some("Growing a path"), None, &[]).unwrap();
//! ```

pub mod api;
pub mod compile;
pub mod config;
pub mod dot_examples;
pub mod error;
pub mod graph;
pub mod latex;
pub mod normalize;
pub mod options;
pub mod render;

pub use compile::{compile, CompiledSnapshot};
pub use config::Config;
pub use error::{Error, Result};
pub use graph::snapshot::Snapshots;
pub use graph::{Attributes, Edge, Graph, GraphKind, Node};
pub use options::{CompileOptions, CompileOverrides, GraphOptions, TexMode};
pub use render::{ExternalTools, Renderer, TikzSettings};
