//! Top level api methods for graph-snapshot.

use std::fs;
use std::path::Path;

use log::info;

use crate::compile::{compile, prepare_snapshot, CompiledSnapshot};
use crate::error::{Error, Result};
use crate::graph::snapshot::Snapshots;
use crate::graph::Graph;
use crate::options::CompileOptions;
use crate::render::{Renderer, TikzSettings};

/// Given a dot string holding one graph, return its TikZ figure.
///
/// The graph is normalized exactly as compile would normalize a snapshot.
pub fn dot_to_tikz<R: Renderer + ?Sized>(
    dot: &str,
    options: &CompileOptions,
    renderer: &R,
) -> Result<String> {
    options.validate()?;
    let graph = prepare_snapshot(&Graph::parse(dot)?, options)?;

    renderer.to_tikz(&graph.to_dot(), &TikzSettings::from_options(options))
}

/// Read every graph of every file, in order, as one snapshot each.
pub fn snapshots_from_dot_files<P: AsRef<Path>>(paths: &[P]) -> Result<Snapshots> {
    let mut snapshots = Snapshots::new();

    for path in paths {
        let path = path.as_ref();
        let dot = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let graphs = Graph::parse_all(&dot).map_err(|e| match e {
            Error::Parse(message) => Error::Parse(format!("{}: {message}", path.display())),
            other => other,
        })?;

        info!("read {} snapshots from {}", graphs.len(), path.display());
        snapshots.extend(graphs);
    }
    Ok(snapshots)
}

/// Compile the graphs of the given dot files into dir.
pub fn compile_dot_files<P: AsRef<Path>, R: Renderer + ?Sized>(
    paths: &[P],
    dir: &Path,
    options: &CompileOptions,
    renderer: &R,
) -> Result<Vec<CompiledSnapshot>> {
    let snapshots = snapshots_from_dot_files(paths)?;

    compile(dir, &snapshots, options, renderer)
}
