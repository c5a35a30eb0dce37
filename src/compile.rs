//! Compiles recorded snapshots into dot, TikZ and (optionally) SVG files.
//!
//! For snapshot `i` the files are `graph<i>.dot`, `graph<i>.tex` and `graph<i>.svg`,
//! all written into one output directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::graph::snapshot::Snapshots;
use crate::graph::Graph;
use crate::normalize::{scale_edge_lengths, set_len_as_label, set_nodes_to_ellipse};
use crate::options::CompileOptions;
use crate::render::{Renderer, TikzSettings};

/// Every generated file name starts with this.
pub const FILE_PREFIX: &str = "graph";

/// Extensions of the files compile writes, and removes on the next run.
const GENERATED_EXTENSIONS: [&str; 3] = ["dot", "tex", "svg"];

/// Name of the file generated for snapshot index with the given extension.
pub fn snapshot_file_name(index: usize, extension: &str) -> String {
    format!("{FILE_PREFIX}{index}.{extension}")
}

/// Files written for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSnapshot {
    pub index: usize,
    pub dot: PathBuf,
    pub tex: PathBuf,
    pub svg: Option<PathBuf>,
}

/// Write every snapshot into dir as dot and TikZ.
///
/// dir is created if needed, and any graph*.dot, graph*.tex or graph*.svg already in it
/// is removed first.  The snapshots themselves are not modified.
pub fn compile<R: Renderer + ?Sized>(
    dir: &Path,
    snapshots: &Snapshots,
    options: &CompileOptions,
    renderer: &R,
) -> Result<Vec<CompiledSnapshot>> {
    options.validate()?;

    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let removed = remove_generated_files(dir)?;
    if removed > 0 {
        info!("removed {removed} files from an earlier run in {}", dir.display());
    }
    if snapshots.is_empty() {
        warn!("no snapshots to compile");
    }

    let settings = TikzSettings::from_options(options);
    let mut compiled = Vec::with_capacity(snapshots.total_count());

    for (index, graph) in snapshots.iter().enumerate() {
        let prepared = prepare_snapshot(graph, options)?;
        let dot = prepared.to_dot();

        let dot_path = dir.join(snapshot_file_name(index, "dot"));
        write_file(&dot_path, &dot)?;

        let tex_path = dir.join(snapshot_file_name(index, "tex"));
        write_file(&tex_path, &renderer.to_tikz(&dot, &settings)?)?;

        let svg_path = if options.svg_preview {
            let svg_path = dir.join(snapshot_file_name(index, "svg"));
            write_file(&svg_path, &renderer.to_svg(&dot)?)?;
            Some(svg_path)
        } else {
            None
        };

        info!("compiled snapshot {index} to {}", tex_path.display());
        compiled.push(CompiledSnapshot {
            index,
            dot: dot_path,
            tex: tex_path,
            svg: svg_path,
        });
    }

    Ok(compiled)
}

/// Return a normalized copy of graph, ready to be written to dot.
///
/// * with len_as_label, every edge label becomes its (unscaled) len
/// * every len is scaled by the options' edge length factor
/// * every node is drawn as an ellipse
/// * the layout graph options are added to the graph attributes
pub fn prepare_snapshot(graph: &Graph, options: &CompileOptions) -> Result<Graph> {
    let mut graph = graph.clone();

    if options.len_as_label {
        set_len_as_label(&mut graph)?;
    }
    scale_edge_lengths(&mut graph, options.edge_length_factor())?;
    set_nodes_to_ellipse(&mut graph);

    for (key, value) in options.graph_options.iter() {
        graph.attributes_mut().set(key, value);
    }

    Ok(graph)
}

/// Remove graph*.dot, graph*.tex and graph*.svg from dir, returning how many went.
fn remove_generated_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() || !is_generated_file(&path) {
            continue;
        }
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        removed += 1;
    }
    Ok(removed)
}

fn is_generated_file(path: &Path) -> bool {
    let has_prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(FILE_PREFIX));
    let generated_extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| GENERATED_EXTENSIONS.contains(&extension));

    has_prefix && generated_extension
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}
