//! Rendering dot through the external tools: dot2tex for TikZ, neato for SVG.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::{CompileOptions, TexMode};

/// Graphviz program used to lay out snapshots.  It honours the len edge attribute.
pub const LAYOUT_PROGRAM: &str = "neato";

/// What dot2tex needs to know to produce a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct TikzSettings {
    pub texmode: TexMode,
    pub graph_style: String,
    pub tikz_edge_labels: bool,
}

impl TikzSettings {
    pub fn from_options(options: &CompileOptions) -> Self {
        TikzSettings {
            texmode: options.texmode,
            graph_style: options.graph_style(),
            tikz_edge_labels: options.tikz_edge_labels,
        }
    }
}

/// Turns dot text into diagrams.
pub trait Renderer {
    /// Render dot to a TikZ figure (figure only, no LaTeX preamble).
    fn to_tikz(&self, dot: &str, settings: &TikzSettings) -> Result<String>;

    /// Render dot to SVG, laid out the same way as the TikZ figure.
    fn to_svg(&self, dot: &str) -> Result<String>;
}

/// Renders by piping dot through the dot2tex and neato executables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalTools {
    /// dot2tex executable.
    pub dot2tex: PathBuf,
    /// neato executable.  dot2tex is told to lay out with it too.
    pub neato: PathBuf,
}

impl Default for ExternalTools {
    fn default() -> Self {
        ExternalTools {
            dot2tex: PathBuf::from("dot2tex"),
            neato: PathBuf::from(LAYOUT_PROGRAM),
        }
    }
}

impl ExternalTools {
    /// Command line arguments given to dot2tex; the dot text goes to stdin.
    pub fn dot2tex_args(&self, settings: &TikzSettings) -> Vec<String> {
        let mut args = vec![
            "--format".to_string(),
            "tikz".to_string(),
            "--texmode".to_string(),
            settings.texmode.to_string(),
            "--graphstyle".to_string(),
            settings.graph_style.clone(),
            "--prog".to_string(),
            self.neato.display().to_string(),
            "--figonly".to_string(),
            "--force".to_string(),
        ];
        if settings.tikz_edge_labels {
            args.push("--tikzedgelabels".to_string());
        }
        args
    }
}

impl Renderer for ExternalTools {
    fn to_tikz(&self, dot: &str, settings: &TikzSettings) -> Result<String> {
        pipe_through(&self.dot2tex, &self.dot2tex_args(settings), dot)
    }

    fn to_svg(&self, dot: &str) -> Result<String> {
        pipe_through(&self.neato, &["-Tsvg".to_string()], dot)
    }
}

/// Run program with args, feed input to its stdin and return its stdout.
pub fn pipe_through(program: &Path, args: &[String], input: &str) -> Result<String> {
    let program_name = program.display().to_string();
    debug!("running {program_name} {}", args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::ToolSpawn {
            program: program_name.clone(),
            source,
        })?;

    // stdin is written from another thread while stdout is drained here.
    let stdin = child.stdin.take();
    let input = input.to_owned();
    let writer = std::thread::spawn(move || match stdin {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    });

    let output = child.wait_with_output().map_err(|source| Error::ToolSpawn {
        program: program_name.clone(),
        source,
    })?;
    if let Ok(Err(e)) = writer.join() {
        debug!("writing to {program_name} stdin failed: {e}");
    }

    if !output.status.success() {
        return Err(Error::ToolFailed {
            program: program_name,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| Error::ToolOutput {
        program: program_name,
    })
}
