//! CLI argument parsing for graph-snapshot.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "graph-snapshot",
    about = "Compile graph snapshots to TikZ figures and LaTeX scaffolding",
    version,
    after_help = "Set RUST_LOG=debug to see the external tool invocations"
)]
pub struct Cli {
    /// Config file (default: $GRAPH_SNAPSHOT_CONFIG or ./graph-snapshot.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile every graph in the input dot files into graph<i>.dot/.tex files
    Compile {
        /// Dot files; each graph they hold is one snapshot
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory, created if missing
        #[arg(short, long)]
        dir: PathBuf,

        /// Scale of the whole TikZ picture
        #[arg(long)]
        scale_total: Option<f64>,

        /// Extra factor on every edge len
        #[arg(long)]
        scale_edge_lengths: Option<f64>,

        /// How dot2tex treats labels (math, verbatim, raw)
        #[arg(long)]
        texmode: Option<String>,

        /// Keep existing edge labels instead of labelling edges with their len
        #[arg(long)]
        no_len_as_label: bool,

        /// Let graphviz place edge labels instead of TikZ
        #[arg(long)]
        no_tikz_edge_labels: bool,

        /// Graph layout option (overlap, splines, sep, orientation), e.g. -g overlap=false
        #[arg(short = 'g', long = "graph-option", value_name = "KEY=VALUE")]
        graph_options: Vec<String>,

        /// Also write an SVG preview of each snapshot
        #[arg(long)]
        svg: bool,
    },

    /// Generate a beamer frame showing the compiled snapshots one after another
    Slide(ScaffoldArgs),

    /// Generate a LaTeX article with one figure per compiled snapshot
    Document(ScaffoldArgs),
}

#[derive(Args)]
pub struct ScaffoldArgs {
    /// Directory holding graph0.tex, graph1.tex, ...
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Frame title or section heading
    #[arg(short, long)]
    pub title: Option<String>,

    /// Caption for the next figure (repeat for each figure)
    #[arg(long = "caption")]
    pub captions: Vec<String>,

    /// Write the generated code here as well as to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
