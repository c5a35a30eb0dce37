//! graph-snapshot CLI - compile dot snapshots to TikZ, Beamer and LaTeX.

use clap::Parser;
use eyre::{Context, Result};
use graph_snapshot::api::compile_dot_files;
use graph_snapshot::latex::{beamer_slide, latex_document};
use graph_snapshot::{CompileOverrides, Config};
use log::{info, LevelFilter};

mod cli;

use cli::{Cli, Command, ScaffoldArgs};

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn scaffold(args: ScaffoldArgs, slide: bool) -> Result<()> {
    let generate = if slide { beamer_slide } else { latex_document };
    let code = generate(
        &args.dir,
        args.title.as_deref(),
        args.output.as_deref(),
        &args.captions,
    )
    .with_context(|| format!("Failed to generate scaffolding for {}", args.dir.display()))?;

    print!("{code}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Compile {
            inputs,
            dir,
            scale_total,
            scale_edge_lengths,
            texmode,
            no_len_as_label,
            no_tikz_edge_labels,
            graph_options,
            svg,
        } => {
            let mut options = config.compile;
            options.apply_overrides(&CompileOverrides {
                scale_total,
                scale_edge_lengths,
                texmode,
                no_len_as_label,
                no_tikz_edge_labels,
                graph_options,
                svg_preview: svg,
            })?;

            let compiled = compile_dot_files(&inputs, &dir, &options, &config.tools)
                .context("Failed to compile snapshots")?;

            info!("compiled {} snapshots", compiled.len());
            for snapshot in compiled {
                println!("{}", snapshot.tex.display());
            }
        }

        Command::Slide(args) => scaffold(args, true)?,

        Command::Document(args) => scaffold(args, false)?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    run(cli)
}
