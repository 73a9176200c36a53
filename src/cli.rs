use crate::config::{Config, load_config};
use crate::parser::parse_document;
use crate::render::write_output_svg;
use crate::session::GraphSession;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "skosgraph",
    version,
    about = "Render a SKOS thesaurus graph export as a force-directed SVG"
)]
pub struct Args {
    /// Input JSON export or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Language tag for concept labels (exact match against value@tag)
    #[arg(short = 'l', long = "language", default_value = "fr")]
    pub language: String,

    /// Config JSON file (settings, simulation, render, theme sections)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Simulation tick cap before rendering
    #[arg(long = "ticks", default_value_t = 300)]
    pub ticks: usize,

    /// Render relation labels without the hide-label marker class
    #[arg(long = "show-labels")]
    pub show_labels: bool,

    /// Viewport width (defaults to the config file value, then 1200)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Viewport height (defaults to the config file value, then 800)
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    merge_render_overrides(&mut config, args.width, args.height);

    let input = read_input(args.input.as_deref())?;
    // A failed or non-JSON load blocks rendering entirely.
    let document = parse_document(&input).context("failed to parse graph document")?;

    let mut session = GraphSession::new(&document, &args.language, &config);
    session.set_labels_hidden(!args.show_labels);
    session.run_layout(args.ticks);

    let svg = session.render_svg();
    write_output_svg(&svg, args.output.as_deref())
}

/// Flags override config-file values; absent flags leave them alone.
fn merge_render_overrides(config: &mut Config, width: Option<f64>, height: Option<f64>) {
    if let Some(width) = width {
        config.render.width = width;
    }
    if let Some(height) = height {
        config.render.height = height;
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
