//! rd2md - Render RD document trees to Markdown

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rd2md::model::{AnchorIndex, DEFAULT_ANCHOR_PREFIX, DocTree};
use rd2md::{RenderConfig, Renderer};

#[derive(Parser)]
#[command(name = "rd2md")]
#[command(version, about = "Render RD document trees to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    rd2md doc.json                 Print Markdown for a parsed RD tree
    rd2md doc.json -o doc.md       Write Markdown to a file
    rd2md - --anchors < doc.json   Read stdin, emit headline anchors")]
struct Cli {
    /// Parsed RD tree as JSON ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Prefix for generated anchors
    #[arg(long, default_value = DEFAULT_ANCHOR_PREFIX)]
    anchor_prefix: String,

    /// Emit <a id> targets in front of headline titles
    #[arg(long)]
    anchors: bool,

    /// JSON map of anchors in other documents: {"file": {"Label": "anchor"}}
    #[arg(long, value_name = "FILE")]
    external: Option<String>,

    /// Deepest tree nesting accepted
    #[arg(long, default_value_t = RenderConfig::default().max_depth)]
    max_depth: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> rd2md::Result<()> {
    let source = read_input(&cli.input)?;
    let tree = DocTree::from_json(&source)?;

    let mut anchors = AnchorIndex::build(&tree, &cli.anchor_prefix);
    if let Some(path) = &cli.external {
        let count = anchors.load_external_json(&fs::read_to_string(path)?)?;
        tracing::info!(count, path = %path, "loaded external anchors");
    }

    let renderer = Renderer::with_config(RenderConfig {
        emit_anchors: cli.anchors,
        max_depth: cli.max_depth,
    });
    let markdown = renderer.render(&tree, &anchors)?;
    let markdown = format!("{}\n", markdown.trim());

    match &cli.output {
        Some(path) => {
            fs::write(path, &markdown)?;
            tracing::info!(path = %path, bytes = markdown.len(), "wrote markdown");
        }
        None => io::stdout().lock().write_all(markdown.as_bytes())?,
    }

    Ok(())
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}
