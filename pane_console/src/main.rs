//! # Pane Console
//!
//! Main entry point for the headless pane host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use input_types::{KeyEventSource, KeyMap, ScriptedSource};
use pane_console::{load_keymap, load_script, load_settings, parse_keys, parse_records, run};
use pane_core::PaneSettings;
use tracing_subscriber::EnvFilter;

/// Replay an editing script through a pane and print what it shows
#[derive(Parser, Debug)]
#[command(name = "pane_console")]
#[command(version)]
struct Args {
    /// Script to replay
    #[arg(long, value_name = "PATH")]
    script: PathBuf,

    /// Treat the script as key strokes instead of JSON action records
    #[arg(long)]
    keys: bool,

    /// Pane settings as JSON
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Key bindings as JSON, layered over the defaults
    #[arg(long, value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Print a frame after every action
    #[arg(long)]
    frames: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => load_settings(path).context("loading settings")?,
        None => PaneSettings::default(),
    };
    let keymap = match &args.keymap {
        Some(path) => load_keymap(path).context("loading key map")?,
        None => KeyMap::default(),
    };
    let script = load_script(&args.script).context("loading script")?;

    let report = if args.keys {
        let mut source = KeyEventSource::new(keymap);
        for event in parse_keys(&script).context("parsing key script")? {
            source.push(event);
        }
        run(settings, &mut source, args.frames)?
    } else {
        let mut source: ScriptedSource = parse_records(&script)
            .context("parsing action script")?
            .into_iter()
            .collect();
        run(settings, &mut source, args.frames)?
    };

    for (i, frame) in report.frames.iter().enumerate() {
        println!("--- frame {} ---", i + 1);
        print!("{}", frame);
    }
    println!("--- final ---");
    print!("{}", report.final_frame);
    println!("cursor {}", report.cursor);

    for error in &report.errors {
        eprintln!("error: {}", error);
    }
    Ok(())
}
