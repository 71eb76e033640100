use locmap_core::create_map_from_reader;

use std::{
    fs::{File, read_to_string},
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, event};

#[derive(Parser, Debug)]
#[command(version, about = "Render location records as an SVG scatter map", long_about = None)]
struct Args {
    /// Line-delimited JSON records, stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Stylesheet embedded in the generated map
    #[arg(short, long, default_value = "./style.css")]
    stylesheet: PathBuf,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_stylesheet(path: &Path) -> Result<String> {
    read_to_string(path).with_context(|| format!("Stylesheet unavailable: {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the map, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(args.verbose))
        .init();

    let stylesheet = read_stylesheet(&args.stylesheet)?;

    let map_data = match args.input {
        Some(path) if path != Path::new("-") => {
            event!(Level::INFO, "Reading records from {}", path.display());

            let file = File::open(&path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            create_map_from_reader(BufReader::new(file), &stylesheet)?
        }
        _ => {
            event!(Level::INFO, "Reading records from stdin");

            create_map_from_reader(io::stdin().lock(), &stylesheet)?
        }
    };

    let mut stdout = io::stdout().lock();
    svg::write(&mut stdout, &map_data).context("Failed to write map")?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
