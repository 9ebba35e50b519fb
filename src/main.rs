use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keypos::{MarkArray, Options, Positions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keypos", about = "Key position sets for perfect hash search")]
struct Cli {
    /// Emit diagnostics from the mark arrays and enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a key position specification and print its canonical form.
    Normalize {
        /// Specification such as `1,2,4-6,$` or `*`.
        spec: String,
    },
    /// Count hash collisions of a keyword list under one or more position sets.
    Probe {
        /// Position set to try; repeat to run several trials.
        #[arg(long = "positions", short = 'k', required = true)]
        positions: Vec<String>,
        /// Size of the hash value range (default: keyword count rounded up
        /// to a power of two).
        #[arg(long)]
        range: Option<usize>,
        /// Keywords file (one keyword per line).
        keywords: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = Options::with_debug(cli.debug).or_env();
    init_tracing(&options);

    match cli.command {
        Commands::Normalize { spec } => run_normalize(&spec)?,
        Commands::Probe {
            positions,
            range,
            keywords,
        } => run_probe(&positions, range, keywords, &options)?,
    }

    Ok(())
}

fn init_tracing(options: &Options) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_normalize(spec: &str) -> Result<()> {
    let positions: Positions = spec
        .parse()
        .with_context(|| format!("invalid key positions '{spec}'"))?;
    positions.print();
    println!();
    Ok(())
}

fn run_probe(
    specs: &[String],
    range: Option<usize>,
    keywords_path: PathBuf,
    options: &Options,
) -> Result<()> {
    let keywords = read_keywords(&keywords_path).with_context(|| {
        format!("failed to read keywords from {}", keywords_path.display())
    })?;
    let range = range.unwrap_or_else(|| keywords.len().next_power_of_two());
    anyhow::ensure!(range > 0, "hash range must be positive");

    let mut seen = MarkArray::with_config(range, options);
    for spec in specs {
        let positions: Positions = spec
            .parse()
            .with_context(|| format!("invalid key positions '{spec}'"))?;

        let mut collisions = 0usize;
        for keyword in &keywords {
            if seen.set_bit(probe_hash(&positions, keyword, range)) {
                collisions += 1;
            }
        }
        seen.clear();

        tracing::debug!(%positions, collisions, "trial finished");
        println!(
            "positions={}\tkeywords={}\trange={}\tcollisions={}",
            positions,
            keywords.len(),
            range,
            collisions
        );
    }

    Ok(())
}

/// Selected characters summed with the keyword length, reduced to `range`.
fn probe_hash(positions: &Positions, keyword: &[u8], range: usize) -> usize {
    let sum: usize = positions.select(keyword).map(usize::from).sum();
    (sum + keyword.len()) % range
}

fn read_keywords(path: &PathBuf) -> Result<Vec<Vec<u8>>> {
    let reader = BufReader::new(File::open(path)?);
    let mut keywords = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let keyword = line.trim();
        if !keyword.is_empty() {
            keywords.push(keyword.as_bytes().to_vec());
        }
    }
    Ok(keywords)
}
