use anyhow::{bail, Context};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use transversals::io::{read_hypergraph, write_hypergraph};
use transversals::transversal;

/// Enumerate all minimal transversals (hitting sets) of a hypergraph.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Hypergraph in sparse edge-list format; stdin if omitted.
    input: Option<PathBuf>,

    /// Where to write the transversals; stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of worker threads.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Only report transversals with fewer vertices than this (0 = no bound).
    #[arg(short, long, default_value_t = 0)]
    cutoff: usize,

    /// Verify that every reported set is a minimal hitting set of the input.
    #[arg(long)]
    check: bool,

    /// Print more log output (may be repeated).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let h = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            read_hypergraph(BufReader::new(file))
        }
        None => read_hypergraph(std::io::stdin().lock()),
    }
    .context("failed to read the hypergraph")?;

    let htrans = transversal(&h, args.threads, args.cutoff)?;

    if args.check {
        if let Some(bad) = htrans.edges().find(|set| !h.is_minimal_hitting_set(set)) {
            bail!("{:?} is not a minimal hitting set", bad);
        }
        log::info!("all {} transversals verified", htrans.num_edges());
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    write_hypergraph(&htrans, writer).context("failed to write the transversals")?;
    Ok(())
}
