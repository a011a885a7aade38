use anyhow::Result;
use clap::Parser;
use csvdistinct::{dedup, load, write};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reduce a delimited text file to one record per unique key"
)]
struct Args {
    /// Input file, first line taken as the header.
    input: PathBuf,
    /// Field delimiter.
    #[arg(short, long, default_value = ",")]
    delimiter: String,
    /// Column whose value must be unique in the output.
    #[arg(short, long)]
    unique_key: String,
    /// Column compared to pick the winner among records sharing a key;
    /// the greater value is kept.
    #[arg(short, long)]
    sort_key: Option<String>,
    /// Write the reduced table here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    // ─── load ────────────────────────────────────────────────────────
    let mut table = load::load_csv(&args.input, &args.delimiter)?;
    info!(
        "loaded {} records from {}",
        table.records.len(),
        args.input.display()
    );

    // ─── configure keys ──────────────────────────────────────────────
    table.unique_key = args.unique_key;
    if let Some(sort_key) = args.sort_key {
        table.has_sort = true;
        table.sort_key = sort_key;
    }

    // ─── reduce ──────────────────────────────────────────────────────
    dedup::distinct(&mut table)?;
    info!("{} records after distinct", table.records.len());

    // ─── write ───────────────────────────────────────────────────────
    match &args.output {
        Some(path) => write::write_csv_file(&table, path)?,
        None => write::write_csv(&table, &mut io::stdout().lock())?,
    }
    Ok(())
}
