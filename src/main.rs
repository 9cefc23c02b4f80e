//! Console binary: the student record menu on stdin/stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use recordindex::{BTreeIndex, RecordStore, Session, DEFAULT_MIN_DEGREE};

/// University student records, indexed by a B-tree.
#[derive(Debug, Parser)]
#[command(name = "recordindex", version, about)]
struct Cli {
    /// Directory holding one `<id>.txt` file per student.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Minimum degree `t` of the index tree (at least 2).
    #[arg(long, default_value_t = DEFAULT_MIN_DEGREE)]
    degree: usize,
}

fn run(cli: Cli) -> recordindex::Result<()> {
    let index = BTreeIndex::new(cli.degree)?;
    let store = RecordStore::open(&cli.data_dir)?;

    let stdin = io::stdin();
    let mut session = Session::new(index, store, stdin.lock(), io::stdout());
    session.run()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "recordindex failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
