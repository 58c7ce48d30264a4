use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use gateway::session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    // Diagnostics go to stderr; stdout carries only protocol output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open file: {}", path))?;
            session::run(BufReader::new(file), &mut output)?;
        }
        None => {
            let stdin = io::stdin();
            session::run(stdin.lock(), &mut output)?;
        }
    }

    Ok(())
}
