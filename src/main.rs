use std::{io, process};

use sumbench::{BenchConfig, Result, Runner};

fn run() -> Result<()> {
    let mut runner = Runner::new(BenchConfig::default())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run_all(&mut out)?;
    Ok(())
}

fn main() {
    // stderr only, stdout carries nothing but the tables
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
