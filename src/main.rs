use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::info;

use losstool::{calculate_losses, check_consistent, load_file, render, DEFAULT_PRECISION};

/// Calculate loss values between reference and obtained data.
#[derive(Debug, Parser)]
#[command(name = "losstool", version, about)]
struct Args {
    /// Path to the reference data file
    ref_file: PathBuf,

    /// Path to the obtained data file
    obtained_file: PathBuf,

    /// Number of decimal places for output
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let reference = load_file(&args.ref_file)?;
    let obtained = load_file(&args.obtained_file)?;

    check_consistent(&reference, &obtained)?;

    info!(
        "comparing {} points: {} vs {}",
        reference.len(),
        args.ref_file.display(),
        args.obtained_file.display()
    );
    let losses = calculate_losses(&reference, &obtained);

    print!("{}", render(&losses, &reference, &obtained, args.precision));
    Ok(())
}
