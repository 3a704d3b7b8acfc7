//! Validate one postal code read from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use ps_scripts::io::stdin_at_once;
use ps_scripts::logging;
use ps_scripts::postal::is_valid;

#[derive(Parser)]
#[command(
    name = "validating-postal-codes",
    version,
    about = "Check a six-digit postal code for range and alternating digit pairs"
)]
struct Cli {
    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let input_buf = stdin_at_once().context("read stdin")?;
    let code = std::str::from_utf8(&input_buf).context("postal code is not valid UTF-8")?;
    // judge format
    println!("{}", if is_valid(code.trim()) { "True" } else { "False" });
    Ok(())
}
