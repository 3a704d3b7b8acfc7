//! Maximize `(x_1² + ... + x_k²) mod m` over one element from each list.

use anyhow::{Context, Result};
use clap::Parser;
use ps_scripts::io::stdin_at_once;
use ps_scripts::logging;
use ps_scripts::modsum::{best_choice, Problem};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "maximize-it",
    version,
    about = "Largest sum of squares modulo m, one pick per list"
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
    let problem = Problem::parse(&mut &input_buf[..]).context("parse lists")?;
    let choice = best_choice(&problem.lists, problem.modulus)?;
    info!(picks = ?choice.picks, "best pick");
    println!("{}", choice.value);
    Ok(())
}
