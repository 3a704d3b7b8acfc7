//! Decode an `N x M` character grid read column by column.

use anyhow::{Context, Result};
use clap::Parser;
use ps_scripts::grid::{decode, parse_script};
use ps_scripts::io::stdin_at_once;
use ps_scripts::logging;

#[derive(Parser)]
#[command(
    name = "matrix-script",
    version,
    about = "Read a grid column-major and collapse separators between words"
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
    let grid = parse_script(&mut &input_buf[..]).context("parse grid")?;
    println!("{}", decode(&grid));
    Ok(())
}
