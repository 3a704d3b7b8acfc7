//! Next lexicographic permutation of every input line.
//!
//! Prints `no answer` for a line that is already the greatest arrangement of
//! its characters, unless `--wrap` asks for the smallest one instead.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use ps_scripts::io::{stdin_at_once, stdout, InputStream};
use ps_scripts::logging;
use ps_scripts::permutations::{advance_or_wrap, next_lex_permutation};
use tracing::debug;

const NO_ANSWER: &str = "no answer";

#[derive(Parser)]
#[command(
    name = "next-lex-permutation",
    version,
    about = "Print the next lexicographic permutation of each input line"
)]
struct Cli {
    /// Wrap the greatest arrangement around to the smallest one.
    #[arg(long)]
    wrap: bool,

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
    let mut input: &[u8] = &input_buf;
    let mut output = stdout();

    let mut n = 0;
    while let Some(line) = input.line() {
        let word = std::str::from_utf8(line).with_context(|| format!("line {}", n + 1))?;
        match successor(word, cli.wrap) {
            Some(next) => writeln!(output, "{next}")?,
            None => writeln!(output, "{NO_ANSWER}")?,
        }
        n += 1;
    }
    debug!(lines = n, "done");

    output.flush().context("write stdout")?;
    Ok(())
}

fn successor(word: &str, wrap: bool) -> Option<String> {
    if !wrap {
        return next_lex_permutation(word);
    }
    let mut chars: Vec<char> = word.chars().collect();
    advance_or_wrap(&mut chars);
    Some(chars.into_iter().collect())
}
