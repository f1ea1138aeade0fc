//! Print the token stream of a wikitext document, one token per line.
//!
//! Input that is not UTF-8 is decoded lossily; the replacement characters end up in text tokens.
//!
//! ```ignore
//! <page.wiki wiki_to_tokens --summary
//! ```

use std::collections::BTreeMap;
use std::io::{stdout, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikilex::{produce_tokens, TokenKind};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read; stdin if absent.
    input: Option<PathBuf>,

    /// Count the tokens of each kind, and print the counts on stderr.
    #[arg(short, long)]
    summary: bool,
}

pub fn main() -> std::io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut bytes = Vec::new();
    match &cli.input {
        Some(path) => {
            tracing::debug!("reading {}", path.display());
            std::fs::File::open(path)?.read_to_end(&mut bytes)?;
        }
        None => {
            std::io::stdin().lock().read_to_end(&mut bytes)?;
        }
    }
    let input = String::from_utf8_lossy(&bytes);

    let mut out = BufWriter::new(stdout().lock());
    let mut counts: BTreeMap<TokenKind, usize> = BTreeMap::new();
    for token in produce_tokens(input.chars()) {
        writeln!(out, "{}", token)?;
        *counts.entry(token.kind).or_default() += 1;
    }
    out.flush()?;

    if cli.summary {
        let mut stderr = std::io::stderr().lock();
        for (kind, count) in counts {
            writeln!(stderr, "{:<12} {:>8}  {}", kind.name(), count, kind.description())?;
        }
    }
    Ok(())
}
