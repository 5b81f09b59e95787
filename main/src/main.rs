use std::{
    env,
    io::{self, BufWriter, Write},
};

use anyhow::Context;
use json_highlighter::{tokenize, write_document};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries the page
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let path = cli::input_path(env::args().skip(1))?;
    let source = cli::read_source(&path)?;

    let tokens = tokenize(&source);
    info!(path = %path.display(), tokens = tokens.len(), "highlighting");

    let mut out = BufWriter::new(io::stdout().lock());
    write_document(&mut out, &tokens).context("failed to write HTML to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
