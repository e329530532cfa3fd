//! tcmodhelp — generate module documentation from annotated module sources.
//!
//! `tcmodhelp -s import/import_*.c > modules.xml`

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tcmodhelp::{batch, render, DocError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tcmodhelp",
    about = "Generate module documentation from *%* annotated module sources"
)]
struct Cli {
    /// Module source files (glob patterns supported)
    files: Vec<String>,

    /// Analyse the sources of the modules
    #[arg(short = 's', long = "source")]
    use_source: bool,

    /// Analyse module objects (not supported)
    #[arg(short = 'b', long = "binary")]
    use_binary: bool,

    /// Output format: docbook (default), text, json
    #[arg(short = 'f', long, default_value = "docbook")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tcmodhelp=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if cli.use_binary {
        return Err(DocError::UnsupportedMode("binary".to_string()).into());
    }
    if !cli.use_source {
        bail!("either source or binary analysis mode must be selected");
    }

    let renderer = render::create_renderer(&cli.format)?;
    let paths = expand_globs(&cli.files)?;
    let report = batch::process(&paths, renderer.as_ref());

    tracing::debug!(
        modules = paths.len(),
        skipped = report.skipped(),
        "processed module sources"
    );

    io::stdout()
        .write_all(report.assemble(renderer.as_ref()).as_bytes())
        .context("failed to write output")?;

    let mut failures = report.failures();
    if let Some(first) = failures.next() {
        for other in failures {
            tracing::error!("{other}");
        }
        bail!("{first}");
    }

    Ok(())
}

/// Expand glob patterns into a list of paths.
///
/// Plain paths are kept verbatim, even when they do not exist, so that
/// unreadable sources are skipped by the batch like any other.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !is_glob(pattern) {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let mut matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        // Sort for deterministic output
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
