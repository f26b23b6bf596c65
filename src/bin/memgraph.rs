//! memgraph - build memory-graph edges from a JSON document export.
//!
//! Usage: `memgraph <documents.json> [config.yaml]`
//!
//! The document file is a JSON array of `{ id, summaryEmbedding?, memoryEntries? }`
//! objects. The edge list is written to stdout as JSON; logs go to stderr as
//! JSON lines, filtered by `MEMGRAPH_LOG` (default `info`).

use std::fs;
use std::io::{self, Write};

use anyhow::{bail, Context};
use memgraph::{build_graph_edges_from_json, GraphConfig};

fn main() -> anyhow::Result<()> {
    let log_level = std::env::var("MEMGRAPH_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_str())
        .with_target(false)
        .with_writer(io::stderr)
        .json()
        .init();

    let mut args = std::env::args().skip(1);
    let Some(documents_path) = args.next() else {
        bail!("usage: memgraph <documents.json> [config.yaml]");
    };

    let config = match args.next() {
        Some(path) => GraphConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => GraphConfig::default(),
    };

    let raw = fs::read_to_string(&documents_path)
        .with_context(|| format!("reading documents from {documents_path}"))?;

    tracing::info!(
        path = %documents_path,
        config = config.name.as_deref().unwrap_or("default"),
        selected_space = %config.edges.selected_space,
        "building memory graph edges"
    );

    let built = build_graph_edges_from_json(&raw, &config.edges)
        .context("documents file must be a JSON array")?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &built)?;
    writeln!(stdout)?;

    Ok(())
}
