//! Command-line interface for the sedum search engine.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use sedum::{EngineConfig, IndexBuilder, InvertedIndex, ReportConfig, SearchEngine};

#[derive(Parser)]
#[command(name = "sedum", version, about = "Static full-text search over precomputed indexes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an index artifact from a JSON array of documents.
    Index {
        /// JSON file holding an array of {"title", "content"} documents.
        #[arg(long)]
        input: PathBuf,
        /// Where to write the index artifact.
        #[arg(long)]
        output: PathBuf,
    },
    /// Run a query against an index artifact.
    Search {
        /// Index artifact produced by `sedum index`.
        #[arg(long)]
        index: PathBuf,
        /// Raw query string, e.g. '+yellow -red "two colours" green'.
        query: String,
        /// Maximum number of results to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Input document shape for the `index` command.
#[derive(Debug, Deserialize)]
struct DocInput {
    title: String,
    content: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Index { input, output } => build_index(&input, &output),
        Command::Search {
            index,
            query,
            limit,
            json,
        } => run_search(&index, &query, limit, json),
    }
}

fn build_index(input: &Path, output: &Path) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let docs: Vec<DocInput> =
        serde_json::from_str(&raw).context("failed to parse documents JSON")?;
    let doc_count = docs.len();

    let mut builder = IndexBuilder::with_standard_analyzer();
    for doc in docs {
        builder.add_document(doc.title, doc.content);
    }
    let index = builder.build().context("failed to build index")?;
    index
        .to_file(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Indexed {doc_count} documents into {}.", output.display());
    Ok(())
}

fn run_search(index_path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let index = InvertedIndex::from_file(index_path)
        .with_context(|| format!("failed to load index {}", index_path.display()))?;

    let config = EngineConfig::builder()
        .report(ReportConfig {
            max_results: limit,
            ..ReportConfig::default()
        })
        .build();
    let engine = SearchEngine::new(Arc::new(index), config);
    let report = engine.search(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_empty() {
        println!("No results.");
    } else {
        for (rank, entry) in report.iter().enumerate() {
            println!("{}. {} (score {:.4})", rank + 1, entry.title, entry.score);
            println!("   {}", entry.snippet);
        }
    }
    Ok(())
}
