//! Compass CLI - Codebase knowledge graph builder
//!
//! Usage: compass <command> [arguments]

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use compass::{
    ingest_directory, ingest_repository, run_read_query, working_copy_path, CodeGraph,
    GraphConfig, GRAPH_SCHEMA,
};

use cli::{Command, IndexSource};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("compass=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            cli::print_usage();
            return ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => {
            cli::print_usage();
            Ok(())
        }
        Command::Schema => {
            println!("{GRAPH_SCHEMA}");
            Ok(())
        }
        Command::Query { statement } => {
            let config = GraphConfig::from_env()?;
            let graph = CodeGraph::connect(&config).await?;
            let records = run_read_query(&graph, &statement).await;
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Command::Index { source, workdir } => {
            let config = GraphConfig::from_env()?;
            let graph = CodeGraph::connect(&config).await?;
            let report = match source {
                IndexSource::Repository(url) => {
                    let workdir = workdir.unwrap_or_else(|| working_copy_path(&url));
                    println!("Indexing {url}...");
                    ingest_repository(&graph, &url, &workdir).await?
                }
                IndexSource::Directory(path) => {
                    println!("Indexing {}...", path.display());
                    ingest_directory(&graph, &path).await?
                }
            };
            println!(
                "Indexed {} file(s), skipped {}",
                report.files_indexed, report.files_skipped
            );
            Ok(())
        }
    }
}
