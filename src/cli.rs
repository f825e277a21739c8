//! CLI argument parsing for Compass
//!
//! Defines the Command enum and parse_args() function for all CLI commands.

use std::path::PathBuf;

pub fn print_usage() {
    eprintln!("Compass - Codebase knowledge graph builder");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  compass <command> [arguments]");
    eprintln!("  compass --help");
    eprintln!();
    eprintln!("  compass index (--repo <URL> | --root <DIR>) [--workdir <DIR>]");
    eprintln!("  compass query <CYPHER>");
    eprintln!("  compass schema");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  index     Clone and/or index a repository into the knowledge graph");
    eprintln!("  query     Execute a literal Cypher statement and print records as JSON");
    eprintln!("  schema    Print the graph schema reference");
    eprintln!();
    eprintln!("Index arguments:");
    eprintln!("  --repo <URL>      Repository URL to clone and index");
    eprintln!("  --root <DIR>      Local directory to index without cloning");
    eprintln!("  --workdir <DIR>   Working-copy location for --repo (default: under the system temp dir)");
    eprintln!();
    eprintln!("Connection settings (environment or .env):");
    eprintln!("  NEO4J_URI, NEO4J_USERNAME, NEO4J_PASSWORD");
}

/// What to index: a remote repository or an existing local directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    Repository(String),
    Directory(PathBuf),
}

/// Parsed CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Index {
        source: IndexSource,
        workdir: Option<PathBuf>,
    },
    Query {
        statement: String,
    },
    Schema,
    Help,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let Some(command) = args.first() else {
        return Err("missing command".to_string());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "schema" => Ok(Command::Schema),
        "query" => {
            let statement = args[1..].join(" ");
            if statement.trim().is_empty() {
                return Err("query requires a Cypher statement".to_string());
            }
            Ok(Command::Query { statement })
        }
        "index" => {
            let mut repo: Option<String> = None;
            let mut root: Option<PathBuf> = None;
            let mut workdir: Option<PathBuf> = None;

            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--repo" => {
                        repo = Some(flag_value(args, i, "--repo")?);
                        i += 2;
                    }
                    "--root" => {
                        root = Some(PathBuf::from(flag_value(args, i, "--root")?));
                        i += 2;
                    }
                    "--workdir" => {
                        workdir = Some(PathBuf::from(flag_value(args, i, "--workdir")?));
                        i += 2;
                    }
                    other => return Err(format!("unknown index argument: {other}")),
                }
            }

            let source = match (repo, root) {
                (Some(url), None) => IndexSource::Repository(url),
                (None, Some(path)) => IndexSource::Directory(path),
                (Some(_), Some(_)) => {
                    return Err("index takes either --repo or --root, not both".to_string())
                }
                (None, None) => return Err("index requires --repo or --root".to_string()),
            };

            Ok(Command::Index { source, workdir })
        }
        other => Err(format!("unknown command: {other}")),
    }
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}
