use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rustdoc-search")]
#[command(about = "Fuzzy search over a rustdoc search index", long_about = None)]
pub struct Cli {
    /// TOML file with search settings
    #[arg(long, global = true, env = "RUSTDOC_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against an index
    Search {
        /// Search index JSON file
        index: PathBuf,
        query: String,
        /// Maximum number of results [default: from config]
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize an index
    Inspect {
        /// Search index JSON file
        index: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["rustdoc-search", "search", "index.json", "fn: open", "-n", "3"]);
        let_assert!(Commands::Search { index, query, limit, json } = cli.command);
        check!(index == PathBuf::from("index.json"));
        check!(query == "fn: open");
        check!(limit == Some(3));
        check!(!json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["rustdoc-search", "inspect", "index.json", "-v", "--config", "s.toml"]);
        check!(cli.verbose);
        check!(cli.config == Some(PathBuf::from("s.toml")));
    }
}
