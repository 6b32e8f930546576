use anyhow::Result;
use clap::Parser;
use rustdoc_search::cli::{Cli, Commands};
use rustdoc_search::path::expand_home;
use rustdoc_search::{SearchConfig, SearchEngine};

fn main() -> Result<()> {
    let cli = Cli::parse();
    rustdoc_search::tracing::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => SearchConfig::load(expand_home(path))?,
        None => SearchConfig::default(),
    };
    tracing::debug!("Using config {:?}", config);

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => {
            let engine = SearchEngine::load(expand_home(&index), config)?;
            let results = match limit {
                Some(limit) => engine.search_limited(&query, limit),
                None => engine.search(&query),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No results for '{}'", query);
            } else {
                for result in &results {
                    println!("{}\n    {}", result.display, result.url);
                }
            }
        }
        Commands::Inspect { index, json } => {
            let engine = SearchEngine::load(expand_home(&index), config)?;
            let stats = engine.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{} records in {} groups", stats.records, stats.groups.len());
                println!("groups: {}", stats.groups.join(", "));
                for (kind, count) in &stats.kinds {
                    println!("{:>16} {}", kind.as_str(), count);
                }
            }
        }
    }

    Ok(())
}
