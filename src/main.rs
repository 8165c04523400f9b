//! spa-router
//!
//! Drives the navigation engine against an in-memory document, so route
//! tables and navigation sequences can be checked from the command line.
//!
//! ```text
//! spa-router match /alice/oak /terms.html
//!     → one ParsedRoute per path, as JSON
//!
//! spa-router replay /login /alice /alice/oak
//!     → initial render of "/", then each path in order
//!     → final document state, as JSON
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use spa_router::config::{load_config, NavigatorConfig};
use spa_router::host::MemoryHost;
use spa_router::observability::logging;
use spa_router::pages::{self, HttpAssetSource};
use spa_router::Navigator;

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Client-side navigation engine for the Tree Clipper app", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths against the route table
    Match {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Navigate through paths and print the resulting document
    Replay {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NavigatorConfig::default(),
    };
    logging::init(&config.observability);

    tracing::info!(
        routes = config.routes.len(),
        container = %config.container_id,
        api = %config.api.base_url,
        "Configuration loaded"
    );

    let host = Arc::new(MemoryHost::new("/", config.container_id.clone()));
    let assets = Arc::new(HttpAssetSource::new(&config.api)?);
    let modules = pages::default_modules(host.clone(), assets);
    let navigator = Navigator::new(&config, host.clone(), Arc::new(modules));

    match cli.command {
        Commands::Match { paths } => {
            let routes: Vec<_> = paths.iter().map(|p| navigator.match_route(p)).collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Replay { paths } => {
            navigator.start().await;
            for path in &paths {
                let outcome = navigator.navigate(path).await;
                tracing::info!(path = %path, outcome = outcome.as_str(), "Navigated");
            }
            println!("{}", serde_json::to_string_pretty(&host.snapshot())?);
        }
    }

    Ok(())
}
