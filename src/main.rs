use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use portal::PayloadKind;
use portal_content::{LayoutCache, LayoutLoader};
use portal_core::config::Config;

#[derive(Parser)]
#[command(name = "portal", about = "CMS content service for the marketing site")]
struct Cli {
    /// Config file layered over the built-in defaults (default: ./portal.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/portal-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve normalized layout content over HTTP.
    Serve {
        /// Listen address, overrides `server.bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Normalize a raw CMS payload from a file (`-` for stdin) and print it.
    Normalize {
        #[arg(value_enum)]
        kind: PayloadKind,
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    portal::telemetry::init(cli.debug)?;
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let loader = LayoutLoader::from_config(&config)?;
            let cache = Arc::new(LayoutCache::new(loader, config.cms.revalidate_after()));
            portal::server::serve(cache, &addr).await
        }
        Command::Normalize { kind, input } => {
            let raw = if input.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&input)?
            };
            let normalized = portal::normalize_json(&config, kind, &raw)?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(())
        }
    }
}
