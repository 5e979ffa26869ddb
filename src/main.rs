use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use protocol_resolver::catalog::{CandidateSource, FsCatalog};
use protocol_resolver::config::ResolverConfig;
use protocol_resolver::version::resolver::Resolver;

#[derive(Parser)]
#[command(name = "protocol-resolver")]
#[command(version, about = "Resolve the closest protocol definition for a peer version")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the protocol definition file matching a peer-reported version
    Resolve {
        /// Peer-reported version string, e.g. "0.5.1-beta commit=abcdef-0.5.1-beta.rc2"
        version: String,

        /// Directory containing protocol definition files
        #[arg(long, default_value = "protocols")]
        dir: PathBuf,

        /// Resolver configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            version,
            dir,
            config,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(resolve(version, dir, config)),
    }
}

async fn resolve(version: String, dir: PathBuf, config: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => serde_json::from_str(&tokio::fs::read_to_string(&path).await?)?,
        None => ResolverConfig::default(),
    };

    let catalog = FsCatalog::new(&dir);
    let candidates = catalog.list_candidate_versions().await?;
    let resolver = Resolver::new(config);

    match resolver.resolve_closest_version(&version, &candidates) {
        Some(resolved) => {
            println!("{}", catalog.resolve_file_path(&resolved).display());
            Ok(())
        }
        None => anyhow::bail!("no protocol definition matches {version}"),
    }
}
