mod collect;
mod inspect;
mod price;
mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "refurb")]
#[command(about = "Refurbished Mac listings across European Apple storefronts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a listings dataset from captured catalog tiles
    Collect {
        /// JSON file of tile snapshots written by the page-capture step
        #[arg(long)]
        tiles: PathBuf,

        /// Country codes to include (default: every configured market)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        countries: Vec<String>,

        /// Write the dataset here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Re-run spec extraction on a single product page
    Inspect {
        #[command(flatten)]
        source: InspectSource,
    },
    /// Normalize one raw price string for a market
    Price {
        /// Price text as shown on the storefront, e.g. "1.049,00 €"
        raw: String,

        #[arg(long)]
        country: String,
    },
    /// Report memory, storage and price coverage of a dataset
    Verify {
        #[arg(long)]
        dataset: PathBuf,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct InspectSource {
    /// Product page to fetch
    #[arg(long)]
    url: Option<String>,

    /// Saved product page HTML
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = refurb_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Collect {
            tiles,
            countries,
            output,
        } => collect::run_collect(&config, &tiles, &countries, output.as_deref()).await,
        Commands::Inspect { source } => {
            inspect::run_inspect(&config, source.url.as_deref(), source.file.as_deref()).await
        }
        Commands::Price { raw, country } => price::run_price(&config, &raw, &country),
        Commands::Verify { dataset } => verify::run_verify(&dataset),
    }
}
