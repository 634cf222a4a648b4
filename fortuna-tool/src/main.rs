mod config;
mod error;
mod locate;

#[cfg(feature = "wheel")]
mod wheel;

use clap::{Parser, Subcommand};
use fortuna_nominatim::NominatimClient;

use crate::config::resolve_search_config;
use crate::error::FortunaError;
use crate::locate::GeoLocator;

const USER_AGENT: &str = concat!("fortuna/", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(name = "fortuna")]
#[command(about = "Decision wheel with nearby-place search", long_about = None)]
struct Cli {
    /// Result language hint for the search provider
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Alternative Nominatim base URL
    #[arg(long, global = true)]
    nominatim_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "wheel")]
    /// Spin the wheel in an interactive terminal UI
    Wheel {
        /// Pre-seed the wheel with an option (repeatable)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Search for nearby places once and print the results
    Search {
        /// Free-text keyword, e.g. "ramen" or "7-11"
        keyword: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let search_config = resolve_search_config(cli.lang, cli.nominatim_url);
    let client = search_config.build_client(USER_AGENT);
    let locator = match search_config.home {
        Some(home) => GeoLocator::fixed(home),
        None => GeoLocator::new(),
    };

    match cli.command {
        #[cfg(feature = "wheel")]
        Command::Wheel { options } => {
            wheel::run(client, locator, options).await?;
        }
        Command::Search { keyword } => {
            run_search(&client, locator, &keyword).await?;
        }
    }

    Ok(())
}

async fn run_search(
    client: &NominatimClient,
    mut locator: GeoLocator,
    keyword: &str,
) -> Result<(), FortunaError> {
    let outcome = locator.resolve().await;
    if let Some(warning) = &outcome.warning {
        eprintln!("warning: {warning}; searching near the default position instead");
    }

    let places = client.search(keyword, outcome.coordinate).await?;
    if places.is_empty() {
        println!("No places found for \"{keyword}\".");
        return Ok(());
    }

    for place in &places {
        println!("{} ({})", place.name, place.distance_label);
        if !place.address.is_empty() {
            println!("    {}", place.address);
        }
        println!("    {}", place.maps_url());
    }

    Ok(())
}
