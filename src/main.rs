mod adapters;
mod algorithm;
mod config;
mod journey;
mod logging;
mod network;
mod prompt;
mod station;

use std::{fs::File, io, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use crate::{
    adapters::{alphabet::AlphabetAdapter, edge_list::EdgeListAdapter},
    algorithm::Algorithm,
    config::GeneratorConfig,
    journey::Journey,
    network::{Minutes, Network},
    prompt::Prompter,
    station::Station,
};

/// Find routes between two stations of a metro network
#[derive(Parser, Debug)]
#[command(name = "metro_paths", version, about, long_about = None)]
struct Cli {
    /// Source station, asked for interactively when missing
    #[arg(long)]
    from: Option<String>,

    /// Destination station, asked for interactively when missing
    #[arg(long)]
    to: Option<String>,

    /// Search algorithm, asked for interactively when missing
    #[arg(long, short, value_enum)]
    algorithm: Option<Algorithm>,

    /// Run every algorithm and print each result
    #[arg(long, conflicts_with = "algorithm")]
    compare: bool,

    /// JSON edge list to load instead of generating the A-Z / a-z network
    #[arg(long)]
    edges: Option<PathBuf>,

    /// JSON generator settings: {"seed", "minWeight", "maxWeight"}
    #[arg(long, conflicts_with = "edges")]
    config: Option<PathBuf>,

    /// Seed for the generated network's edge weights
    #[arg(long, env = "METRO_PATHS_SEED", conflicts_with = "edges")]
    seed: Option<u64>,

    /// Smallest generated edge weight in minutes
    #[arg(long, conflicts_with = "edges")]
    min_weight: Option<Minutes>,

    /// Largest generated edge weight in minutes
    #[arg(long, conflicts_with = "edges")]
    max_weight: Option<Minutes>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,

    /// Explicit log filter, e.g. "trace" or "metro_paths=debug"
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let config = match &self.config {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
                serde_json::from_reader::<_, GeneratorConfig>(io::BufReader::new(file))
                    .with_context(|| format!("parsing generator config {path:?}"))?
            }
            None => GeneratorConfig::default(),
        };

        Ok(config.with_overrides(self.seed, self.min_weight, self.max_weight))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref())?;

    let now = Instant::now();
    let network = match &cli.edges {
        Some(path) => Network::from_adapter(&EdgeListAdapter::new(path))?,
        None => {
            let config = cli.generator_config()?;
            debug!(?config, "generating alphabet network");
            Network::from_adapter(&AlphabetAdapter::new(config)?)?
        }
    };
    info!(
        stations = network.station_count(),
        edges = network.edge_count(),
        elapsed = ?now.elapsed(),
        "network ready"
    );

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let hint = if cli.edges.is_some() { "" } else { " (A-Z, a-z)" };

    let from = match &cli.from {
        Some(from) => from.clone(),
        None => prompter.ask(&format!("Enter source station{hint}: "))?,
    };
    let to = match &cli.to {
        Some(to) => to.clone(),
        None => prompter.ask(&format!("Enter destination station{hint}: "))?,
    };

    let (from, to) = if cli.edges.is_some() {
        (Station::new(from), Station::new(to))
    } else {
        (Station::parse_letter(&from)?, Station::parse_letter(&to)?)
    };
    for station in [&from, &to] {
        if !network.contains(station) {
            warn!(%station, "station is not on the network");
        }
    }

    let algorithms = if cli.compare {
        Algorithm::ALL.to_vec()
    } else {
        match cli.algorithm {
            Some(algorithm) => vec![algorithm],
            None => vec![prompter.ask_algorithm()?],
        }
    };

    let journeys: Vec<_> = algorithms
        .into_iter()
        .map(|algorithm| {
            let now = Instant::now();
            let journey = Journey::plan(&network, algorithm, from.clone(), to.clone());
            debug!(
                %algorithm,
                found = journey.found(),
                stops = journey.path.len(),
                minutes = journey.total_minutes,
                elapsed = ?now.elapsed(),
                "journey planned"
            );
            journey
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&journeys)?);
        return Ok(());
    }

    for journey in &journeys {
        if cli.compare {
            println!("{}:", journey.algorithm);
        }
        println!("{journey}");
    }

    Ok(())
}
