use anyhow::Context;
use pokeapi_explorer::logging::init_logging;
use pokeapi_explorer::{run_all, ExplorerConfig, HttpFetcher, PokeApi, DEFAULT_CONFIG_FILE};
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ExplorerConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    let fetcher = HttpFetcher::new(config.timeout()).context("failed to build HTTP client")?;
    let api = PokeApi::new(fetcher, config.base_url.as_str());

    info!("POKÉMON EXPLORER - STARTING");

    let report = run_all(&api, &config, |entry| println!("{}", entry.block()));

    report.write_to(&config.output_path).with_context(|| {
        format!("failed to write report to {}", config.output_path.display())
    })?;

    info!("PROCESS COMPLETE");
    info!(path = %config.output_path.display(), "Results saved");
    Ok(())
}
