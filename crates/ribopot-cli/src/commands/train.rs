use crate::cli::TrainArgs;
use crate::config::resolve_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ribopot::core::io::profiles::save_profiles;
use ribopot::engine::error::EngineError;
use ribopot::engine::progress::ProgressReporter;
use ribopot::workflows;
use tracing::info;

pub fn run(args: TrainArgs) -> Result<()> {
    let config = resolve_config(&args.potential)?;
    info!(
        "Training with min_separation={}, cutoff={}, bins={}, max_energy={}.",
        config.min_separation, config.cutoff, config.bins, config.max_energy
    );

    let progress = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress.callback());

    let outcome = workflows::train::run(&args.input, &config, &reporter)?;

    save_profiles(&outcome.profiles, &args.output).map_err(EngineError::from)?;

    println!(
        "Trained {} profiles from {} structures ({} qualifying pairs; {} entries skipped).",
        outcome.profiles.len(),
        outcome.structures_used,
        outcome.pairs_observed,
        outcome.entries_skipped
    );
    println!("Profiles written to: {}", args.output.display());

    Ok(())
}
