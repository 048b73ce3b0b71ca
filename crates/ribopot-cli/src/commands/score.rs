use crate::cli::ScoreArgs;
use crate::config::resolve_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ribopot::core::io::profiles::load_profiles;
use ribopot::engine::error::EngineError;
use ribopot::engine::progress::ProgressReporter;
use ribopot::workflows;
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    let config = resolve_config(&args.potential)?;
    let binning = config.binning().map_err(EngineError::from)?;

    info!("Loading profiles from '{}'.", args.profiles.display());
    let profiles = load_profiles(&args.profiles, binning).map_err(EngineError::from)?;

    let progress = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress.callback());

    let scored = workflows::score::run(&args.input, &profiles, config.min_separation, &reporter)?;

    for entry in &scored {
        println!("{}: {:.4}", entry.id, entry.energy);
    }
    println!("Scored {} entries.", scored.len());

    Ok(())
}
