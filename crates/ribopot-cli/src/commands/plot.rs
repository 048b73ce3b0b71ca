use crate::cli::PlotArgs;
use crate::config::resolve_config;
use crate::error::{CliError, Result};
use anyhow::anyhow;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use ribopot::core::io::profiles::load_profiles;
use ribopot::core::potential::profile::EnergyProfile;
use ribopot::engine::error::EngineError;
use std::path::Path;
use tracing::info;

/// Samples per bin span, matching the density of the reference plots.
const SAMPLES_PER_BIN: usize = 10;

pub fn run(args: PlotArgs) -> Result<()> {
    let config = resolve_config(&args.potential)?;
    let binning = config.binning().map_err(EngineError::from)?;

    info!("Loading profiles from '{}'.", args.input.display());
    let profiles = load_profiles(&args.input, binning).map_err(EngineError::from)?;

    std::fs::create_dir_all(&args.output)?;

    for (pair, profile) in profiles.iter() {
        let path = args.output.join(format!("{}_profile.svg", pair.label()));
        render_profile(&path, &pair.label(), profile).map_err(|source| CliError::Rendering {
            path: path.clone(),
            source,
        })?;
        info!("Rendered '{}'.", path.display());
    }

    println!(
        "Rendered {} profile curves into: {}",
        profiles.len(),
        args.output.display()
    );
    Ok(())
}

/// Uses the SVG backend to avoid system font dependencies.
fn render_profile(path: &Path, label: &str, profile: &EnergyProfile) -> anyhow::Result<()> {
    let samples = sample_curve(profile)?;

    let (min_energy, max_energy) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, e)| {
            (min.min(*e), max.max(*e))
        });
    let margin = ((max_energy - min_energy) * 0.05).max(0.1);

    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Interaction profile for base pair {}", label),
            ("sans-serif", 20),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0.0..profile.binning().cutoff(),
            (min_energy - margin)..(max_energy + margin),
        )?;

    chart
        .configure_mesh()
        .x_desc("Distance (A)")
        .y_desc("Pseudo-energy")
        .draw()?;

    chart.draw_series(LineSeries::new(samples, &BLUE))?;

    root.present()?;
    Ok(())
}

fn sample_curve(profile: &EnergyProfile) -> anyhow::Result<Vec<(f64, f64)>> {
    let binning = profile.binning();
    let total = binning.bins() * SAMPLES_PER_BIN;
    let step = binning.cutoff() / total as f64;

    (0..total)
        .map(|i| {
            let d = i as f64 * step;
            profile
                .interpolate(d)
                .map(|e| (d, e))
                .map_err(|e| anyhow!("sampling failed at {}: {}", d, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribopot::core::potential::binning::DistanceBinning;

    #[test]
    fn sample_curve_covers_the_whole_domain() {
        let binning = DistanceBinning::new(20.0, 20).unwrap();
        let profile = EnergyProfile::uniform(binning, -1.0);
        let samples = sample_curve(&profile).unwrap();

        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0].0, 0.0);
        assert!(samples.last().unwrap().0 < 20.0);
        assert!(samples.iter().all(|&(_, e)| (e + 1.0).abs() < 1e-9));
    }

    #[test]
    fn render_profile_writes_an_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AU_profile.svg");
        let binning = DistanceBinning::new(20.0, 20).unwrap();
        let energies = (0..20).map(|k| (k as f64 * 0.7).sin()).collect();
        let profile = EnergyProfile::new(binning, energies).unwrap();

        render_profile(&path, "AU", &profile).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml") || content.contains("<svg"));
    }
}
