use crate::cli::PotentialArgs;
use crate::error::{CliError, Result};
use ribopot::engine::config::PotentialConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The optional TOML configuration file. Every field is optional; whatever
/// is absent falls back to the built-in defaults, and CLI flags override
/// both.
///
/// ```toml
/// [potential]
/// min-separation = 3
/// cutoff = 20.0
/// bins = 20
/// max-energy = 10.0
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub potential: PartialPotentialConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialPotentialConfig {
    pub min_separation: Option<usize>,
    pub cutoff: Option<f64>,
    pub bins: Option<usize>,
    pub max_energy: Option<f64>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("cannot parse '{}': {}", path.display(), e)))
    }
}

/// Resolves the final potential parameters from defaults, the optional
/// config file, and the CLI overrides, in increasing order of precedence.
pub fn resolve_config(args: &PotentialArgs) -> Result<PotentialConfig> {
    let partial = match &args.config {
        Some(path) => {
            info!("Loading configuration from '{}'.", path.display());
            PartialConfig::from_file(path)?
        }
        None => PartialConfig::default(),
    };

    let defaults = PotentialConfig::default();
    let file = partial.potential;
    let config = PotentialConfig {
        min_separation: args
            .min_separation
            .or(file.min_separation)
            .unwrap_or(defaults.min_separation),
        cutoff: args.cutoff.or(file.cutoff).unwrap_or(defaults.cutoff),
        bins: args.bins.or(file.bins).unwrap_or(defaults.bins),
        max_energy: args
            .max_energy
            .or(file.max_energy)
            .unwrap_or(defaults.max_energy),
    };

    config
        .binning()
        .map_err(|e| CliError::Argument(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn no_overrides() -> PotentialArgs {
        PotentialArgs {
            config: None,
            min_separation: None,
            cutoff: None,
            bins: None,
            max_energy: None,
        }
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = resolve_config(&no_overrides()).unwrap();
        assert_eq!(config, PotentialConfig::default());
    }

    #[test]
    fn config_file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ribopot.toml");
        fs::write(&path, "[potential]\nbins = 19\ncutoff = 18.5\n").unwrap();

        let args = PotentialArgs {
            config: Some(path),
            ..no_overrides()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.bins, 19);
        assert!((config.cutoff - 18.5).abs() < 1e-12);
        assert_eq!(config.min_separation, 3);
    }

    #[test]
    fn cli_flags_override_the_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ribopot.toml");
        fs::write(&path, "[potential]\nbins = 19\n").unwrap();

        let args = PotentialArgs {
            config: Some(path),
            bins: Some(25),
            ..no_overrides()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.bins, 25);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ribopot.toml");
        fs::write(&path, "[potential]\nnum-bins = 19\n").unwrap();

        let args = PotentialArgs {
            config: Some(path),
            ..no_overrides()
        };
        assert!(matches!(resolve_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        let args = PotentialArgs {
            bins: Some(0),
            ..no_overrides()
        };
        assert!(matches!(resolve_config(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let args = PotentialArgs {
            config: Some("/definitely/not/here.toml".into()),
            ..no_overrides()
        };
        assert!(matches!(resolve_config(&args), Err(CliError::Config(_))));
    }
}
