use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The ribopot developers",
    version,
    about = "ribopot - a knowledge-based statistical potential for estimating the relative Gibbs free energy of RNA tertiary structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train pair-type energy profiles from a directory of reference PDB structures.
    Train(TrainArgs),
    /// Score candidate structures against a trained set of profiles.
    Score(ScoreArgs),
    /// Render trained profiles as interpolated energy curves (SVG).
    Plot(PlotArgs),
}

/// Overrides for the statistical-potential parameters. Values given here win
/// over the config file, which wins over the built-in defaults.
#[derive(Args, Debug, Clone)]
pub struct PotentialArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the minimum sequence separation between paired residues.
    #[arg(long, value_name = "INT")]
    pub min_separation: Option<usize>,

    /// Override the distance cutoff in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the number of distance bins.
    #[arg(long, value_name = "INT")]
    pub bins: Option<usize>,

    /// Override the sentinel/cap energy for unobserved bins.
    #[arg(long, value_name = "FLOAT")]
    pub max_energy: Option<f64>,
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the directory of reference PDB structures.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the directory the profile files are written into.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub potential: PotentialArgs,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the base directory of candidate structures. Each immediate
    /// entry (a .pdb file, or a directory of .pdb models) is scored as one
    /// candidate.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the directory holding the trained profile files.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub profiles: PathBuf,

    #[command(flatten)]
    pub potential: PotentialArgs,
}

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Path to the directory holding the trained profile files.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the directory the rendered curves are written into.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub potential: PotentialArgs,
}
