use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flockdx_core::BirdType;
use flockdx_core::models::request::PredictionRequest;

#[derive(Debug, Parser)]
#[command(name = "flockdx")]
#[command(about = "Poultry disease triage from observed flock symptoms", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Knowledge-base directory (overrides FLOCKDX_DATA_DIR and the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank likely diseases for a set of symptoms
    Predict(PredictArgs),

    /// List the symptom vocabulary by category
    Symptoms,

    /// List common breeds for a bird type
    Breeds { bird_type: BirdType },

    /// List the diseases scored for a bird type
    Diseases { bird_type: BirdType },

    /// Show up to three random poultry facts
    Facts,

    /// Show the treatment plan for a disease id
    Treatment { disease_id: String },

    /// Show vaccination, feed and biosecurity tools
    Tools,

    /// Manage the flockdx config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the active config and resolved knowledge-base directory
    Show,
    /// Write a config file pointing at a knowledge-base directory
    Init { dir: PathBuf },
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Read the whole request from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["bird_type", "age_days", "symptoms"])]
    pub request: Option<PathBuf>,

    #[arg(long, required_unless_present = "request")]
    pub bird_type: Option<BirdType>,

    #[arg(long, required_unless_present = "request")]
    pub age_days: Option<u32>,

    #[arg(long, default_value = "")]
    pub breed: String,

    /// Observed symptom; repeat or comma-separate for several
    #[arg(long = "symptom", value_delimiter = ',')]
    pub symptoms: Vec<String>,

    /// Mortality as a percentage of the flock
    #[arg(long, default_value_t = 0.0)]
    pub mortality_rate: f64,

    #[arg(long, default_value_t = 1)]
    pub flock_size: u32,

    /// Free-text notes, echoed but not scored
    #[arg(long)]
    pub notes: Option<String>,
}

impl PredictArgs {
    pub fn to_request(&self) -> eyre::Result<PredictionRequest> {
        if let Some(path) = &self.request {
            let json = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read request {}: {e}", path.display()))?;
            return Ok(PredictionRequest::from_json(&json)?);
        }

        let bird_type = self
            .bird_type
            .ok_or_else(|| eyre::eyre!("--bird-type is required"))?;
        let age_days = self
            .age_days
            .ok_or_else(|| eyre::eyre!("--age-days is required"))?;

        Ok(PredictionRequest {
            bird_type,
            age_days,
            breed: self.breed.clone(),
            symptoms: self
                .symptoms
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            mortality_rate: self.mortality_rate,
            flock_size: self.flock_size,
            additional_info: self.notes.clone(),
        })
    }
}
