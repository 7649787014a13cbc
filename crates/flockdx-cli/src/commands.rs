use std::path::{Path, PathBuf};

use eyre::WrapErr;
use flockdx_engine::Predictor;
use serde::Serialize;
use serde_json::json;

use crate::cli::{Cli, Command, ConfigCommand};
use crate::config::{self, DATA_DIR_ENV, FlockdxConfig};

/// Run a parsed command and return its JSON output.
pub fn run(cli: &Cli) -> eyre::Result<serde_json::Value> {
    match &cli.command {
        Command::Config(ConfigCommand::Init { dir }) => config_init(dir),
        Command::Config(ConfigCommand::Show) => config_show(cli.data_dir.as_deref()),
        command => {
            let data_dir = data_dir(cli.data_dir.as_deref());
            let predictor = Predictor::from_dir(&data_dir).wrap_err_with(|| {
                format!("failed to load knowledge base from {}", data_dir.display())
            })?;
            query(&predictor, command)
        }
    }
}

/// Commands answered from a loaded knowledge base.
pub fn query(predictor: &Predictor, command: &Command) -> eyre::Result<serde_json::Value> {
    match command {
        Command::Predict(args) => {
            let request = args.to_request()?;
            tracing::info!(
                bird_type = %request.bird_type,
                age_days = request.age_days,
                symptoms = request.symptoms.len(),
                "running prediction"
            );
            to_json(&predictor.predict(&request))
        }
        Command::Symptoms => to_json(predictor.symptom_categories()),
        Command::Breeds { bird_type } => to_json(predictor.breeds(*bird_type)),
        Command::Diseases { bird_type } => to_json(&predictor.disease_list(*bird_type)),
        Command::Facts => to_json(&predictor.random_facts()),
        Command::Treatment { disease_id } => match predictor.treatment_for(disease_id) {
            Some(plan) => to_json(&plan),
            None => Err(eyre::eyre!("unknown disease id: {disease_id}")),
        },
        Command::Tools => Ok(predictor.tools().cloned().unwrap_or_else(|| json!({}))),
        Command::Config(_) => Err(eyre::eyre!("config commands do not need a knowledge base")),
    }
}

fn data_dir(flag: Option<&Path>) -> PathBuf {
    let env_value = std::env::var(DATA_DIR_ENV).ok();
    let loaded = if config::has_config() {
        match config::load_config() {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                None
            }
        }
    } else {
        None
    };

    let dir = config::resolve_data_dir(flag, env_value.as_deref(), loaded.as_ref());
    tracing::debug!(path = %dir.display(), "using knowledge base directory");
    dir
}

fn config_init(dir: &Path) -> eyre::Result<serde_json::Value> {
    if !dir.is_dir() {
        return Err(eyre::eyre!("{} is not a directory", dir.display()));
    }
    let dir = dir
        .canonicalize()
        .wrap_err_with(|| format!("failed to resolve {}", dir.display()))?;

    let path = config::save_config(&FlockdxConfig::new(dir.clone()))?;
    Ok(json!({ "config_path": path, "data_dir": dir }))
}

fn config_show(flag: Option<&Path>) -> eyre::Result<serde_json::Value> {
    let config = if config::has_config() {
        Some(config::load_config()?)
    } else {
        None
    };

    Ok(json!({
        "config_path": config::config_path()?,
        "config": config,
        "data_dir": data_dir(flag),
    }))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
