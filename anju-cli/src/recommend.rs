//! Recommend command implementation for the Anju CLI.

use anju_data::{DISHES_FILE, TYPES_FILE, load_answers, load_dishes, load_type_profiles};
use anju_scorer::{QuizOutcome, evaluate};
use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::sources::{data_dir_or_default, require_existing};
use crate::{ARG_ANSWERS, ARG_DATA_DIR, ARG_DISHES, ARG_TYPES, CliError, ENV_RECOMMEND_ANSWERS};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a saved quiz against the type-profile and dish \
                 catalogues. The answer file is a JSON object mapping \
                 question numbers to the chosen option text; the outcome is \
                 printed as JSON.",
    about = "Recommend anju and drinks for a saved answer file"
)]
#[ortho_config(prefix = "ANJU")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file of answers keyed by question number.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
    /// Directory containing the default catalogue filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the type-profile catalogue.
    #[arg(long = ARG_TYPES, value_name = "path")]
    #[serde(default)]
    pub(crate) types: Option<Utf8PathBuf>,
    /// Override the path to the dish catalogue.
    #[arg(long = ARG_DISHES, value_name = "path")]
    #[serde(default)]
    pub(crate) dishes: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON answer file.
    pub(crate) answers_path: Utf8PathBuf,
    /// Path to the type-profile catalogue.
    pub(crate) types: Utf8PathBuf,
    /// Path to the dish catalogue.
    pub(crate) dishes: Utf8PathBuf,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers_path, ARG_ANSWERS)?;
        require_existing(&self.types, ARG_TYPES)?;
        require_existing(&self.dishes, ARG_DISHES)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_RECOMMEND_ANSWERS,
        })?;
        let data_dir = data_dir_or_default(args.data_dir);
        let types = args.types.unwrap_or_else(|| data_dir.join(TYPES_FILE));
        let dishes = args.dishes.unwrap_or_else(|| data_dir.join(DISHES_FILE));
        Ok(Self {
            answers_path,
            types,
            dishes,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = execute_recommend(args)?;
    write_outcome(writer, &outcome)
}

fn execute_recommend(args: RecommendArgs) -> Result<QuizOutcome, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let answers = load_answers(&config.answers_path)?;
    let profiles = load_type_profiles(&config.types)?;
    let dishes = load_dishes(&config.dishes)?;
    let outcome = evaluate(&answers, &profiles, &dishes);
    debug!(
        "answers in {} scored as type {}",
        config.answers_path, outcome.type_no
    );
    Ok(outcome)
}

fn write_outcome(writer: &mut dyn Write, outcome: &QuizOutcome) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(outcome).map_err(CliError::SerializeOutcome)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
