//! Command-line interface for the Anju pairing quiz.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod counter;
mod error;
mod play;
mod recommend;
mod sources;

pub use error::CliError;

use play::{PlayArgs, run_play};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_ANSWERS: &str = "answers";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_QUESTIONS: &str = "questions";
pub(crate) const ARG_TYPES: &str = "types";
pub(crate) const ARG_DISHES: &str = "dishes";
pub(crate) const ARG_IMAGES: &str = "images";
pub(crate) const ARG_IMAGE_BASE: &str = "image-base";
pub(crate) const ARG_COUNTER: &str = "counter";
pub(crate) const ENV_RECOMMEND_ANSWERS: &str = "ANJU_CMDS_RECOMMEND_ANSWERS_PATH";

/// Run the Anju CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Play(args) => run_play(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "anju",
    about = "Drinking-snack pairing quiz: classify a mood and recommend anju",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a saved answer file and print the outcome as JSON.
    Recommend(RecommendArgs),
    /// Take the quiz interactively on the terminal.
    Play(PlayArgs),
}

#[cfg(test)]
mod tests;
