//! Interactive quiz played on a terminal.
//!
//! Each screen shows the current question with its progress and numbered
//! options. Entering a number answers and moves on; `p` steps back, `r`
//! restarts and `q` (or end of input) quits without a result.

use anju_core::{
    Advance, AnswerMap, DEFAULT_IMAGE_BASE, Progress, Question, QuizSession, SessionError,
};
use anju_data::{CatalogPaths, Catalogs, DISHES_FILE, IMAGES_FILE, QUESTIONS_FILE, TYPES_FILE};
use anju_scorer::{QuizOutcome, evaluate};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

use crate::counter::VisitCounter;
use crate::sources::{COUNTER_FILE, data_dir_or_default, require_existing};
use crate::{
    ARG_COUNTER, ARG_DATA_DIR, ARG_DISHES, ARG_IMAGE_BASE, ARG_IMAGES, ARG_QUESTIONS, ARG_TYPES,
    CliError,
};

/// CLI arguments for the `play` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Walk through the question catalogue on the terminal. \
                 Enter an option number to answer, `p` to go back, `r` to \
                 start over and `q` to quit. Completing the quiz increments \
                 the participant counter and prints the result.",
    about = "Take the pairing quiz interactively"
)]
#[ortho_config(prefix = "ANJU")]
pub(crate) struct PlayArgs {
    /// Directory containing the default catalogue filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the question catalogue.
    #[arg(long = ARG_QUESTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) questions: Option<Utf8PathBuf>,
    /// Override the path to the type-profile catalogue.
    #[arg(long = ARG_TYPES, value_name = "path")]
    #[serde(default)]
    pub(crate) types: Option<Utf8PathBuf>,
    /// Override the path to the dish catalogue.
    #[arg(long = ARG_DISHES, value_name = "path")]
    #[serde(default)]
    pub(crate) dishes: Option<Utf8PathBuf>,
    /// Override the path to the image mapping.
    #[arg(long = ARG_IMAGES, value_name = "path")]
    #[serde(default)]
    pub(crate) images: Option<Utf8PathBuf>,
    /// Prefix joined to image file names (default `./images/`).
    #[arg(long = ARG_IMAGE_BASE, value_name = "prefix")]
    #[serde(default)]
    pub(crate) image_base: Option<String>,
    /// Override the path to the participant counter file.
    #[arg(long = ARG_COUNTER, value_name = "path")]
    #[serde(default)]
    pub(crate) counter: Option<Utf8PathBuf>,
}

impl PlayArgs {
    pub(crate) fn into_config(self) -> Result<PlayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(PlayConfig::from(merged))
    }
}

/// Resolved `play` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayConfig {
    /// Catalogue locations.
    pub(crate) catalogs: CatalogPaths,
    /// Prefix for question images.
    pub(crate) image_base: String,
    /// Participant counter file.
    pub(crate) counter: Utf8PathBuf,
}

impl PlayConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalogs.questions, ARG_QUESTIONS)?;
        require_existing(&self.catalogs.types, ARG_TYPES)?;
        require_existing(&self.catalogs.dishes, ARG_DISHES)?;
        require_existing(&self.catalogs.images, ARG_IMAGES)?;
        Ok(())
    }
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        let data_dir = data_dir_or_default(args.data_dir);
        let catalogs = CatalogPaths {
            questions: args
                .questions
                .unwrap_or_else(|| data_dir.join(QUESTIONS_FILE)),
            types: args.types.unwrap_or_else(|| data_dir.join(TYPES_FILE)),
            dishes: args.dishes.unwrap_or_else(|| data_dir.join(DISHES_FILE)),
            images: args.images.unwrap_or_else(|| data_dir.join(IMAGES_FILE)),
        };
        Self {
            catalogs,
            image_base: args
                .image_base
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_owned()),
            counter: args.counter.unwrap_or_else(|| data_dir.join(COUNTER_FILE)),
        }
    }
}

/// A line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    Choose(usize),
    Back,
    Restart,
    Quit,
    Unrecognised,
}

impl PlayCommand {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "p" | "P" => Self::Back,
            "r" | "R" => Self::Restart,
            "q" | "Q" => Self::Quit,
            other => other.parse().map_or(Self::Unrecognised, Self::Choose),
        }
    }
}

pub(super) fn run_play(args: PlayArgs) -> Result<(), CliError> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_play_with(args, &mut stdin, &mut stdout)
}

pub(super) fn run_play_with(
    args: PlayArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalogs = anju_data::load_catalogs(&config.catalogs)?;
    let counter = VisitCounter::new(config.counter.clone());

    writeln!(output, "지금까지 {}명이 참여했어요.", counter.current())
        .map_err(CliError::WriteOutput)?;

    let Some(answers) = play_session(&catalogs, &config.image_base, input, output)? else {
        writeln!(output, "퀴즈를 종료합니다.").map_err(CliError::WriteOutput)?;
        return Ok(());
    };

    let participants = counter.increment()?;
    let outcome = evaluate(&answers, &catalogs.types, &catalogs.dishes);
    info!(
        "quiz completed as type {} (participant #{participants})",
        outcome.type_no
    );
    render_outcome(output, &outcome, participants).map_err(CliError::WriteOutput)
}

/// Drive a session until it completes (`Some`) or the player quits (`None`).
fn play_session(
    catalogs: &Catalogs,
    image_base: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Option<AnswerMap>, CliError> {
    let mut session = QuizSession::new(&catalogs.questions);
    let mut line = String::new();
    loop {
        let question = session.current().ok_or(SessionError::NoQuestions)?;
        let image = catalogs.images.image_path(&question.question, image_base);
        render_question(
            output,
            question,
            session.progress(),
            session.selected(),
            image.as_deref(),
        )
        .map_err(CliError::WriteOutput)?;

        line.clear();
        if input.read_line(&mut line).map_err(CliError::ReadInput)? == 0 {
            return Ok(None);
        }
        match PlayCommand::parse(&line) {
            PlayCommand::Quit => return Ok(None),
            PlayCommand::Restart => session.reset(),
            PlayCommand::Back => {
                if !session.back() {
                    notice(output, "첫 번째 문항입니다.")?;
                }
            }
            PlayCommand::Choose(position) => match session.select_position(position) {
                Ok(()) => {
                    if session.advance()? == Advance::Complete {
                        return Ok(Some(session.into_answers()));
                    }
                }
                Err(err) => notice(output, &err.to_string())?,
            },
            PlayCommand::Unrecognised => {
                notice(output, "보기 번호를 입력하세요. (p: 이전, r: 처음으로, q: 종료)")?;
            }
        }
    }
}

fn notice(output: &mut dyn Write, message: &str) -> Result<(), CliError> {
    writeln!(output, "! {message}").map_err(CliError::WriteOutput)
}

fn render_question(
    output: &mut dyn Write,
    question: &Question,
    progress: Progress,
    selected: Option<&str>,
    image: Option<&str>,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "STEP {} / 총 {}문항 ({}%)",
        progress.step, progress.total, progress.percent
    )?;
    writeln!(output, "[{}] Q{}", question.part_label(), question.q_no)?;
    writeln!(output, "{}", question.question)?;
    if let Some(path) = image {
        writeln!(output, "이미지: {path}")?;
    }
    for (position, option) in question.options().enumerate() {
        let marker = if selected == Some(option) { '*' } else { ' ' };
        writeln!(output, "{marker} {}. {option}", position + 1)?;
    }
    let action = if progress.step == progress.total {
        "결과 보기"
    } else {
        "다음"
    };
    write!(output, "번호를 입력하면 {action} > ")?;
    output.flush()
}

fn render_outcome(
    output: &mut dyn Write,
    outcome: &QuizOutcome,
    participants: u64,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "당신의 유형: {}", outcome.title)?;
    writeln!(output, "{}", outcome.subtitle)?;
    writeln!(output, "추천 안주:")?;
    for dish in &outcome.dishes {
        writeln!(output, "- {dish}")?;
    }
    writeln!(output, "추천 술:")?;
    for drink in &outcome.drinks {
        writeln!(output, "- {drink}")?;
    }
    writeln!(output, "지금까지 {participants}명이 참여했어요.")
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlayConfig, CliError> {
    let merged = PlayArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(PlayConfig::from(merged))
}
