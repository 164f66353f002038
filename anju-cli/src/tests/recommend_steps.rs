//! Behaviour-driven step definitions for the recommend command.

use super::helpers::{DataDir, SUNNY_SOJU_TYPE, sunny_answers};
use super::*;
use crate::recommend::run_recommend_with;
use anju_data::DISHES_FILE;
use anju_scorer::QuizOutcome;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct RecommendWorld {
    data: DataDir,
    answers_path: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            data: DataDir::new(),
            answers_path: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["anju".to_owned(), "recommend".to_owned()];
        if let Some(path) = self.answers_path.borrow().as_ref() {
            argv.push(path.as_str().to_owned());
        }
        argv.extend([
            format!("--{ARG_DATA_DIR}"),
            self.data.root().as_str().to_owned(),
        ]);
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("catalogues exist in the data directory")]
fn catalogues_exist(#[from(world)] world: &RecommendWorld) {
    world.data.write_questions();
    world.data.write_types();
    world.data.write_dishes();
    world.data.write_images();
}

#[given("an answer file choosing sunny weather, soju and spicy fried food")]
fn answer_file_exists(#[from(world)] world: &RecommendWorld) {
    let path = world.data.write_answers("answers.json", &sunny_answers());
    *world.answers_path.borrow_mut() = Some(path);
}

#[given("I omit the answer file path")]
fn omit_answer_path(#[from(world)] world: &RecommendWorld) {
    *world.answers_path.borrow_mut() = None;
}

#[given("the dish catalogue has been removed")]
fn remove_dish_catalogue(#[from(world)] world: &RecommendWorld) {
    std::fs::remove_file(world.data.path(DISHES_FILE)).expect("remove dish catalogue");
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
        Command::Play(_) => panic!("expected recommend command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the sunny soju outcome")]
fn prints_sunny_outcome(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let outcome: QuizOutcome = serde_json::from_str(&stdout).expect("outcome JSON");
    assert_eq!(outcome.type_no, SUNNY_SOJU_TYPE);
    assert_eq!(outcome.dishes.first().map(String::as_str), Some("닭볶음탕"));
}

#[then("the command fails because the answer path is missing")]
fn fails_missing_answer_path(#[from(world)] world: &RecommendWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_ANSWERS);
            assert_eq!(*env, ENV_RECOMMEND_ANSWERS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the dish catalogue is missing")]
fn fails_missing_dishes(#[from(world)] world: &RecommendWorld) {
    match &*world.expect_error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_DISHES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending from a saved answer file");
register_recommend_scenario!(recommend_missing_answers, "rejecting a missing answer path");
register_recommend_scenario!(recommend_missing_dishes, "rejecting a missing dish catalogue");
