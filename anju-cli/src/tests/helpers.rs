//! Test helpers for writing catalogue fixtures to a temporary data directory.

use anju_core::test_support::scoring_questions;
use anju_data::{DISHES_FILE, IMAGES_FILE, QUESTIONS_FILE, TYPES_FILE};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Type number of the profile matching the first option of every question.
pub(super) const SUNNY_SOJU_TYPE: i64 = 4;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

fn write_json(path: &Utf8Path, value: &Value) {
    write_utf8(path, value.to_string().as_bytes());
}

/// A temporary data directory populated with small catalogues.
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    /// A data directory holding all four catalogues.
    pub(super) fn populated() -> Self {
        let data = Self::new();
        data.write_questions();
        data.write_types();
        data.write_dishes();
        data.write_images();
        data
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_questions(&self) {
        let rows: Vec<Value> = scoring_questions()
            .iter()
            .map(|question| {
                let option = |index: usize| question.raw_options.get(index).cloned();
                json!({
                    "q_no": question.q_no,
                    "part": question.part,
                    "question": question.question,
                    "option_1": option(0),
                    "option_2": option(1),
                    "option_3": option(2),
                    "option_4": option(3),
                })
            })
            .collect();
        write_json(&self.path(QUESTIONS_FILE), &Value::Array(rows));
    }

    pub(super) fn write_empty_questions(&self) {
        write_json(&self.path(QUESTIONS_FILE), &json!([]));
    }

    pub(super) fn write_types(&self) {
        write_json(
            &self.path(TYPES_FILE),
            &json!([
                { "type_no": 1, "keyword": "빗속의 막걸리", "core_combo": "비, 막걸리" },
                {
                    "type_no": SUNNY_SOJU_TYPE,
                    "keyword": "햇살 아래 소주",
                    "core_combo": "화창, 행복, 소주, 매콤, 얼큰, 튀김"
                }
            ]),
        );
    }

    pub(super) fn write_dishes(&self) {
        write_json(
            &self.path(DISHES_FILE),
            &json!([
                {
                    "name": "치킨", "spicy_level": 1, "is_fried": 1,
                    "best_drink": "맥주", "alt_drink_1": "소주", "alt_drink_2": "하이볼"
                },
                {
                    "name": "닭볶음탕", "spicy_level": "3", "is_soup": 1,
                    "best_drink": "소주", "alt_drink_1": "맥주"
                },
                {
                    "name": "두부김치", "spicy_level": 1,
                    "best_drink": "막걸리", "alt_drink_1": "소주"
                }
            ]),
        );
    }

    pub(super) fn write_images(&self) {
        write_json(
            &self.path(IMAGES_FILE),
            &json!([{ "item_name": "오늘 날씨는 어떤가요?", "image_filename": "weather.png" }]),
        );
    }

    pub(super) fn write_answers(&self, name: &str, answers: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        write_json(&path, answers);
        path
    }
}

/// Answers choosing the first option of every scoring question.
pub(super) fn sunny_answers() -> Value {
    json!({
        "1": "화창한 날",
        "2": "행복해요",
        "5": "소주",
        "11": "매콤하고 얼큰한 맛",
        "12": "튀기거나 볶은 음식"
    })
}
