use super::*;
use anju_core::DishRecord;
use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn catalog_dir() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    (dir, path)
}

fn write_json(dir: &Utf8Path, name: &str, value: &serde_json::Value) -> Utf8PathBuf {
    let path = dir.join(name);
    fs::write(&path, value.to_string()).expect("write fixture");
    path
}

#[rstest]
#[case(" 3 ", 3)]
#[case("2.9", 2)]
#[case("-1.5", -1)]
#[case("", 0)]
#[case("   ", 0)]
#[case("nan", 0)]
#[case("inf", 0)]
#[case("매움", 0)]
fn parses_numbers_or_zero(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(parse_number_or_zero(raw), expected);
}

#[rstest]
#[case(json!("소주"), "소주")]
#[case(json!(3), "3")]
#[case(json!(1.5), "1.5")]
#[case(json!(true), "true")]
#[case(json!(null), "")]
#[case(json!(["a"]), "")]
fn renders_cells_as_text(#[case] value: serde_json::Value, #[case] expected: &str) {
    assert_eq!(Cell::new(value).text(), expected);
}

#[rstest]
#[case(json!(2), 2)]
#[case(json!(2.7), 2)]
#[case(json!("4"), 4)]
#[case(json!(-3), 0)]
#[case(json!("매움"), 0)]
#[case(json!(null), 0)]
fn counts_cells(#[case] value: serde_json::Value, #[case] expected: u32) {
    assert_eq!(Cell::new(value).count(), expected);
}

#[rstest]
#[case(json!(1), true)]
#[case(json!("1"), true)]
#[case(json!(1.0), true)]
#[case(json!(true), true)]
#[case(json!(0), false)]
#[case(json!(2), false)]
#[case(json!("예"), false)]
#[case(json!(null), false)]
fn reads_flags(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(Cell::new(value).flag(), expected);
}

#[rstest]
fn converts_dish_rows_with_tolerant_defaults() {
    let row: DishRow = serde_json::from_value(json!({
        "name": "김치전",
        "spicy_level": "매움",
        "is_soup": 0,
        "is_fried": "1",
        "best_drink": "막걸리"
    }))
    .expect("row parses");
    let dish = DishRecord::from(row);
    assert_eq!(
        dish,
        DishRecord::new("김치전").fried().with_best_drink("막걸리")
    );
}

#[rstest]
fn converts_question_rows_keeping_raw_options() {
    let row: QuestionRow = serde_json::from_value(json!({
        "q_no": 5.0,
        "part": "술",
        "question": "오늘 마실 술은?",
        "option_1": "소주",
        "option_2": "맥주",
        "option_3": null,
        "option_4": "nan"
    }))
    .expect("row parses");
    let question = anju_core::Question::from(row);
    assert_eq!(question.q_no, 5);
    assert_eq!(question.options().collect::<Vec<_>>(), vec!["소주", "맥주"]);
}

#[rstest]
fn loads_questions_in_q_no_order(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = write_json(
        &dir,
        QUESTIONS_FILE,
        &json!([
            { "q_no": 12, "question": "조리법은?" },
            { "q_no": "1", "question": "날씨는?" },
            { "q_no": 5, "question": "술은?" }
        ]),
    );
    let questions = load_questions(&path).expect("questions load");
    let order: Vec<u32> = questions.iter().map(|question| question.q_no).collect();
    assert_eq!(order, vec![1, 5, 12]);
}

#[rstest]
fn loads_profiles_in_type_order(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = write_json(
        &dir,
        TYPES_FILE,
        &json!([
            { "type_no": 3, "keyword": "셋", "core_combo": "맥주" },
            { "type_no": 1, "keyword": "하나", "core_combo": "소주" }
        ]),
    );
    let profiles = load_type_profiles(&path).expect("profiles load");
    let order: Vec<i64> = profiles.iter().map(|profile| profile.type_no).collect();
    assert_eq!(order, vec![1, 3]);
}

#[rstest]
fn skips_blank_image_rows_and_keeps_last_duplicate(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = write_json(
        &dir,
        IMAGES_FILE,
        &json!([
            { "item_name": "  ", "image_filename": "blank.png" },
            { "item_name": "날씨는?", "image_filename": "old.png" },
            { "item_name": "날씨는?", "image_filename": "weather.png" }
        ]),
    );
    let images = load_images(&path).expect("images load");
    assert_eq!(images.len(), 1);
    assert_eq!(images.image_for("날씨는?"), Some("weather.png"));
}

#[rstest]
fn loads_answer_objects(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = write_json(&dir, "answers.json", &json!({ "1": "화창한 날", "5": "소주" }));
    let answers = load_answers(&path).expect("answers load");
    assert_eq!(answers.text(5), "소주");
    assert_eq!(answers.text(2), "");
}

#[rstest]
fn reports_missing_files_with_their_path(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = dir.join(DISHES_FILE);
    let err = load_dishes(&path).expect_err("missing file should fail");
    assert!(matches!(err, CatalogError::Open { .. }), "unexpected error: {err:?}");
    assert_eq!(err.path(), &path);
}

#[rstest]
fn reports_malformed_catalogues(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    let path = dir.join(DISHES_FILE);
    fs::write(&path, "{ not json").expect("write fixture");
    let err = load_dishes(&path).expect_err("malformed file should fail");
    assert!(matches!(err, CatalogError::Parse { .. }), "unexpected error: {err:?}");
}

#[rstest]
fn loads_all_catalogues_from_a_directory(catalog_dir: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = catalog_dir;
    write_json(&dir, QUESTIONS_FILE, &json!([{ "q_no": 1, "question": "날씨는?" }]));
    write_json(&dir, TYPES_FILE, &json!([{ "type_no": 1, "keyword": "하나" }]));
    write_json(&dir, DISHES_FILE, &json!([{ "name": "치킨", "is_fried": 1 }]));
    write_json(&dir, IMAGES_FILE, &json!([]));

    let catalogs = load_catalogs(&CatalogPaths::in_dir(&dir)).expect("catalogues load");
    assert_eq!(catalogs.questions.len(), 1);
    assert_eq!(catalogs.types.len(), 1);
    assert_eq!(catalogs.dishes, vec![DishRecord::new("치킨").fried()]);
    assert!(catalogs.images.is_empty());
}
