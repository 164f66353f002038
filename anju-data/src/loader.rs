//! Read catalogue files from disk.

use std::io::BufReader;

use anju_core::{AnswerMap, DishRecord, ImageMap, Question, TypeProfile};
use anju_fs::open_utf8_file;
use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::{CatalogError, DishRow, ImageRow, QuestionRow, TypeProfileRow};

/// Default file name of the question catalogue.
pub const QUESTIONS_FILE: &str = "anju_question_list.json";
/// Default file name of the type-profile catalogue.
pub const TYPES_FILE: &str = "anju_type_profiles.json";
/// Default file name of the dish catalogue.
pub const DISHES_FILE: &str = "anju_db_extended.json";
/// Default file name of the image mapping.
pub const IMAGES_FILE: &str = "image_mapping_template.json";

/// Locations of the four catalogue files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Question catalogue.
    pub questions: Utf8PathBuf,
    /// Type-profile catalogue.
    pub types: Utf8PathBuf,
    /// Dish catalogue.
    pub dishes: Utf8PathBuf,
    /// Image mapping.
    pub images: Utf8PathBuf,
}

impl CatalogPaths {
    /// Default file names inside `dir`.
    ///
    /// # Examples
    /// ```
    /// use anju_data::CatalogPaths;
    /// use camino::Utf8Path;
    ///
    /// let paths = CatalogPaths::in_dir(Utf8Path::new("data"));
    /// assert_eq!(paths.dishes, "data/anju_db_extended.json");
    /// ```
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            questions: dir.join(QUESTIONS_FILE),
            types: dir.join(TYPES_FILE),
            dishes: dir.join(DISHES_FILE),
            images: dir.join(IMAGES_FILE),
        }
    }
}

/// All reference data for a quiz session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    /// Questions sorted by `q_no`.
    pub questions: Vec<Question>,
    /// Type profiles sorted by `type_no`.
    pub types: Vec<TypeProfile>,
    /// Dishes in file order.
    pub dishes: Vec<DishRecord>,
    /// Prompt-to-image mapping.
    pub images: ImageMap,
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path, kind: &'static str) -> Result<T, CatalogError> {
    let file = open_utf8_file(path).map_err(|source| CatalogError::Open {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Load the question catalogue, sorted by `q_no`.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be opened or is not a JSON
/// array of objects.
pub fn load_questions(path: &Utf8Path) -> Result<Vec<Question>, CatalogError> {
    let rows: Vec<QuestionRow> = read_json(path, "question catalogue")?;
    let mut questions: Vec<Question> = rows.into_iter().map(Question::from).collect();
    questions.sort_by_key(|question| question.q_no);
    Ok(questions)
}

/// Load the type-profile catalogue, sorted by `type_no`.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be opened or parsed.
pub fn load_type_profiles(path: &Utf8Path) -> Result<Vec<TypeProfile>, CatalogError> {
    let rows: Vec<TypeProfileRow> = read_json(path, "type catalogue")?;
    let mut profiles: Vec<TypeProfile> = rows.into_iter().map(TypeProfile::from).collect();
    profiles.sort_by_key(|profile| profile.type_no);
    Ok(profiles)
}

/// Load the dish catalogue in file order.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be opened or parsed.
pub fn load_dishes(path: &Utf8Path) -> Result<Vec<DishRecord>, CatalogError> {
    let rows: Vec<DishRow> = read_json(path, "dish catalogue")?;
    Ok(rows.into_iter().map(DishRecord::from).collect())
}

/// Load the prompt-to-image mapping.
///
/// Rows with a blank `item_name` are skipped. Later rows win when a prompt
/// is mapped twice.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be opened or parsed.
pub fn load_images(path: &Utf8Path) -> Result<ImageMap, CatalogError> {
    let rows: Vec<ImageRow> = read_json(path, "image mapping")?;
    let mut images = ImageMap::new();
    for (index, row) in rows.into_iter().enumerate() {
        let prompt = row.item_name.text();
        if prompt.trim().is_empty() {
            warn!("skipping image mapping row {index} with a blank item_name");
            continue;
        }
        if let Some(previous) = images.insert(&prompt, &row.image_filename.text()) {
            warn!("image mapping for {prompt:?} replaces {previous:?}");
        }
    }
    Ok(images)
}

/// Load all four catalogues.
///
/// # Errors
/// Returns the first [`CatalogError`] encountered.
pub fn load_catalogs(paths: &CatalogPaths) -> Result<Catalogs, CatalogError> {
    let catalogs = Catalogs {
        questions: load_questions(&paths.questions)?,
        types: load_type_profiles(&paths.types)?,
        dishes: load_dishes(&paths.dishes)?,
        images: load_images(&paths.images)?,
    };
    info!(
        "catalogues loaded: {} questions, {} types, {} dishes, {} image mappings",
        catalogs.questions.len(),
        catalogs.types.len(),
        catalogs.dishes.len(),
        catalogs.images.len()
    );
    Ok(catalogs)
}

/// Load a JSON object mapping question numbers to selected option text.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be opened or parsed.
pub fn load_answers(path: &Utf8Path) -> Result<AnswerMap, CatalogError> {
    read_json(path, "answer file")
}
