use serde::de::DeserializeOwned;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    error::LoadError,
    models::{Catalog, MenuItem, SpicyLabels, SpicyLevel},
};

/// File holding the spiciness labels inside a data directory
pub const SPICY_LABELS_FILE: &str = "spicy_emoji.json";

/// Category to file mapping of the bundled data directory
pub const DEFAULT_CATEGORY_FILES: &[(&str, &str)] = &[
    ("🇰🇷한식", "korean.json"),
    ("🇨🇳중식", "chinese.json"),
    ("🇯🇵일식", "japanese.json"),
    ("🧑‍🍳양식", "western.json"),
    ("🍖고기구이", "grilled_meat.json"),
    ("🌏동남아음식", "southeast_asian.json"),
    ("🍛인도음식", "indian.json"),
    ("🐟🍖날것", "raw.json"),
];

/// A category backed by a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFile {
    pub category: String,
    pub path: PathBuf,
}

/// Where the catalog comes from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// An in-memory table, used as is
    Table(Catalog),
    /// One JSON file per category, loaded in list order
    Files(Vec<CategoryFile>),
}

impl CatalogSource {
    /// Builds a file source for the default category layout under `dir`
    pub fn data_dir(dir: &Path) -> Self {
        let files = DEFAULT_CATEGORY_FILES
            .iter()
            .map(|(category, file)| CategoryFile {
                category: category.to_string(),
                path: dir.join(file),
            })
            .collect();
        CatalogSource::Files(files)
    }
}

/// Loads the catalog. A category whose file is missing or malformed is kept
/// with no items; loading itself never fails.
pub fn load_catalog(source: CatalogSource) -> Catalog {
    let files = match source {
        CatalogSource::Table(catalog) => return catalog,
        CatalogSource::Files(files) => files,
    };

    let catalog: Catalog = files
        .into_iter()
        .map(|CategoryFile { category, path }| {
            let items = match read_json::<Vec<MenuItem>>(&path) {
                Ok(items) => {
                    tracing::debug!(category = %category, count = items.len(), "Loaded category");
                    items
                }
                Err(e) => {
                    tracing::warn!(category = %category, error = %e, "Using empty category");
                    Vec::new()
                }
            };
            (category, items)
        })
        .collect();

    tracing::info!(
        categories = catalog.len(),
        menus = catalog.menu_count(),
        "Catalog loaded"
    );

    catalog
}

/// Loads spiciness labels from `path`, falling back to the default table when
/// no path is given or the file is missing, malformed or empty.
pub fn load_spicy_labels(path: Option<&Path>) -> SpicyLabels {
    let Some(path) = path else {
        return SpicyLabels::default();
    };

    match read_json::<BTreeMap<u8, String>>(path) {
        Ok(labels) if labels.is_empty() => {
            tracing::debug!(path = %path.display(), "Label file is empty, using defaults");
            SpicyLabels::default()
        }
        Ok(labels) => labels
            .into_iter()
            .map(|(level, label)| (SpicyLevel(level), label))
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Using default spicy labels");
            SpicyLabels::default()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn file(category: &str, path: PathBuf) -> CategoryFile {
        CategoryFile {
            category: category.to_string(),
            path,
        }
    }

    #[test]
    fn test_table_source_is_returned_unchanged() {
        let catalog = Catalog::builtin();
        assert_eq!(load_catalog(CatalogSource::Table(catalog.clone())), catalog);
    }

    #[test]
    fn test_loads_category_files_in_order() {
        let dir = TempDir::new().unwrap();
        let korean = write(
            &dir,
            "korean.json",
            r#"[{"name": "김치찌개", "spicy_level": 2}, {"name": "불고기", "spicy_level": 0}]"#,
        );
        let japanese = write(&dir, "japanese.json", r#"[{"name": "초밥", "spicy_level": 0}]"#);

        let catalog = load_catalog(CatalogSource::Files(vec![
            file("한식", korean),
            file("일식", japanese),
        ]));

        assert_eq!(catalog.categories().collect::<Vec<_>>(), vec!["한식", "일식"]);
        assert_eq!(
            catalog.items("한식").unwrap(),
            &[MenuItem::new("김치찌개", 2), MenuItem::new("불고기", 0)]
        );
        assert_eq!(catalog.items("일식").unwrap(), &[MenuItem::new("초밥", 0)]);
    }

    #[test]
    fn test_missing_file_yields_empty_category() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(CatalogSource::Files(vec![file(
            "한식",
            dir.path().join("nope.json"),
        )]));

        assert!(catalog.contains_category("한식"));
        assert!(catalog.items("한식").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_category() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "broken.json", r#"[{"name": "짬뽕", "spicy_level": "#);
        let wrong_shape = write(&dir, "shape.json", r#"[{"title": "짬뽕"}]"#);
        let ok = write(&dir, "ok.json", r#"[{"name": "짜장면", "spicy_level": 0}]"#);

        let catalog = load_catalog(CatalogSource::Files(vec![
            file("중식", broken),
            file("양식", wrong_shape),
            file("일식", ok),
        ]));

        assert_eq!(catalog.len(), 3);
        assert!(catalog.items("중식").unwrap().is_empty());
        assert!(catalog.items("양식").unwrap().is_empty());
        assert_eq!(catalog.items("일식").unwrap().len(), 1);
    }

    #[test]
    fn test_data_dir_uses_default_layout() {
        let CatalogSource::Files(files) = CatalogSource::data_dir(Path::new("/srv/menus")) else {
            panic!("expected a file source");
        };

        assert_eq!(files.len(), DEFAULT_CATEGORY_FILES.len());
        assert_eq!(files[0].category, "🇰🇷한식");
        assert_eq!(files[0].path, PathBuf::from("/srv/menus/korean.json"));
        assert_eq!(files[7].path, PathBuf::from("/srv/menus/raw.json"));
    }

    #[test]
    fn test_bundled_data_directory_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalog = load_catalog(CatalogSource::data_dir(&dir));

        assert_eq!(catalog.len(), DEFAULT_CATEGORY_FILES.len());
        for (category, items) in catalog.iter() {
            assert!(!items.is_empty(), "{category} should have menus");
        }

        let labels = load_spicy_labels(Some(&dir.join(SPICY_LABELS_FILE)));
        assert_eq!(labels, SpicyLabels::default());
    }

    #[test]
    fn test_spicy_labels_default_without_path() {
        assert_eq!(load_spicy_labels(None), SpicyLabels::default());
    }

    #[test]
    fn test_spicy_labels_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "labels.json", r#"{"0": "mild", "1": "medium", "4": "extreme"}"#);

        let labels = load_spicy_labels(Some(&path));
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.label(SpicyLevel(4)), "extreme");
        assert_eq!(labels.label(SpicyLevel(2)), "2");
    }

    #[test]
    fn test_spicy_labels_fallbacks() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let malformed = write(&dir, "malformed.json", r#"{"zero": "mild"}"#);
        let empty = write(&dir, "empty.json", "{}");

        for path in [missing, malformed, empty] {
            assert_eq!(load_spicy_labels(Some(&path)), SpicyLabels::default());
        }
    }
}
