// File: src/persistence.rs
use crate::core::types::{CustomStyleRecipe, DRIFTED_INDEX};
use serde_json::Value;
use crate::error::{Result, StyleError};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key under which the liked style identifiers are stored.
pub const LIKED_KEY: &str = "likedStylesV1";
/// Key under which saved custom style recipes are stored.
pub const CUSTOM_KEY: &str = "customStylesV1";

/// String-keyed, string-valued storage. Reads are infallible: a missing or
/// unreadable value is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one JSON object on disk. Every `set` rewrites the file through
/// a temp file in the same directory, so a crash leaves the old file intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file starts empty; an unreadable
    /// or corrupt one is logged and also starts empty.
    pub fn open(path: &Path) -> Self {
        let values = match load_values(path) {
            Ok(values) => values,
            Err(StyleError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Ignoring unreadable store: {}", e);
                BTreeMap::new()
            }
        };
        Self { path: path.to_path_buf(), values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        save_values(&self.values, &self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = File::open(path).map_err(|source| StyleError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StyleError::Json { origin: path.display().to_string(), source })
}

fn save_values(values: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    let io_err = |source| StyleError::Io { path: path.to_path_buf(), source };
    let parent_dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(io_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer(&mut writer, values)
            .map_err(|source| StyleError::Json { origin: path.display().to_string(), source })?;
        writer.flush().map_err(io_err)?;
    }

    temp_file
        .persist(path)
        .map_err(|source| StyleError::Persist { path: path.to_path_buf(), source })?;
    Ok(())
}

/// Saved recipes in stored order. Each element is read on its own: one without
/// a usable name is skipped, and unusable indices or keys are kept as drift for
/// `Registries::resolve` to fall back on. Data that is not an array reads as empty.
pub fn load_customs(store: &impl KeyValueStore) -> Vec<CustomStyleRecipe> {
    let Some(raw) = store.get(CUSTOM_KEY) else {
        return Vec::new();
    };
    let entries: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Discarding corrupt {}: {}", CUSTOM_KEY, e);
            return Vec::new();
        }
    };
    entries
        .iter()
        .filter_map(|entry| {
            let recipe = recipe_from_value(entry);
            if recipe.is_none() {
                log::warn!("Skipping stored recipe without a name: {}", entry);
            }
            recipe
        })
        .collect()
}

fn recipe_from_value(entry: &Value) -> Option<CustomStyleRecipe> {
    let field = |names: &[&str]| names.iter().find_map(|n| entry.get(*n));
    let index = |names: &[&str]| {
        field(names)
            .and_then(Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(DRIFTED_INDEX)
    };

    let name = entry.get("name").and_then(Value::as_str)?;
    Some(CustomStyleRecipe {
        name: name.to_string(),
        base_index: index(&["baseIdx", "baseIndex"]),
        wrapper_category_key: field(&["wrapKey", "wrapperCategoryKey"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        wrapper_variant_index: index(&["wrapIdx", "wrapperVariantIndex"]),
    })
}

pub fn save_customs(store: &mut impl KeyValueStore, recipes: &[CustomStyleRecipe]) -> Result<()> {
    let raw = serde_json::to_string(recipes).map_err(|source| StyleError::Json {
        origin: CUSTOM_KEY.to_string(),
        source,
    })?;
    store.set(CUSTOM_KEY, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str) -> CustomStyleRecipe {
        CustomStyleRecipe {
            name: name.to_string(),
            base_index: 0,
            wrapper_category_key: "BOX".to_string(),
            wrapper_variant_index: 1,
        }
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        {
            let mut store = JsonFileStore::open(&path);
            store.set(LIKED_KEY, "[\"out_Bold_1\"]".to_string()).unwrap();
        }
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(LIKED_KEY).as_deref(), Some("[\"out_Bold_1\"]"));
    }

    #[test_log::test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(LIKED_KEY), None);
        // The next write replaces the corrupt file.
        store.set(LIKED_KEY, "[]".to_string()).unwrap();
        assert_eq!(JsonFileStore::open(&path).get(LIKED_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn customs_round_trip_in_order() {
        let mut store = MemoryStore::new();
        let saved = vec![recipe("one"), recipe("two")];
        save_customs(&mut store, &saved).unwrap();
        assert_eq!(load_customs(&store), saved);
        assert!(store.get(CUSTOM_KEY).unwrap().contains("\"wrapKey\":\"BOX\""));
    }

    #[test_log::test]
    fn corrupt_customs_read_as_empty() {
        let mut store = MemoryStore::new();
        assert!(load_customs(&store).is_empty());
        store.set(CUSTOM_KEY, "{\"name\":1}".to_string()).unwrap();
        assert!(load_customs(&store).is_empty());
    }

    #[test_log::test]
    fn one_bad_recipe_does_not_drop_the_rest() {
        let mut store = MemoryStore::new();
        let raw = r#"[
            {"name":"Custom Bold + BOX #2","baseIdx":0,"wrapKey":"BOX","wrapIdx":1},
            {"name":"Old","baseIdx":-1,"wrapKey":"BOX","wrapIdx":"2"},
            {"name":"Older","baseIdx":3},
            {"baseIdx":0,"wrapKey":"BOX","wrapIdx":0},
            7
        ]"#;
        store.set(CUSTOM_KEY, raw.to_string()).unwrap();

        let loaded = load_customs(&store);
        let names: Vec<&str> = loaded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Custom Bold + BOX #2", "Old", "Older"]);
        assert_eq!(loaded[0], recipe("Custom Bold + BOX #2"));
        assert_eq!(loaded[1].base_index, DRIFTED_INDEX);
        assert_eq!(loaded[1].wrapper_category_key, "BOX");
        assert_eq!(loaded[1].wrapper_variant_index, DRIFTED_INDEX);
        assert_eq!(loaded[2].base_index, 3);
        assert_eq!(loaded[2].wrapper_category_key, "");
    }
}
