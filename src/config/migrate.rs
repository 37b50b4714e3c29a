//! Configuration file upkeep: detect keys missing from an older file and
//! fill them in with default values, leaving existing values alone.

use crate::config::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        // an empty file parses as Null
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys of [`CONFIG_KEYS`] absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(CONFIG_KEYS.to_vec());
    }

    let map = read_mapping(path)?;
    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add every missing key with its default value and rewrite the file.
///
/// Returns the keys that were added; an empty list means nothing changed
/// and the file was not touched.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = if path.exists() {
        read_mapping(path)?
    } else {
        Mapping::new()
    };

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;

    Ok(missing)
}

/// Point the file at a new data file, leaving every other key untouched.
pub fn set_data_file(path: &Path, data_file: &Path) -> AppResult<()> {
    let mut map = read_mapping(path)?;
    map.insert(
        Value::String("data_file".to_string()),
        Value::String(data_file.to_string_lossy().to_string()),
    );
    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    Ok(())
}
