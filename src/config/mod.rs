use crate::errors::{AppError, AppResult};
use crate::models::{KnownLocations, SpeciesCatalog};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 5] = [
    "data_file",
    "project_title",
    "known_locations",
    "species",
    "bar_width",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_project_title")]
    pub project_title: String,
    #[serde(default)]
    pub known_locations: KnownLocations,
    #[serde(default)]
    pub species: SpeciesCatalog,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_data_file() -> String {
    Config::data_file_path().to_string_lossy().to_string()
}
fn default_project_title() -> String {
    "Alligator Creek Bird Monitoring Project".to_string()
}
fn default_bar_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            project_title: default_project_title(),
            known_locations: KnownLocations::default(),
            species: SpeciesCatalog::default(),
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbirdlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbirdlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbirdlog.conf")
    }

    /// Return the default path of the CSV backing store
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("bird_data.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Activity log path: the data file name with `.log` appended
    /// (`bird_data.csv` -> `bird_data.csv.log`), never the data file itself
    pub fn log_path(&self) -> PathBuf {
        let mut name = PathBuf::from(&self.data_file).into_os_string();
        name.push(".log");
        PathBuf::from(name)
    }

    /// Initialize the configuration directory and file.
    ///
    /// An existing configuration file is kept as is; with `custom_data`
    /// only its `data_file` key is rewritten.
    /// Returns the data file path that was configured.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let conf_path = Self::config_file();

        // data file: user provided (as given, ~ expanded)
        let custom_path = custom_data.map(|name| crate::utils::path::expand_tilde(&name));

        if conf_path.exists() {
            return match custom_path {
                Some(data_path) => {
                    if !is_test {
                        migrate::set_data_file(&conf_path, &data_path)?;
                        println!("✅ Config file updated: {:?}", conf_path);
                    }
                    Ok(data_path)
                }
                None => {
                    let current = Self::load_from(&conf_path)?;
                    Ok(crate::utils::path::expand_tilde(&current.data_file))
                }
            };
        }

        let data_path = custom_path.unwrap_or_else(Self::data_file_path);

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&conf_path)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", conf_path);
        }

        Ok(data_path)
    }
}
