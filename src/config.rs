use std::env;
use std::path::PathBuf;

const DEFAULT_MAP_NAME: &str = "default";
const DEFAULT_MAP_DIR: &str = "maps";
const DEFAULT_LOG_PATH: &str = "console-world.log";
const LOG_PATH_VAR: &str = "CONSOLE_WORLD_LOG";

/// Where to find the map and where to write the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub map_name: String,
    pub map_dir: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// `console-world [MAP_NAME] [MAP_DIR]`, log path from `CONSOLE_WORLD_LOG`.
    pub fn from_env() -> Self {
        Self::from_parts(env::args().skip(1), env::var_os(LOG_PATH_VAR).map(PathBuf::from))
    }

    pub fn from_parts<I>(args: I, log_override: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let map_name = args
            .next()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAP_NAME.to_string());
        let map_dir = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_DIR));

        Self {
            map_name,
            map_dir,
            log_path: log_override.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
        }
    }

    pub fn map_path(&self) -> PathBuf {
        if self.map_name.ends_with(".txt") {
            self.map_dir.join(&self.map_name)
        } else {
            self.map_dir.join(format!("{}.txt", self.map_name))
        }
    }
}
