use std::env;
use std::path::{Path, PathBuf};

use getset::Getters;
use thiserror::Error;

use crate::convert::layout::ColumnMap;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("実行ファイルにテキストファイルをドラッグ&ドロップしてください")]
    Usage,
    #[error("exeファイル実行パス取得失敗")]
    ExecutablePath(#[source] std::io::Error),
}

/// Settings for one conversion run.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct Config {
    input_path: PathBuf,
    /// Directory of the running executable; outputs never go to the working directory.
    output_dir: PathBuf,
    column_map: ColumnMap,
}

impl Config {
    pub fn new(input_path: PathBuf, output_dir: PathBuf, column_map: ColumnMap) -> Config {
        Config {
            input_path,
            output_dir,
            column_map,
        }
    }

    /// Builds the run settings from the full argument vector, program name included.
    pub fn from_args(args: &[String]) -> Result<Config, ConfigError> {
        let [_, input] = args else {
            return Err(ConfigError::Usage);
        };

        let exe = env::current_exe().map_err(ConfigError::ExecutablePath)?;
        let output_dir = exe.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        Ok(Config::new(PathBuf::from(input), output_dir, ColumnMap::default()))
    }
}
