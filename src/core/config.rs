use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub players_path: PathBuf,
    pub ratings_path: PathBuf,
    pub tags_path: PathBuf,
    pub has_headers: bool,                      // first CSV row is a header

    // Prime bucket counts, well above the expected distinct keys
    pub player_table_size: usize,
    pub user_table_size: usize,

    pub min_ratings_for_top: u32,               // `top` ignores less-rated players
    pub user_result_limit: usize,               // rows returned by `user`
}

impl Default for Config {
    fn default() -> Self {
        Config {
            players_path: PathBuf::from("./data/players.csv"),
            ratings_path: PathBuf::from("./data/rating.csv"),
            tags_path: PathBuf::from("./data/tags.csv"),
            has_headers: true,

            player_table_size: 37_879,               // ~19k players
            user_table_size: 276_989,                // ~138k users

            min_ratings_for_top: 1000,
            user_result_limit: 20,
        }
    }
}

impl Config {
    /// Load a TOML file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io, format!("Cannot read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&text)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_table_size == 0 || self.user_table_size == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "Hash table sizes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.user_result_limit, 20);
        assert_eq!(config.min_ratings_for_top, 1000);
    }

    #[test]
    fn zero_table_size_is_rejected() {
        let config = Config { user_table_size: 0, ..Config::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("player_table_size = 101\nhas_headers = false\n").unwrap();
        assert_eq!(config.player_table_size, 101);
        assert!(!config.has_headers);
        assert_eq!(config.user_table_size, Config::default().user_table_size);
    }
}
