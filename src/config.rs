use crate::error::ForgeError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    /// JSON object mapping single characters to replacement strings.
    pub char_map: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:secrets.db".to_string(),
            char_map: "{}".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("").only(&["database_url", "char_map", "loglevel"]))
            .extract()
    }

    /// Parse the configured substitution map into its runtime form.
    /// Keys longer than one character can never match a template character
    /// and are skipped.
    pub fn substitution_map(&self) -> Result<HashMap<char, String>, ForgeError> {
        let raw: HashMap<String, String> = serde_json::from_str(&self.char_map)?;

        let mut map = HashMap::with_capacity(raw.len());
        for (key, replacement) in raw {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    map.insert(c, replacement);
                }
                _ => warn!(key = %key, "skipping substitution map entry with non-single-character key"),
            }
        }
        Ok(map)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid environment configuration ({e}); falling back to defaults");
        Config::default()
    })
});
