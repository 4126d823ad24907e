// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::favorites::DEFAULT_FAVORITES_PATH;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data/f1_2025.json";
const DEFAULT_SEASON: &str = "2025";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Driver/constructor dataset file
    pub data_path: PathBuf,
    /// Favorites document
    pub favorites_path: PathBuf,
    /// Season shown when a request does not name one
    pub default_season: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
            default_season: DEFAULT_SEASON.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            data_path: path_var("F1_DATA_PATH", DEFAULT_DATA_PATH)?,
            favorites_path: path_var("FAVORITES_PATH", DEFAULT_FAVORITES_PATH)?,
            default_season: env::var("DEFAULT_SEASON")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SEASON.to_string()),
        })
    }
}

/// Read a path variable. Unset uses the default; set-but-blank is an error.
fn path_var(name: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable is set but empty: {0}")]
    Empty(&'static str),

    #[error("Environment variable is not valid unicode: {0}")]
    NotUnicode(&'static str),
}
