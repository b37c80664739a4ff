// src/config.rs
//
// Runtime configuration
//
// Values come from the process environment; a `.env` file in the working
// directory is loaded first when present. Anything unset falls back to a
// default. Anything set but unparsable is an error naming the variable.

use std::env;
use std::io;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DB_PATH_VAR: &str = "LANCASTER_DB_PATH";
pub const POOL_SIZE_VAR: &str = "LANCASTER_POOL_SIZE";
pub const SEED_VAR: &str = "LANCASTER_SEED_SAMPLE_DATA";

const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Marketing database file
    pub database_path: PathBuf,

    /// Max pooled SQLite connections
    pub pool_size: u32,

    /// Fill the store with the fixture records on startup
    pub seed_sample_data: bool,
}

impl AppConfig {
    /// Load from `.env` and the environment
    pub fn from_env() -> AppResult<Self> {
        load_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DB_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };

        let seed_sample_data = match lookup(SEED_VAR) {
            Some(raw) => parse_flag(SEED_VAR, &raw)?,
            None => true,
        };

        Ok(Self {
            database_path,
            pool_size,
            seed_sample_data,
        })
    }
}

/// A missing `.env` is normal; an unreadable or malformed one is an error
fn load_dotenv<T>(result: Result<T, dotenvy::Error>) -> AppResult<()> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::Other(format!("Could not load .env file: {}", e))),
    }
}

/// {APP_DATA}/lancaster/lancaster.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(data_dir.join("lancaster").join("lancaster.db"))
}

fn parse_pool_size(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AppError::Other(format!(
            "{} must be a positive integer, got '{}'",
            POOL_SIZE_VAR, raw
        ))),
    }
}

fn parse_flag(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Other(format!(
            "{} must be true or false, got '{}'",
            name, raw
        ))),
    }
}
