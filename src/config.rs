use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

use crate::view::{CARD_DESCRIPTION_CHARS, RELATED_LIMIT};

#[derive(Deserialize)]
pub struct Api {
    pub base_url: String,
}

#[derive(Deserialize)]
pub struct Media {
    pub host: String,
}

#[derive(Deserialize, Default)]
pub struct Defaults {
    pub related_limit: Option<usize>,
    pub card_description_chars: Option<usize>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub api: Api,
    pub media: Media,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    pub fn related_limit(&self) -> usize {
        self.defaults.related_limit.unwrap_or(RELATED_LIMIT)
    }

    pub fn card_description_chars(&self) -> usize {
        self.defaults.card_description_chars.unwrap_or(CARD_DESCRIPTION_CHARS)
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}
