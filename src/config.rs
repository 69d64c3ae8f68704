//! Runtime configuration: environment variables and command-line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{GameKind, DEFAULT_MAX_TIME_SECONDS, MAX_TIME_CEILING_SECONDS};

pub const DEFAULT_STORE_PATH: &str = "kids-quiz.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const USAGE: &str = "\
usage: kids-quiz [--game math|letters|vocabulary|translation] [--name NAME]
                 [--timer | --no-timer] [--seed N] [--leaderboard]

environment:
  KIDS_QUIZ_STORE     key-value file (default kids-quiz.json)
  KIDS_QUIZ_SEED      question seed
  KIDS_QUIZ_MAX_TIME  seconds per question (1-300, default 20)
  KIDS_QUIZ_LOG_PATH  write logs to this file
  KIDS_QUIZ_LOG       log filter (default info)";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub seed: Option<u32>,
    pub max_time: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            seed: None,
            max_time: DEFAULT_MAX_TIME_SECONDS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unset, blank or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let store_path = var("KIDS_QUIZ_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
        let seed = var("KIDS_QUIZ_SEED").and_then(|s| s.parse().ok());
        let max_time = var("KIDS_QUIZ_MAX_TIME")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|t| t.clamp(1, MAX_TIME_CEILING_SECONDS))
            .unwrap_or(DEFAULT_MAX_TIME_SECONDS);
        let log_path = var("KIDS_QUIZ_LOG_PATH");
        let log_filter = var("KIDS_QUIZ_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            store_path,
            seed,
            max_time,
            log_path,
            log_filter,
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub game: Option<GameKind>,
    pub name: Option<String>,
    pub timer: Option<bool>,
    pub seed: Option<u32>,
    pub leaderboard: bool,
    pub help: bool,
}

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--game" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --game"))?;
                cli.game = Some(GameKind::from_str(v).ok_or_else(|| anyhow!("unknown game: {}", v))?);
            }
            "--name" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --name"))?;
                cli.name = Some(v.clone());
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                cli.seed = Some(v.parse::<u32>().map_err(|_| anyhow!("invalid --seed value: {}", v))?);
            }
            "--timer" => cli.timer = Some(true),
            "--no-timer" => cli.timer = Some(false),
            "--leaderboard" => cli.leaderboard = true,
            "-h" | "--help" => cli.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(cli)
}
