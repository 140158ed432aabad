// src/config.rs
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const AUCTIONS_PATH_VAR: &str = "AUCTION_BATCH_AUCTIONS";
pub const PAYMENTS_PATH_VAR: &str = "AUCTION_BATCH_PAYMENTS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown job: {0} (expected close, pay or all)")]
    UnknownJob(String),
}

/// Which batch pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Job {
    Close,
    Pay,
    #[default]
    All,
}

impl Job {
    pub fn closes_auctions(&self) -> bool {
        matches!(self, Job::Close | Job::All)
    }

    pub fn generates_payments(&self) -> bool {
        matches!(self, Job::Pay | Job::All)
    }
}

impl FromStr for Job {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close" => Ok(Job::Close),
            "pay" => Ok(Job::Pay),
            "all" => Ok(Job::All),
            _ => Err(ConfigError::UnknownJob(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub job: Job,
    pub auctions_path: PathBuf,
    pub payments_path: PathBuf,
}

impl BatchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let job = std::env::args().nth(1);
        Self::from_vars(job.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds the config from a job argument and a variable lookup.
    pub fn from_vars<F>(job: Option<&str>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let job = match job {
            Some(name) => name.parse()?,
            None => Job::default(),
        };

        Ok(BatchConfig {
            job,
            auctions_path: var(AUCTIONS_PATH_VAR)
                .unwrap_or_else(|| "auctions.json".to_string())
                .into(),
            payments_path: var(PAYMENTS_PATH_VAR)
                .unwrap_or_else(|| "payments.json".to_string())
                .into(),
        })
    }
}
