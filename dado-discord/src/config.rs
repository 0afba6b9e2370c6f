use std::collections::HashSet;
use std::env;
use tracing::debug;
use tracing::warn;

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const MASTERS_VAR: &str = "DADO_MASTERS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("env var `DISCORD_TOKEN` is not set")]
    MissingToken,
    #[error("`{0}` in `DADO_MASTERS` is not a user id")]
    InvalidMaster(String),
}

/// Bot settings read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// Users allowed to run privileged commands, on top of the application owners
    pub masters: HashSet<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            warn!("No `.env` file, using the process environment only");
        }
        let token = env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingToken)?;
        let masters = parse_masters(&env::var(MASTERS_VAR).unwrap_or_default())?;
        debug!("Loaded `{}` master(s)", masters.len());
        Ok(Config { token, masters })
    }
}

/// Comma separated user ids, blanks ignored
pub fn parse_masters(raw: &str) -> Result<HashSet<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .map_err(|_| ConfigError::InvalidMaster(id.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_masters_test() {
        let masters = parse_masters("670255264112312322, 357209498286424064,").unwrap();
        assert_eq!(2, masters.len());
        assert!(masters.contains(&357209498286424064));
        assert!(parse_masters("").unwrap().is_empty());
        assert!(parse_masters("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_masters_rejects_garbage_test() {
        match parse_masters("12, mestre") {
            Err(ConfigError::InvalidMaster(id)) => assert_eq!("mestre", id),
            other => panic!("{other:?}"),
        }
    }
}
