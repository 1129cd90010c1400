//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Narration lines shown under the battle panels.
    pub log_tail: usize,
    /// Custom roster replacing the built-in one.
    pub roster_path: Option<PathBuf>,
    /// Seed for opponent selection and the automated opponent.
    pub seed: Option<u64>,
    /// Diagnostics log directory override.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_LOG_TAIL: usize = 15;
    pub const MIN_LOG_TAIL: usize = 3;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MINIMON_LOG_TAIL` - Narration lines shown (default: 15, min: 3)
    /// - `MINIMON_ROSTER` - Path to a RON roster file
    /// - `MINIMON_SEED` - Seed for the automated opponent
    /// - `MINIMON_LOG_DIR` - Directory for the diagnostics log
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tail) = read_env::<usize>("MINIMON_LOG_TAIL") {
            config.log_tail = tail.max(Self::MIN_LOG_TAIL);
        }
        config.roster_path = read_env::<PathBuf>("MINIMON_ROSTER");
        config.seed = read_env::<u64>("MINIMON_SEED");
        config.log_dir = read_env::<PathBuf>("MINIMON_LOG_DIR");

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_tail: Self::DEFAULT_LOG_TAIL,
            roster_path: None,
            seed: None,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_roster_and_entropy() {
        let config = CliConfig::default();
        assert_eq!(config.log_tail, CliConfig::DEFAULT_LOG_TAIL);
        assert!(config.roster_path.is_none());
        assert!(config.seed.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn missing_or_malformed_variables_are_ignored() {
        assert_eq!(read_env::<u64>("MINIMON_TEST_UNSET_VARIABLE"), None);
    }
}
