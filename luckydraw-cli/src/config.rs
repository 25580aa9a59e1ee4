use anyhow::{Context, Result};
use luckydraw_core::{default_tiers, load_tiers_file, EngineConfig, PrizeTier};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub tiers_file: Option<PathBuf>,
    pub tiers: Vec<PrizeTier>,
    pub delay_ms: u64,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tiers_file: None,
            tiers: Vec::new(),
            delay_ms: 2000,
            seed: None,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// `--tier` flags win over `--tiers-file`, which wins over the built-in mix.
    pub fn resolve_tiers(&self) -> Result<Vec<PrizeTier>> {
        if !self.tiers.is_empty() {
            return Ok(self.tiers.clone());
        }

        if let Some(path) = &self.tiers_file {
            return load_tiers_file(path)
                .with_context(|| format!("Failed to load tiers from {}", path.display()));
        }

        Ok(default_tiers())
    }

    /// `EnvFilter` directives for this crate and the engine.
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        format!("luckydraw={},luckydraw_core={}", level, level)
    }

    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig::new(self.resolve_tiers()?)
            .with_reveal_delay(Duration::from_millis(self.delay_ms));
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_to_builtin_tiers() {
        let config = CliConfig::default();
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.tiers, default_tiers());
        assert_eq!(engine.reveal_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_verbose_switches_log_level() {
        let quiet = CliConfig::default();
        assert_eq!(quiet.log_filter(), "luckydraw=warn,luckydraw_core=warn");

        let verbose = CliConfig {
            verbose: true,
            ..CliConfig::default()
        };
        assert_eq!(verbose.log_filter(), "luckydraw=debug,luckydraw_core=debug");
    }

    #[test]
    fn test_tiers_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"amount": 100, "initial_count": 2}}, {{"amount": 50, "initial_count": 1}}]"#
        )
        .unwrap();

        let config = CliConfig {
            tiers_file: Some(file.path().to_path_buf()),
            delay_ms: 0,
            ..CliConfig::default()
        };
        let engine = config.engine_config().unwrap();
        assert_eq!(
            engine.tiers,
            vec![
                PrizeTier::new(100, 2).unwrap(),
                PrizeTier::new(50, 1).unwrap()
            ]
        );
        assert_eq!(engine.reveal_delay, Duration::ZERO);
    }

    #[test]
    fn test_tier_flags_override_file() {
        let config = CliConfig {
            tiers_file: Some(PathBuf::from("/does/not/exist.json")),
            tiers: vec!["888:1".parse().unwrap()],
            ..CliConfig::default()
        };
        assert_eq!(config.resolve_tiers().unwrap().len(), 1);
    }

    #[test]
    fn test_bad_tiers_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"amount": 100, "initial_count": -3}}]"#).unwrap();

        let config = CliConfig {
            tiers_file: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };
        let err = config.engine_config().unwrap_err();
        assert!(format!("{:#}", err).contains("cannot be negative"));
    }
}
