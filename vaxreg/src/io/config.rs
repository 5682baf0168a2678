//! Registry configuration stored in `vaxreg.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::date::Date;
use crate::core::types::Limits;
use crate::messages::Locale;
use crate::system::{DEFAULT_START_DATE, System};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "vaxreg.toml";

/// Registry configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults the
/// registry has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Message set used when no language argument is given.
    pub locale: Locale,

    /// Current date at startup, `dd-mm-yyyy`.
    pub start_date: String,

    pub limits: Limits,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            start_date: DEFAULT_START_DATE.to_string(),
            limits: Limits::default(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        self.start_date()?;
        if self.limits.max_batches == 0 {
            return Err(anyhow!("limits.max_batches must be > 0"));
        }
        if self.limits.max_batch_id_len == 0 {
            return Err(anyhow!("limits.max_batch_id_len must be > 0"));
        }
        if self.limits.max_vaccine_name_len == 0 {
            return Err(anyhow!("limits.max_vaccine_name_len must be > 0"));
        }
        if self.limits.initial_capacity == 0 {
            return Err(anyhow!("limits.initial_capacity must be > 0"));
        }
        Ok(())
    }

    /// Parsed, calendar-valid start date.
    pub fn start_date(&self) -> Result<Date> {
        let date: Date = self
            .start_date
            .parse()
            .with_context(|| format!("parse start_date '{}'", self.start_date))?;
        if !date.is_valid_calendar_date() {
            return Err(anyhow!("start_date '{}' is not a calendar date", self.start_date));
        }
        Ok(date)
    }

    /// Build an empty registry from this config.
    pub fn build_system(&self) -> Result<System> {
        self.validate()?;
        Ok(System::new(self.start_date()?, self.limits))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RegistryConfig::default()`.
pub fn load_config(path: &Path) -> Result<RegistryConfig> {
    if !path.exists() {
        let cfg = RegistryConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RegistryConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RegistryConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RegistryConfig::default());
        assert_eq!(cfg.start_date().expect("date"), Date::new(1, 1, 2025));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("vaxreg.toml");
        let cfg = RegistryConfig {
            locale: Locale::Pt,
            start_date: "15-03-2025".to_string(),
            limits: Limits {
                max_batches: 5,
                ..Limits::default()
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("vaxreg.toml");
        fs::write(&path, "locale = \"pt\"\n[limits]\nmax_batches = 3\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.locale, Locale::Pt);
        assert_eq!(cfg.limits.max_batches, 3);
        assert_eq!(cfg.limits.max_batch_id_len, 20);
        assert_eq!(cfg.start_date, "01-01-2025");
    }

    #[test]
    fn rejects_impossible_start_date() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("vaxreg.toml");
        fs::write(&path, "start_date = \"29-02-2025\"\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("not a calendar date"));
    }

    #[test]
    fn rejects_zero_limits() {
        let cfg = RegistryConfig {
            limits: Limits {
                initial_capacity: 0,
                ..Limits::default()
            },
            ..RegistryConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn build_system_starts_on_configured_date() {
        let cfg = RegistryConfig {
            start_date: "10-10-2030".to_string(),
            ..RegistryConfig::default()
        };
        let system = cfg.build_system().expect("system");
        assert_eq!(system.today(), Date::new(10, 10, 2030));
    }
}
