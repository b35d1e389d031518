use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::filters::MoneyFormat;
use crate::services::{LineChartConfig, PieConfig};

/// Display settings shared by all report views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub money: MoneyFormat,
    pub pie: PieConfig,
    pub line: LineChartConfig,
}

impl Config {
    /// Read overrides from the process environment, loading `.env` first.
    pub fn from_env() -> ReportResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides from a dotenv file without touching the process
    /// environment.
    pub fn from_env_file(path: &Path) -> ReportResult<Self> {
        let vars: HashMap<String, String> = dotenvy::from_path_iter(path)
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))?
            .collect::<Result<_, _>>()
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build a config from defaults plus any `LEDGERVIEW_*` values that
    /// `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(currency) = lookup("LEDGERVIEW_CURRENCY") {
            config.money.currency = currency;
        }
        if let Some(locale) = lookup("LEDGERVIEW_LOCALE") {
            config.money.locale = locale;
        }
        if let Some(width) = parse_var(&lookup, "LEDGERVIEW_CHART_WIDTH")? {
            config.line.width = width;
        }
        if let Some(height) = parse_var(&lookup, "LEDGERVIEW_CHART_HEIGHT")? {
            config.line.height = height;
        }
        if let Some(max_labels) = parse_var(&lookup, "LEDGERVIEW_MAX_X_LABELS")? {
            config.line.max_x_labels = max_labels;
        }

        config.validate()?;
        tracing::debug!(
            "Loaded report config: {} {}, line chart {}x{}",
            config.money.currency,
            config.money.locale,
            config.line.width,
            config.line.height
        );
        Ok(config)
    }

    /// Parse a JSON config; omitted keys keep their defaults.
    pub fn from_json(json: &str) -> ReportResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReportResult<()> {
        self.pie.validate()?;
        self.line.validate()
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> ReportResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ReportError::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(None),
    }
}
