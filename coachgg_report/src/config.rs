use std::{fs, path::Path};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::ReportError;

pub const DEFAULT_TREND_WINDOW: usize = 10;
pub const DEFAULT_TREND_MIN_MATCHES: u32 = 5;
pub const DEFAULT_MAX_ACHIEVEMENTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        // A4 portrait
        Self {
            width_pt: 595.0,
            height_pt: 842.0,
            margin_pt: 50.0,
        }
    }
}

/// Report tunables. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub trend_window: usize,
    pub trend_min_matches: u32,
    pub max_achievements: usize,
    pub attribution: String,
    pub date_format: String,
    pub timestamp_format: String,
    pub page: PageConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trend_window: DEFAULT_TREND_WINDOW,
            trend_min_matches: DEFAULT_TREND_MIN_MATCHES,
            max_achievements: DEFAULT_MAX_ACHIEVEMENTS,
            attribution: "Generated by CoachGG".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            timestamp_format: "%m/%d/%Y %H:%M UTC".to_string(),
            page: PageConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|e| {
            ReportError::new("E1001", format!("failed to read config: {e}"))
                .with_file(path.display().to_string())
        })?;
        Self::from_toml_str(&src).map_err(|e| e.with_file(path.display().to_string()))
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ReportError> {
        let config: ReportConfig = toml::from_str(src)
            .map_err(|e| ReportError::new("E1002", format!("invalid config toml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.trend_window == 0 {
            return Err(ReportError::new("E1003", "trend_window must be at least 1")
                .with_key("trend_window"));
        }
        if self.trend_min_matches == 0 {
            return Err(ReportError::new("E1003", "trend_min_matches must be at least 1")
                .with_key("trend_min_matches"));
        }
        for (key, pattern) in [
            ("date_format", &self.date_format),
            ("timestamp_format", &self.timestamp_format),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(
                    ReportError::new("E1003", format!("invalid {key} pattern: {pattern:?}"))
                        .with_key(key),
                );
            }
        }
        let page = &self.page;
        if page.margin_pt.is_nan() || page.margin_pt < 0.0 {
            return Err(ReportError::new("E1003", "page.margin_pt must not be negative")
                .with_key("page.margin_pt"));
        }
        let inner_width = page.width_pt - page.margin_pt * 2.0;
        let inner_height = page.height_pt - page.margin_pt * 2.0;
        if inner_width.is_nan() || inner_height.is_nan() || inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ReportError::new(
                "E1003",
                format!(
                    "page {}x{}pt leaves no room inside {}pt margins",
                    page.width_pt, page.height_pt, page.margin_pt
                ),
            )
            .with_key("page"));
        }
        Ok(())
    }
}
