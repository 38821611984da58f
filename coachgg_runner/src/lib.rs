use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use coachgg_data::{ProfileBundle, ProfileData, Session};
use coachgg_report::{export_file_name_with_extension, ReportConfig, ReportError};
use tracing::{debug, info, warn};

pub use coachgg_report::{build_report, ProfileReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => anyhow::bail!("unknown export format: {other} (expected text or json)"),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => f.write_str("text"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

pub fn load_bundle_from_path(path: impl AsRef<Path>) -> anyhow::Result<ProfileData> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read bundle: {}", path.display()))?;
    let bundle: ProfileBundle = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse bundle json: {}", path.display()))?;
    Ok(normalize(bundle))
}

pub fn load_bundle_from_str(json: &str) -> anyhow::Result<ProfileData> {
    let bundle: ProfileBundle = serde_json::from_str(json).context("failed to parse bundle json")?;
    Ok(normalize(bundle))
}

fn normalize(bundle: ProfileBundle) -> ProfileData {
    if bundle.profile.username.trim().is_empty() {
        warn!("bundle profile has an empty username");
    }
    let unnamed = bundle
        .matches
        .iter()
        .filter(|m| m.game_name.as_deref().map_or(true, |g| g.trim().is_empty()))
        .count();
    if unnamed > 0 {
        warn!(unnamed, "matches without a game name are grouped as Unknown Game");
    }
    bundle.normalize()
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<ReportConfig> {
    match path {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("config load failed: {}", path.display())),
        None => Ok(ReportConfig::default()),
    }
}

/// Writes the report for the session's own profile into `out_dir`.
pub fn export_report(
    session: &Session,
    data: &ProfileData,
    config: &ReportConfig,
    out_dir: &Path,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    session.ensure_user(&data.profile.username)?;
    debug!(
        user = %session.user_name,
        has_token = session.access_token().is_some(),
        "export session checked"
    );

    let report = build_report(data, config, generated_at);
    let body = match format {
        ExportFormat::Text => report.render_text(config),
        ExportFormat::Json => report.to_json()?,
    };

    let out_path = out_dir.join(export_file_name_with_extension(
        &data.profile.username,
        format.extension(),
    ));
    fs::write(&out_path, body).map_err(|e| {
        ReportError::new("E2001", format!("failed to write report: {e}"))
            .with_file(out_path.display().to_string())
    })?;

    info!(
        user = %data.profile.username,
        format = %format,
        path = %out_path.display(),
        "exported profile report"
    );
    Ok(out_path)
}
