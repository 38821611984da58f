use chrono::{DateTime, Utc};
use coachgg_data::ProfileData;
use coachgg_schema::{AggregatedStats, ReportBlock};
use serde::Serialize;
use tracing::debug;

pub mod aggregate;
pub mod compose;
pub mod config;
mod error;
pub mod layout;
pub mod style;
pub mod summary;

pub use aggregate::{aggregate, aggregate_by_game, recent_trend, recent_trend_with_window, strength_tags, win_rate_pct};
pub use compose::ReportComposer;
pub use config::{PageConfig, ReportConfig};
pub use error::{ReportError, ReportErrorKind};
pub use layout::{export_file_name, export_file_name_with_extension, layout, LayoutSummary, PageGeometry, PageSurface, TextSurface};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub username: String,
    pub generated_at: DateTime<Utc>,
    pub stats: AggregatedStats,
    pub blocks: Vec<ReportBlock>,
}

pub fn build_report(
    data: &ProfileData,
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> ProfileReport {
    let stats = aggregate(&data.matches, &data.counters);
    let composer = ReportComposer::new(config.clone(), generated_at);
    let blocks = composer.compose(&data.profile, &stats, &data.matches, &data.achievements);

    ProfileReport {
        username: data.profile.username.clone(),
        generated_at,
        stats,
        blocks,
    }
}

impl ProfileReport {
    /// Lays the blocks out on `surface` using the configured page size.
    pub fn render<S: PageSurface + ?Sized>(&self, config: &ReportConfig, surface: &mut S) -> LayoutSummary {
        let summary = layout(&self.blocks, &PageGeometry::from(&config.page), surface);
        debug!(
            user = %self.username,
            pages = summary.pages,
            lines = summary.lines,
            "laid out report"
        );
        summary
    }

    pub fn render_text(&self, config: &ReportConfig) -> String {
        let mut surface = TextSurface::new();
        self.render(config, &mut surface);
        surface.into_string()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::new("E2002", format!("failed to serialize report: {e}")))
    }
}
