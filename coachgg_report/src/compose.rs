use std::fmt::Write;

use chrono::{DateTime, Utc};
use coachgg_data::{AchievementRecord, MatchRecord, UserProfile};
use coachgg_schema::{AggregatedStats, BlockKind, ReportBlock};
use tracing::debug;

use crate::{
    aggregate::{aggregate_by_game, recent_trend_with_window, strength_tags},
    config::ReportConfig,
    style::style_for,
    summary::recruitment_summary,
};

pub const SUBTITLE: &str = "Esports Player Profile";

/// Turns profile data into an ordered list of styled blocks.
///
/// The generation time is fixed at construction so composing is repeatable.
#[derive(Debug, Clone)]
pub struct ReportComposer {
    config: ReportConfig,
    generated_at: DateTime<Utc>,
}

struct Blocks(Vec<ReportBlock>);

impl Blocks {
    fn push(&mut self, kind: BlockKind, text: impl Into<String>) {
        self.0.push(ReportBlock {
            kind,
            text: text.into(),
            style: style_for(kind),
        });
    }

    fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        self.push(BlockKind::Field, format!("{label}: {value}"));
    }

    fn bullet(&mut self, text: &str) {
        self.push(BlockKind::Bullet, format!("• {text}"));
    }
}

/// chrono reports bad strftime patterns only while writing, so fall back to ISO dates.
fn format_time(at: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_err() {
        out = at.format("%Y-%m-%d").to_string();
    }
    out
}

impl ReportComposer {
    pub fn new(config: ReportConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            config,
            generated_at,
        }
    }

    pub fn compose(
        &self,
        user: &UserProfile,
        stats: &AggregatedStats,
        matches: &[MatchRecord],
        achievements: &[AchievementRecord],
    ) -> Vec<ReportBlock> {
        let cfg = &self.config;
        let mut out = Blocks(Vec::new());

        out.push(BlockKind::Title, user.username.as_str());
        out.push(BlockKind::Subtitle, SUBTITLE);

        out.push(BlockKind::SectionHeader, "Player Information");
        out.field("Username", &user.username);
        out.field("Role", user.role_label());
        out.field("Member Since", format_time(&user.created_at, &cfg.date_format));
        out.field(
            "Report Generated",
            format_time(&self.generated_at, &cfg.timestamp_format),
        );
        if let Some(bio) = user.bio_text() {
            out.field("Bio", bio);
        }

        out.push(BlockKind::SectionHeader, "Performance Statistics");
        out.field("Total Matches", stats.total_matches);
        out.field("Win Rate", format!("{:.1}%", stats.win_rate_pct));
        out.field("Wins / Losses", format!("{} / {}", stats.wins, stats.losses));
        out.field("Current Streak", stats.current_streak);
        out.field("Hours Played", format!("{:.1}", stats.hours_played));

        if !matches.is_empty() {
            out.push(BlockKind::SectionHeader, "Game Breakdown");
            for (game, g) in aggregate_by_game(matches).iter() {
                out.field(
                    game,
                    format!(
                        "{}W - {}L ({:.1}% win rate, {} matches)",
                        g.wins, g.losses, g.win_rate_pct, g.total
                    ),
                );
            }
        }

        if !matches.is_empty() && stats.total_matches >= cfg.trend_min_matches {
            let recent = recent_trend_with_window(matches, stats.win_rate_pct, cfg.trend_window);
            out.push(BlockKind::SectionHeader, "Recent Performance");
            out.field(
                &format!("Last {} Matches", recent.window_size),
                format!("{:.1}% win rate", recent.window_win_rate_pct),
            );
            out.field("Trend", recent.trend.label());
        }

        if !achievements.is_empty() {
            out.push(BlockKind::SectionHeader, "Achievements");
            out.field("Total Unlocked", achievements.len());
            for a in achievements.iter().take(cfg.max_achievements) {
                out.bullet(&a.title);
            }
        }

        let tags = strength_tags(stats, achievements.len());
        if !tags.is_empty() {
            out.push(BlockKind::SectionHeader, "Key Strengths");
            for tag in &tags {
                out.bullet(tag);
            }
        }

        out.push(BlockKind::SectionHeader, "Recruitment Summary");
        out.push(
            BlockKind::Paragraph,
            recruitment_summary(user, stats, achievements.len()),
        );

        out.push(BlockKind::Footer, cfg.attribution.as_str());
        out.push(
            BlockKind::Footer,
            format!("Generated on {}", format_time(&self.generated_at, &cfg.date_format)),
        );

        debug!(
            user = %user.username,
            blocks = out.0.len(),
            strengths = tags.len(),
            "composed profile report"
        );
        out.0
    }
}
