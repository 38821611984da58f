use coachgg_data::{MatchRecord, PlayerCounters};
use coachgg_schema::{AggregatedStats, GameBreakdown, RecentPerformance, Trend};
use tracing::debug;

use crate::config::DEFAULT_TREND_WINDOW;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `wins / total` as a percentage with one decimal; zero when `total` is zero.
pub fn win_rate_pct(wins: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(f64::from(wins) / f64::from(total) * 100.0)
}

pub fn aggregate_by_game(matches: &[MatchRecord]) -> GameBreakdown {
    let mut breakdown = GameBreakdown::new();
    for m in matches {
        let bucket = breakdown.entry_mut(m.game_label());
        if m.result.is_win() {
            bucket.wins += 1;
        } else {
            bucket.losses += 1;
        }
        bucket.total += 1;
    }
    for bucket in breakdown.values_mut() {
        bucket.win_rate_pct = win_rate_pct(bucket.wins, bucket.total);
    }
    breakdown
}

/// Overall stats shared by the dashboard overview and the report.
pub fn aggregate(matches: &[MatchRecord], counters: &PlayerCounters) -> AggregatedStats {
    let wins = matches.iter().filter(|m| m.result.is_win()).count() as u32;
    let total_matches = matches.len() as u32;
    let per_game = aggregate_by_game(matches);

    debug!(
        total_matches,
        wins,
        games = per_game.len(),
        "aggregated match history"
    );

    AggregatedStats {
        total_matches,
        wins,
        losses: total_matches - wins,
        win_rate_pct: win_rate_pct(wins, total_matches),
        current_streak: counters.current_streak,
        hours_played: counters.hours_played,
        per_game,
    }
}

pub fn recent_trend(matches: &[MatchRecord], overall_win_rate_pct: f64) -> RecentPerformance {
    recent_trend_with_window(matches, overall_win_rate_pct, DEFAULT_TREND_WINDOW)
}

/// Compares the newest `window` matches against the overall rate.
/// `matches` must be ordered most-recent-first.
pub fn recent_trend_with_window(
    matches: &[MatchRecord],
    overall_win_rate_pct: f64,
    window: usize,
) -> RecentPerformance {
    let recent = &matches[..matches.len().min(window)];
    let wins = recent.iter().filter(|m| m.result.is_win()).count() as u32;
    let window_win_rate_pct = win_rate_pct(wins, recent.len() as u32);

    let trend = if window_win_rate_pct > overall_win_rate_pct {
        Trend::Improving
    } else if window_win_rate_pct < overall_win_rate_pct {
        Trend::Declining
    } else {
        Trend::Stable
    };

    RecentPerformance {
        window_size: recent.len(),
        window_win_rate_pct,
        trend,
    }
}

pub fn strength_tags(stats: &AggregatedStats, achievements_count: usize) -> Vec<String> {
    let mut tags = Vec::new();
    let rate = stats.win_rate_pct;

    if rate >= 70.0 {
        tags.push(format!(
            "Exceptional win rate ({rate:.1}%) — consistent performance"
        ));
    } else if rate >= 55.0 {
        tags.push(format!("Strong win rate ({rate:.1}%) — above average"));
    } else if rate >= 45.0 {
        tags.push(format!(
            "Balanced performance ({rate:.1}%) — room for improvement"
        ));
    }

    if stats.current_streak >= 5 {
        tags.push(format!(
            "On a {}-game win streak — momentum",
            stats.current_streak
        ));
    }

    if stats.total_matches >= 100 {
        tags.push(format!("Extensive experience ({} games)", stats.total_matches));
    } else if stats.total_matches >= 50 {
        tags.push(format!("Solid experience ({} games)", stats.total_matches));
    }

    if achievements_count >= 10 {
        tags.push(format!("Achievement-oriented ({achievements_count} unlocked)"));
    }

    tags
}
