use coachgg_data::ProfileData;
use coachgg_report::{aggregate, recent_trend_with_window, ReportConfig};

/// Dashboard-style summary table for the terminal.
pub fn print_overview(data: &ProfileData, config: &ReportConfig) {
    let stats = aggregate(&data.matches, &data.counters);

    println!("Player: {} ({})", data.profile.username, data.profile.role_label());
    println!(
        "Matches: {} | Wins: {} | Losses: {} | Win rate: {:.1}%",
        stats.total_matches, stats.wins, stats.losses, stats.win_rate_pct
    );
    println!(
        "Streak: {} | Hours: {:.1} | Achievements: {}",
        stats.current_streak,
        stats.hours_played,
        data.achievements.len()
    );

    if stats.per_game.is_empty() {
        println!("No matches recorded.");
        return;
    }

    let width = stats
        .per_game
        .iter()
        .map(|(game, _)| game.chars().count())
        .max()
        .unwrap_or(0)
        .max("Game".len());

    println!();
    println!("{:<width$} | {:>4} | {:>4} | {:>5} | {:>6}", "Game", "W", "L", "Total", "Win %");
    println!("{}-|------|------|-------|-------", "-".repeat(width));
    for (game, g) in stats.per_game.iter() {
        println!(
            "{:<width$} | {:>4} | {:>4} | {:>5} | {:>6.1}",
            game, g.wins, g.losses, g.total, g.win_rate_pct
        );
    }

    if stats.total_matches >= config.trend_min_matches {
        let recent = recent_trend_with_window(&data.matches, stats.win_rate_pct, config.trend_window);
        println!();
        println!(
            "Last {} matches: {:.1}% ({})",
            recent.window_size,
            recent.window_win_rate_pct,
            recent.trend.label()
        );
    }
}
