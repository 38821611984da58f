use coachgg_data::UserProfile;
use coachgg_schema::AggregatedStats;

/// Recruitment paragraph closing the report.
pub fn recruitment_summary(
    user: &UserProfile,
    stats: &AggregatedStats,
    achievements_count: usize,
) -> String {
    let mut text = format!(
        "{} ({}) has {} recorded matches and a {:.1}% win rate.",
        user.username,
        user.role_label(),
        stats.total_matches,
        stats.win_rate_pct
    );

    if stats.win_rate_pct >= 60.0 {
        text.push_str(
            " They consistently outperform opponents and would add immediate competitive value to a roster.",
        );
    } else {
        text.push_str(
            " They show steady development and the commitment to keep improving in competitive play.",
        );
    }

    if stats.total_matches >= 50 {
        text.push_str(" Their extensive match history demonstrates reliable experience under pressure.");
    }

    if achievements_count >= 5 {
        text.push_str(&format!(
            " With {achievements_count} achievements unlocked, they show clear dedication to their craft."
        ));
    }

    text
}
