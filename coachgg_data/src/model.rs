use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_GAME: &str = "Unknown Game";
pub const DEFAULT_ROLE: &str = "Player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    pub fn is_win(self) -> bool {
        matches!(self, MatchResult::Win)
    }
}

/// One completed game session. Callers hand these over most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default, alias = "gameName")]
    pub game_name: Option<String>,
    pub result: MatchResult,
    #[serde(default, alias = "playedAt", alias = "created_at")]
    pub played_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    pub fn new(game_name: impl Into<String>, result: MatchResult) -> Self {
        Self {
            game_name: Some(game_name.into()),
            result,
            played_at: None,
        }
    }

    /// Bucket label; absent or blank names fall back to `UNKNOWN_GAME`.
    pub fn game_label(&self) -> &str {
        match self.game_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_GAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn role_label(&self) -> &str {
        match self.role.as_deref() {
            Some(role) if !role.trim().is_empty() => role,
            _ => DEFAULT_ROLE,
        }
    }

    pub fn bio_text(&self) -> Option<&str> {
        self.bio.as_deref().map(str::trim).filter(|bio| !bio.is_empty())
    }
}

/// Counters tracked upstream rather than derived from match history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCounters {
    #[serde(default, alias = "currentStreak")]
    pub current_streak: u32,
    #[serde(default, alias = "hoursPlayed")]
    pub hours_played: f64,
}
