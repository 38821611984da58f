use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "unlockedAt")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Shape delivered by the fetch layer: either a joined row that carries the
/// achievement under `achievements`, or the bare record.
///
/// `Wrapped` must stay first; untagged deserialization tries variants in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AchievementEntry {
    Wrapped {
        achievements: AchievementRecord,
        #[serde(default, alias = "unlockedAt", skip_serializing_if = "Option::is_none")]
        unlocked_at: Option<DateTime<Utc>>,
    },
    Bare(AchievementRecord),
}

impl AchievementEntry {
    pub fn record(&self) -> &AchievementRecord {
        match self {
            AchievementEntry::Wrapped { achievements, .. } => achievements,
            AchievementEntry::Bare(record) => record,
        }
    }

    pub fn into_record(self) -> AchievementRecord {
        match self {
            AchievementEntry::Wrapped {
                mut achievements,
                unlocked_at,
            } => {
                if achievements.unlocked_at.is_none() {
                    achievements.unlocked_at = unlocked_at;
                }
                achievements
            }
            AchievementEntry::Bare(record) => record,
        }
    }
}

impl From<AchievementRecord> for AchievementEntry {
    fn from(record: AchievementRecord) -> Self {
        AchievementEntry::Bare(record)
    }
}

pub fn normalize_achievements(entries: Vec<AchievementEntry>) -> Vec<AchievementRecord> {
    entries.into_iter().map(AchievementEntry::into_record).collect()
}
