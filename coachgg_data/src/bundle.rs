use serde::{Deserialize, Serialize};

use crate::achievement::{normalize_achievements, AchievementEntry, AchievementRecord};
use crate::model::{MatchRecord, PlayerCounters, UserProfile};

/// Document handed over by the fetch layer, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBundle {
    pub profile: UserProfile,
    #[serde(default, alias = "stats")]
    pub counters: PlayerCounters,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
}

/// Same data with every achievement unwrapped to one concrete shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    pub profile: UserProfile,
    pub counters: PlayerCounters,
    pub matches: Vec<MatchRecord>,
    pub achievements: Vec<AchievementRecord>,
}

impl ProfileBundle {
    pub fn normalize(self) -> ProfileData {
        ProfileData {
            profile: self.profile,
            counters: self.counters,
            matches: self.matches,
            achievements: normalize_achievements(self.achievements),
        }
    }
}
