pub mod model;
pub mod achievement;
pub mod bundle;
pub mod session;

pub use achievement::{normalize_achievements, AchievementEntry, AchievementRecord};
pub use bundle::{ProfileBundle, ProfileData};
pub use model::{MatchRecord, MatchResult, PlayerCounters, UserProfile, DEFAULT_ROLE, UNKNOWN_GAME};
pub use session::{Session, SessionError};
