use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub wins: u32,
    pub losses: u32,
    pub total: u32,
    pub win_rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub game_name: String,
    #[serde(flatten)]
    pub stats: GameStats,
}

/// Per-game stats keyed by game name, iterated in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameBreakdown {
    entries: Vec<GameEntry>,
}

impl GameBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, game_name: &str) -> Option<&GameStats> {
        self.entries
            .iter()
            .find(|e| e.game_name == game_name)
            .map(|e| &e.stats)
    }

    /// Returns the bucket for `game_name`, appending an empty one on first sight.
    pub fn entry_mut(&mut self, game_name: &str) -> &mut GameStats {
        let idx = match self.entries.iter().position(|e| e.game_name == game_name) {
            Some(idx) => idx,
            None => {
                self.entries.push(GameEntry {
                    game_name: game_name.to_string(),
                    stats: GameStats::default(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].stats
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameStats)> {
        self.entries.iter().map(|e| (e.game_name.as_str(), &e.stats))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut GameStats> {
        self.entries.iter_mut().map(|e| &mut e.stats)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate_pct: f64,
    pub current_streak: u32,
    pub hours_played: f64,
    pub per_game: GameBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::Declining => "Declining",
            Trend::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecentPerformance {
    pub window_size: usize,
    pub window_win_rate_pct: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Everything a page renderer needs to place a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub font_size_pt: f32,
    pub color: Rgb,
    pub weight: FontWeight,
    /// Line height in points.
    pub leading_pt: f32,
    pub space_before_pt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Title,
    Subtitle,
    SectionHeader,
    Field,
    Bullet,
    Paragraph,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBlock {
    pub kind: BlockKind,
    pub text: String,
    pub style: BlockStyle,
}
