use serde::Serialize;

/// Maximum JRA field size; post positions run 1..=18.
pub const FIELD_SIZE: usize = 18;

/// Win odds slot per post position. `None` means not running / not priced,
/// never zero.
pub type WinOddsSeries = [Option<f64>; FIELD_SIZE];

pub fn in_field(post: u32) -> bool {
    (1..=FIELD_SIZE as u32).contains(&post)
}

/// One trifecta line as pasted: exact finish order `head-second-third` plus
/// decimal odds. Posts are kept as parsed even when outside 1..=18; each
/// aggregation filters its own contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrifectaCombination {
    pub head: u32,
    pub second: u32,
    pub third: u32,
    pub odds: f64,
}

/// Warning tags an entrant can accumulate. Conditions are evaluated
/// independently; a row may carry several or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningTag {
    #[serde(rename = "distortion × thick-concentration")]
    DistortionThickConcentration,
    #[serde(rename = "longshot concentration-gap")]
    LongshotConcentrationGap,
    #[serde(rename = "tie concentration")]
    TieConcentration,
    #[serde(rename = "underpriced/overlooked")]
    Overlooked,
}

impl WarningTag {
    pub fn label(self) -> &'static str {
        match self {
            WarningTag::DistortionThickConcentration => "distortion × thick-concentration",
            WarningTag::LongshotConcentrationGap => "longshot concentration-gap",
            WarningTag::TieConcentration => "tie concentration",
            WarningTag::Overlooked => "underpriced/overlooked",
        }
    }
}

/// Badge derived from the win-rank vs distortion-rank gap. A big positive
/// gap means the trifecta market backs the horse harder than its win
/// popularity would suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapBadge {
    Marked,
    Caution,
    Watch,
    Normal,
}

impl GapBadge {
    pub fn label(self) -> &'static str {
        match self {
            GapBadge::Marked => "info horse",
            GapBadge::Caution => "caution",
            GapBadge::Watch => "watch",
            GapBadge::Normal => "normal",
        }
    }
}

/// Per-entrant output row. Only entrants with a priced win odds value get a
/// row; distortion-dependent fields stay `None` when the engine declined to
/// score the field.
#[derive(Debug, Clone, Serialize)]
pub struct EntrantAnalysis {
    pub entrant: u32,
    pub win_odds: f64,
    pub win_rank: u32,
    pub distortion: Option<f64>,
    pub distortion_rank: Option<u32>,
    pub stars: Option<u8>,
    /// Clamped distortion projected onto [-100, 100] for the bar display.
    pub bar_score: Option<i32>,
    pub rank_gap: i32,
    pub gap_badge: GapBadge,
    pub warnings: Vec<WarningTag>,
    pub hot: bool,
    pub alert: bool,
    pub judge_level: u8,
    pub judge_percent: u8,
}

/// Full analysis for one snapshot of pasted odds.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub entrants: Vec<EntrantAnalysis>,
    /// 1..5 gauge of how top-heavy the win market is; `None` when nothing
    /// is priced.
    pub field_concentration: Option<u8>,
}
