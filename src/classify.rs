use std::collections::HashMap;

use crate::heuristics::HeuristicConfig;
use crate::state::{
    EntrantAnalysis, FIELD_SIZE, GapBadge, WarningTag, WinOddsSeries,
};

const JUDGE_PERCENT: [u8; 5] = [15, 35, 55, 75, 100];

/// Join rank, distortion and concentration signals into one output row per
/// priced entrant, in ascending post order. Unpriced entrants get no row.
pub fn classify_field(
    win_odds: &WinOddsSeries,
    win_ranks: &[Option<u32>; FIELD_SIZE],
    distortion: &HashMap<u32, f64>,
    distortion_ranks: &HashMap<u32, u32>,
    stars: &HashMap<u32, u8>,
    field_concentration: Option<u8>,
    cfg: &HeuristicConfig,
) -> Vec<EntrantAnalysis> {
    let ranked = win_ranks.iter().flatten().count() as u32;

    let mut rows = Vec::new();
    for idx in 0..FIELD_SIZE {
        let Some(odds) = win_odds[idx] else { continue };
        let Some(win_rank) = win_ranks[idx] else { continue };
        let post = idx as u32 + 1;

        let d = distortion.get(&post).copied();
        let d_rank = distortion_ranks.get(&post).copied();
        let tier = stars.get(&post).copied();

        let bar_score = d.map(|z| {
            (z.clamp(-cfg.bar_clamp, cfg.bar_clamp) / cfg.bar_clamp * 100.0).round() as i32
        });
        let rank_gap = match d_rank {
            Some(r) => win_rank as i32 - r as i32,
            None => 0,
        };

        let warnings = warning_tags(win_rank, rank_gap, d, tier, cfg);
        let hot = matches!((d, tier), (Some(z), Some(s))
            if z <= cfg.hot_distortion && s >= cfg.hot_min_stars);
        let alert = d.is_some_and(|z| z.abs() >= cfg.alert_abs_distortion);

        let (judge_level, judge_percent) =
            judge_score(win_rank, d_rank, ranked, field_concentration);

        rows.push(EntrantAnalysis {
            entrant: post,
            win_odds: odds,
            win_rank,
            distortion: d,
            distortion_rank: d_rank,
            stars: tier,
            bar_score,
            rank_gap,
            gap_badge: gap_badge(rank_gap),
            warnings,
            hot,
            alert,
            judge_level,
            judge_percent,
        });
    }
    rows
}

fn warning_tags(
    win_rank: u32,
    rank_gap: i32,
    distortion: Option<f64>,
    stars: Option<u8>,
    cfg: &HeuristicConfig,
) -> Vec<WarningTag> {
    let mut tags = Vec::new();

    if let (Some(z), Some(s)) = (distortion, stars) {
        if z <= cfg.hot_distortion && s >= cfg.thick_min_stars {
            tags.push(WarningTag::DistortionThickConcentration);
        }
    }
    if win_rank >= cfg.longshot_min_rank && rank_gap >= cfg.longshot_min_gap {
        tags.push(WarningTag::LongshotConcentrationGap);
    }
    if stars == Some(5) {
        tags.push(WarningTag::TieConcentration);
    }
    if distortion.is_some_and(|z| z >= cfg.overlooked_distortion) {
        tags.push(WarningTag::Overlooked);
    }

    tags
}

/// Composite 0..4 verdict from how high the horse sits in both rankings,
/// nudged by how top-heavy the win market is. No verdict bar without a
/// distortion rank.
fn judge_score(
    win_rank: u32,
    distortion_rank: Option<u32>,
    ranked: u32,
    field_concentration: Option<u8>,
) -> (u8, u8) {
    let Some(d_rank) = distortion_rank else {
        return (0, 0);
    };
    if ranked == 0 {
        return (0, 0);
    }

    let k = ranked as f64;
    let composite = (k + 1.0 - win_rank as f64) + (k + 1.0 - d_rank as f64);
    let ratio = composite / (k * 2.0);

    let mut base: i32 = if ratio >= 0.85 {
        4
    } else if ratio >= 0.70 {
        3
    } else if ratio >= 0.55 {
        2
    } else if ratio >= 0.40 {
        1
    } else {
        0
    };

    if let Some(c) = field_concentration {
        if c >= 4 {
            base += 1;
        }
        if c <= 2 {
            base -= 1;
        }
    }

    let level = base.clamp(0, 4) as u8;
    (level, JUDGE_PERCENT[level as usize])
}

fn gap_badge(rank_gap: i32) -> GapBadge {
    if rank_gap >= 3 {
        GapBadge::Marked
    } else if rank_gap == 2 {
        GapBadge::Caution
    } else if rank_gap == 1 {
        GapBadge::Watch
    } else {
        GapBadge::Normal
    }
}
