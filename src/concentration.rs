use std::collections::HashMap;

use crate::heuristics::HeuristicConfig;
use crate::state::{TrifectaCombination, WinOddsSeries, in_field};

/// Accumulate a placer-concentration score per entrant from its 2nd/3rd
/// appearances across all combinations. Cheap combinations carry more
/// weight (1/ln(odds+1)), and second place counts more than third.
/// Entrants never appearing as a placer get no entry at all.
pub fn placer_concentration(
    combos: &[TrifectaCombination],
    cfg: &HeuristicConfig,
) -> HashMap<u32, f64> {
    let mut score: HashMap<u32, f64> = HashMap::new();
    for combo in combos {
        // Parser guarantees odds > 0, so the weight is finite and positive.
        let weight = 1.0 / (combo.odds + 1.0).ln();
        if in_field(combo.second) {
            *score.entry(combo.second).or_insert(0.0) += cfg.second_weight * weight;
        }
        if in_field(combo.third) {
            *score.entry(combo.third).or_insert(0.0) += cfg.third_weight * weight;
        }
    }
    score
}

/// Min-max normalize raw scores into 1..5 star tiers. With a single data
/// point max == min, the floored denominator collapses the ratio to 0 and
/// the lone entrant lands on tier 1.
pub fn star_tiers(score: &HashMap<u32, f64>, cfg: &HeuristicConfig) -> HashMap<u32, u8> {
    if score.is_empty() {
        return HashMap::new();
    }
    let min = score.values().copied().fold(f64::INFINITY, f64::min);
    let max = score.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };

    score
        .iter()
        .map(|(&post, &value)| {
            let ratio = (value - min) / span;
            (post, tier_for_ratio(ratio, &cfg.star_bands))
        })
        .collect()
}

fn tier_for_ratio(ratio: f64, bands: &[f64; 4]) -> u8 {
    if ratio >= bands[3] {
        5
    } else if ratio >= bands[2] {
        4
    } else if ratio >= bands[1] {
        3
    } else if ratio >= bands[0] {
        2
    } else {
        1
    }
}

/// Field-level gauge of how top-heavy the win market is: the sum of
/// inverse win odds lands around 0.25 for a wide-open race and past 0.55
/// when a couple of horses soak up the pool.
pub fn field_concentration(series: &WinOddsSeries, cfg: &HeuristicConfig) -> Option<u8> {
    let priced: Vec<f64> = series.iter().flatten().copied().collect();
    if priced.is_empty() {
        return None;
    }
    let inv_sum: f64 = priced.iter().map(|odds| 1.0 / odds).sum();
    Some(tier_for_ratio(inv_sum, &cfg.field_conc_bands))
}
