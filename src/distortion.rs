use std::collections::HashMap;

use crate::heuristics::HeuristicConfig;

/// Population z-scores of ln(head-min odds) per head entrant.
///
/// Odds are ratio-scale, so deviations are measured after a natural-log
/// transform. Negative means the trifecta market prices the head tighter
/// than its log-normal position in the field (insider-backed / surprise
/// candidate); positive means looser than peers (overlooked value). The
/// sign convention feeds the classifier thresholds directly.
///
/// Returns an empty map when fewer than `distortion_min_sample` heads are
/// priced or the log-odds spread is below `distortion_min_std`; downstream
/// fields then report "not computed" rather than zero.
pub fn log_distortion(
    head_min: &HashMap<u32, f64>,
    cfg: &HeuristicConfig,
) -> HashMap<u32, f64> {
    if head_min.len() < cfg.distortion_min_sample {
        return HashMap::new();
    }

    // Sum in ascending post order: float addition is order-sensitive, and
    // map iteration order would otherwise leak into the low mantissa bits.
    let mut logs: Vec<(u32, f64)> = head_min.iter().map(|(&post, &odds)| (post, odds.ln())).collect();
    logs.sort_by_key(|&(post, _)| post);

    let mean = logs.iter().map(|&(_, log)| log).sum::<f64>() / logs.len() as f64;
    let var = logs
        .iter()
        .map(|&(_, log)| {
            let d = log - mean;
            d * d
        })
        .sum::<f64>()
        / logs.len() as f64;
    let std = var.sqrt();
    if std < cfg.distortion_min_std {
        return HashMap::new();
    }

    logs.into_iter()
        .map(|(post, log)| (post, (log - mean) / std))
        .collect()
}
