use std::cmp::Ordering;
use std::collections::HashMap;

use crate::state::{FIELD_SIZE, WinOddsSeries};

/// Dense 1-based popularity ranks over the priced slots, ascending odds.
/// The stable sort keeps equal odds in post order, so ties always get
/// distinct ranks.
pub fn win_ranks(series: &WinOddsSeries) -> [Option<u32>; FIELD_SIZE] {
    let mut priced: Vec<(usize, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(idx, odds)| odds.map(|o| (idx, o)))
        .collect();
    priced.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut ranks = [None; FIELD_SIZE];
    for (i, (idx, _)) in priced.iter().enumerate() {
        ranks[*idx] = Some(i as u32 + 1);
    }
    ranks
}

/// Dense 1-based ranks over an entrant -> value map, ascending value.
/// Encounter order is ascending entrant index so equal values rank
/// deterministically.
pub fn map_ranks(values: &HashMap<u32, f64>) -> HashMap<u32, u32> {
    let mut entries: Vec<(u32, f64)> = values.iter().map(|(&k, &v)| (k, v)).collect();
    entries.sort_by_key(|&(k, _)| k);
    entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (k, _))| (k, i as u32 + 1))
        .collect()
}
