use std::collections::HashMap;

use crate::state::{FIELD_SIZE, TrifectaCombination, WinOddsSeries, in_field};

/// Parse pasted win-odds text, one value per line in post order. Shorter
/// input is padded with unpriced slots, longer input is truncated to the
/// 18-horse roster. Blank lines around the paste are artifacts and are
/// trimmed; blank lines inside it are scratched slots.
pub fn parse_win_odds(text: &str) -> WinOddsSeries {
    let mut series: WinOddsSeries = [None; FIELD_SIZE];
    for (slot, line) in series.iter_mut().zip(text.trim().lines()) {
        *slot = parse_odds_cell(line);
    }
    series
}

/// Pasted odds cells show "-" (or nothing) for scratched horses.
fn parse_odds_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse pasted trifecta text, one `H-S-T <odds>` line per combination.
/// Anything that does not match that shape is dropped without comment;
/// hand-pasted text routinely carries headers and stray fragments.
pub fn parse_trifecta(text: &str) -> Vec<TrifectaCombination> {
    text.lines().filter_map(parse_trifecta_line).collect()
}

fn parse_trifecta_line(line: &str) -> Option<TrifectaCombination> {
    let mut tokens = line.split_whitespace();
    let combo = tokens.next()?;
    let odds_token = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let mut posts = combo.split('-');
    let head = posts.next()?.parse::<u32>().ok()?;
    let second = posts.next()?.parse::<u32>().ok()?;
    let third = posts.next()?.parse::<u32>().ok()?;
    if posts.next().is_some() {
        return None;
    }

    let odds = odds_token.parse::<f64>().ok()?;
    if !odds.is_finite() || odds <= 0.0 {
        return None;
    }

    Some(TrifectaCombination {
        head,
        second,
        third,
        odds,
    })
}

/// Cheapest trifecta odds per head entrant. Heads outside the roster
/// contribute nothing; the rest of their line still counted at parse time.
pub fn head_min_odds(combos: &[TrifectaCombination]) -> HashMap<u32, f64> {
    let mut out: HashMap<u32, f64> = HashMap::new();
    for combo in combos {
        if !in_field(combo.head) {
            continue;
        }
        out.entry(combo.head)
            .and_modify(|min| {
                if combo.odds < *min {
                    *min = combo.odds;
                }
            })
            .or_insert(combo.odds);
    }
    out
}
