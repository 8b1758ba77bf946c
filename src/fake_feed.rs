use rand::Rng;

use crate::state::FIELD_SIZE;

/// Generate a plausible win-odds paste: a couple of favorites in the low
/// single digits, a long tail of outsiders, and the odd scratched horse.
pub fn gen_win_odds_text<R: Rng>(rng: &mut R, runners: usize) -> String {
    let runners = runners.clamp(3, FIELD_SIZE);
    let mut lines = Vec::with_capacity(runners);
    for _ in 0..runners {
        if rng.gen_bool(0.05) {
            lines.push("-".to_string());
            continue;
        }
        let base = rng.gen_range(0.0..1.0_f64);
        let odds = (1.3 + base.powi(3) * 300.0).min(500.0);
        lines.push(format!("{odds:.1}"));
    }
    lines.join("\n")
}

/// Generate trifecta paste text over the same roster. Combination odds grow
/// roughly multiplicatively with the posts involved, which is enough spread
/// for the distortion engine to engage.
pub fn gen_trifecta_text<R: Rng>(rng: &mut R, runners: usize, lines: usize) -> String {
    let runners = runners.clamp(3, FIELD_SIZE) as u32;
    let mut out = Vec::with_capacity(lines);
    for _ in 0..lines {
        let head = rng.gen_range(1..=runners);
        let second = loop {
            let p = rng.gen_range(1..=runners);
            if p != head {
                break p;
            }
        };
        let third = loop {
            let p = rng.gen_range(1..=runners);
            if p != head && p != second {
                break p;
            }
        };
        let spread = rng.gen_range(0.0..1.0_f64);
        let odds = 4.0 * ((head + second + third) as f64 / 3.0) * (1.0 + spread * 40.0);
        out.push(format!("{head}-{second}-{third} {odds:.1}"));
    }
    out.join("\n")
}
