use std::env;

use once_cell::sync::OnceCell;

/// Empirically-tuned cut points for the whole pipeline.
///
/// The z-score cuts and the star/concentration bands come from eyeballing
/// live markets, not from a fitted model; they are tunables, not invariants.
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Minimum number of priced head entrants before distortion is computed.
    pub distortion_min_sample: usize,
    /// Minimum population std of the log head-min odds; flatter fields are
    /// reported as "not computed".
    pub distortion_min_std: f64,
    /// Distortion is clamped to +/- this before the bar projection.
    pub bar_clamp: f64,
    /// Placer weights: second place counts full, third place less.
    pub second_weight: f64,
    pub third_weight: f64,
    /// Star-tier ratio bands, ascending: >= bands[3] is 5 stars, >= bands[2]
    /// is 4, and so on down to 1 star below bands[0].
    pub star_bands: [f64; 4],
    /// Inverse-odds-sum bands for the field concentration gauge, ascending.
    pub field_conc_bands: [f64; 4],
    pub hot_distortion: f64,
    pub hot_min_stars: u8,
    pub thick_min_stars: u8,
    pub alert_abs_distortion: f64,
    pub overlooked_distortion: f64,
    pub longshot_min_rank: u32,
    pub longshot_min_gap: i32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            distortion_min_sample: 3,
            distortion_min_std: 0.15,
            bar_clamp: 2.5,
            second_weight: 1.0,
            third_weight: 0.7,
            star_bands: [0.25, 0.45, 0.65, 0.80],
            field_conc_bands: [0.32, 0.38, 0.45, 0.55],
            hot_distortion: -1.5,
            hot_min_stars: 3,
            thick_min_stars: 4,
            alert_abs_distortion: 2.2,
            overlooked_distortion: 2.0,
            longshot_min_rank: 8,
            longshot_min_gap: 6,
        }
    }
}

impl HeuristicConfig {
    /// Defaults with the most commonly re-tuned knobs overridable from
    /// `TRIGAP_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.distortion_min_std =
            env_f64("TRIGAP_MIN_STD", cfg.distortion_min_std).clamp(0.01, 2.0);
        cfg.hot_distortion = env_f64("TRIGAP_HOT_Z", cfg.hot_distortion).clamp(-5.0, 0.0);
        cfg.alert_abs_distortion =
            env_f64("TRIGAP_ALERT_Z", cfg.alert_abs_distortion).clamp(0.5, 5.0);
        cfg.overlooked_distortion =
            env_f64("TRIGAP_VALUE_Z", cfg.overlooked_distortion).clamp(0.5, 5.0);
        cfg.longshot_min_rank =
            env_u32("TRIGAP_LONGSHOT_RANK", cfg.longshot_min_rank).clamp(2, 18);
        cfg.longshot_min_gap =
            env_u32("TRIGAP_LONGSHOT_GAP", cfg.longshot_min_gap as u32).clamp(1, 17) as i32;
        cfg
    }
}

static CONFIG: OnceCell<HeuristicConfig> = OnceCell::new();

/// Process-wide config, read from the environment once.
pub fn config() -> &'static HeuristicConfig {
    CONFIG.get_or_init(HeuristicConfig::from_env)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_values() {
        let cfg = HeuristicConfig::default();
        assert_eq!(cfg.distortion_min_sample, 3);
        assert_eq!(cfg.distortion_min_std, 0.15);
        assert_eq!(cfg.star_bands, [0.25, 0.45, 0.65, 0.80]);
        assert_eq!(cfg.longshot_min_rank, 8);
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        assert_eq!(env_f64("TRIGAP_TEST_UNSET_KEY", 1.25), 1.25);
        assert_eq!(env_u32("TRIGAP_TEST_UNSET_KEY", 7), 7);
    }

    #[test]
    fn env_overrides_and_clamps_apply() {
        // SAFETY: no other test in this crate writes the environment.
        unsafe {
            env::set_var("TRIGAP_MIN_STD", "0.5");
            env::set_var("TRIGAP_ALERT_Z", "99");
            env::set_var("TRIGAP_HOT_Z", "1.0");
            env::set_var("TRIGAP_LONGSHOT_RANK", "30");
        }
        let cfg = HeuristicConfig::from_env();
        unsafe {
            env::remove_var("TRIGAP_MIN_STD");
            env::remove_var("TRIGAP_ALERT_Z");
            env::remove_var("TRIGAP_HOT_Z");
            env::remove_var("TRIGAP_LONGSHOT_RANK");
        }

        // In-range values land as-is, out-of-range values hit the clamps.
        assert_eq!(cfg.distortion_min_std, 0.5);
        assert_eq!(cfg.alert_abs_distortion, 5.0);
        assert_eq!(cfg.hot_distortion, 0.0);
        assert_eq!(cfg.longshot_min_rank, 18);
        // Untouched knobs keep their defaults.
        assert_eq!(cfg.longshot_min_gap, 6);
    }
}
