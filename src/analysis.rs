use crate::classify::classify_field;
use crate::concentration::{field_concentration, placer_concentration, star_tiers};
use crate::distortion::log_distortion;
use crate::heuristics::HeuristicConfig;
use crate::odds_parse::{head_min_odds, parse_trifecta, parse_win_odds};
use crate::rank;
use crate::state::AnalysisReport;

/// Run the whole pipeline over one snapshot of pasted odds text.
///
/// Pure and stateless: every structure is rebuilt from the two strings, so
/// concurrent calls never interfere.
pub fn analyze(win_text: &str, trifecta_text: &str, cfg: &HeuristicConfig) -> AnalysisReport {
    let series = parse_win_odds(win_text);
    let combos = parse_trifecta(trifecta_text);

    let win_ranks = rank::win_ranks(&series);
    let head_min = head_min_odds(&combos);
    let distortion = log_distortion(&head_min, cfg);
    let distortion_ranks = rank::map_ranks(&distortion);
    let placer = placer_concentration(&combos, cfg);
    let stars = star_tiers(&placer, cfg);
    let field_conc = field_concentration(&series, cfg);

    let entrants = classify_field(
        &series,
        &win_ranks,
        &distortion,
        &distortion_ranks,
        &stars,
        field_conc,
        cfg,
    );

    AnalysisReport {
        entrants,
        field_concentration: field_conc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_exactly_the_priced_entrants_in_post_order() {
        let cfg = HeuristicConfig::default();
        let report = analyze("2.1\n-\n8.3\n5.0", "", &cfg);
        let posts: Vec<u32> = report.entrants.iter().map(|r| r.entrant).collect();
        assert_eq!(posts, vec![1, 3, 4]);
        assert_eq!(report.entrants[0].win_rank, 1);
        assert_eq!(report.entrants[1].win_rank, 3);
        assert_eq!(report.entrants[2].win_rank, 2);
    }

    #[test]
    fn empty_inputs_yield_empty_report() {
        let cfg = HeuristicConfig::default();
        let report = analyze("", "", &cfg);
        assert!(report.entrants.is_empty());
        assert!(report.field_concentration.is_none());
    }
}
