use trigap_terminal::analysis::analyze;
use trigap_terminal::heuristics::HeuristicConfig;
use trigap_terminal::odds_parse::{head_min_odds, parse_trifecta};
use trigap_terminal::state::{GapBadge, WarningTag};

fn cfg() -> HeuristicConfig {
    HeuristicConfig::default()
}

#[test]
fn thick_concentration_fires_on_tight_head_with_heavy_placing() {
    // Post 1 heads a combination priced way under the rest of the field and
    // also shows up as a placer in every cheap line.
    let win = "1.5\n3.0\n5.0\n8.0\n12.0";
    let tri = "1-2-3 2.0\n2-1-3 50\n3-1-2 60\n4-1-5 70\n5-1-4 80\n2-3-1 55";
    let report = analyze(win, tri, &cfg());

    let row = report.entrants.iter().find(|r| r.entrant == 1).unwrap();
    assert!(row.distortion.unwrap() <= -1.5);
    assert_eq!(row.stars, Some(5));
    assert!(row.warnings.contains(&WarningTag::DistortionThickConcentration));
    assert!(row.warnings.contains(&WarningTag::TieConcentration));
    assert!(row.hot);
    assert!(!row.alert);
}

#[test]
fn overlooked_head_fires_value_tag_and_alert() {
    // Seven tightly priced heads plus one absurdly loose one; the outlier
    // z-score clears both the value and alert thresholds.
    let win = "2.0\n3.0\n4.0\n5.0\n6.0\n7.0\n8.0\n9.0";
    let tri = "1-2-3 5\n2-3-4 5.5\n3-4-5 6\n4-5-6 6.5\n5-6-7 7\n6-7-8 7.5\n7-8-1 8\n8-1-2 3000";
    let report = analyze(win, tri, &cfg());

    let row = report.entrants.iter().find(|r| r.entrant == 8).unwrap();
    assert!(row.distortion.unwrap() >= 2.0);
    assert!(row.warnings.contains(&WarningTag::Overlooked));
    assert!(row.alert);
    assert!(!row.hot);
}

#[test]
fn longshot_gap_fires_when_trifecta_backs_an_outsider() {
    // Post 9 is rank 9 on win odds but its head-min trifecta odds are the
    // cheapest of the field.
    let win = "1.5\n2.0\n3.0\n4.0\n5.0\n6.0\n7.0\n8.0\n50.0";
    let tri = "9-1-2 6\n1-2-3 10\n2-3-4 15\n3-4-5 20\n4-5-6 25\n5-6-7 30\n6-7-8 35\n7-8-9 40\n8-9-1 45";
    let report = analyze(win, tri, &cfg());

    let row = report.entrants.iter().find(|r| r.entrant == 9).unwrap();
    assert_eq!(row.win_rank, 9);
    assert_eq!(row.distortion_rank, Some(1));
    assert_eq!(row.rank_gap, 8);
    assert!(row.warnings.contains(&WarningTag::LongshotConcentrationGap));
    assert_eq!(row.gap_badge, GapBadge::Marked);
}

#[test]
fn flat_trifecta_market_reports_nothing_computed() {
    let win = "2.0\n3.0\n4.0";
    let tri = "1-2-3 2\n2-1-3 2\n3-1-2 2";
    let report = analyze(win, tri, &cfg());

    for row in &report.entrants {
        assert!(row.distortion.is_none());
        assert!(row.distortion_rank.is_none());
        assert!(row.bar_score.is_none());
        assert!(!row.warnings.contains(&WarningTag::DistortionThickConcentration));
        assert!(!row.warnings.contains(&WarningTag::Overlooked));
        assert!(!row.hot && !row.alert);
    }
}

#[test]
fn two_heads_are_too_few_to_score() {
    let win = "2.0\n3.0\n4.0";
    let tri = "1-2-3 5\n2-1-3 500";
    let report = analyze(win, tri, &cfg());
    assert!(report.entrants.iter().all(|r| r.distortion.is_none()));
}

#[test]
fn malformed_noise_contributes_nothing_and_never_panics() {
    let report = analyze("abc", "abc", &cfg());
    assert!(report.entrants.is_empty());

    let report = analyze(
        "2.1\ngarbage\n5.0",
        "not-a-line\n1-2-3 10\n☆☆☆\n1-2 7\nfoo bar baz",
        &cfg(),
    );
    let posts: Vec<u32> = report.entrants.iter().map(|r| r.entrant).collect();
    assert_eq!(posts, vec![1, 3]);
}

#[test]
fn head_min_is_order_independent() {
    let forward = "1-2-3 10\n1-4-5 15\n2-1-3 8\n1-3-2 9";
    let reversed = "1-3-2 9\n2-1-3 8\n1-4-5 15\n1-2-3 10";
    assert_eq!(
        head_min_odds(&parse_trifecta(forward)),
        head_min_odds(&parse_trifecta(reversed))
    );
}
