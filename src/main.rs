use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use trigap_terminal::analysis::analyze;
use trigap_terminal::fake_feed;
use trigap_terminal::heuristics;
use trigap_terminal::state::{AnalysisReport, EntrantAnalysis};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut json = false;
    let mut demo = false;
    let mut paths: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--demo" => demo = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => paths.push(other.to_string()),
        }
    }

    let cfg = heuristics::config();
    let (win_text, trifecta_text) = if demo {
        let mut rng = rand::thread_rng();
        (
            fake_feed::gen_win_odds_text(&mut rng, 16),
            fake_feed::gen_trifecta_text(&mut rng, 16, 150),
        )
    } else {
        if paths.len() != 2 {
            print_usage();
            anyhow::bail!("expected WIN_ODDS_FILE and TRIFECTA_FILE (or --demo)");
        }
        (read_input(&paths[0])?, read_input(&paths[1])?)
    };

    let report = analyze(&win_text, &trifecta_text, cfg);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
    } else {
        render_report(&report);
    }
    Ok(())
}

fn print_usage() {
    eprintln!("usage: trigap_terminal [--json] [--demo] WIN_ODDS_FILE TRIFECTA_FILE");
    eprintln!("  win odds file: one decimal value per line in post order, '-' for scratched");
    eprintln!("  trifecta file: one 'H-S-T ODDS' line per combination");
    eprintln!("  pass '-' for either file to read it from stdin");
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("read {path}"))
    }
}

fn render_report(report: &AnalysisReport) {
    match report.field_concentration {
        Some(c) => println!("field concentration: {}", "•".repeat(c as usize)),
        None => println!("field concentration: (no win odds)"),
    }
    println!(
        "{:>4}  {:>6}  {:>4}  {:>6}  {:<12}  {:<7}  {:<12}  tags",
        "post", "odds", "rank", "dist", "bar", "stars", "judge"
    );
    for row in &report.entrants {
        println!("{}", render_row(row));
    }
    if report.entrants.is_empty() {
        println!("(no priced entrants)");
    }
}

fn render_row(row: &EntrantAnalysis) -> String {
    let dist = match row.distortion {
        Some(z) => format!("{z:+.2}"),
        None => "-".to_string(),
    };
    let bar = match row.bar_score {
        Some(score) => render_bar(score),
        None => String::new(),
    };
    let mut markers = String::new();
    if row.hot {
        markers.push_str(" 🔥");
    }
    if row.alert {
        markers.push_str(" ⚠");
    }
    let mut tags: Vec<&str> = row.warnings.iter().map(|t| t.label()).collect();
    if row.gap_badge.label() != "normal" {
        tags.push(row.gap_badge.label());
    }
    format!(
        "{:>4}  {:>6.1}  {:>4}  {:>6}  {:<12}  {:<7}  {:<12}  {}{}",
        row.entrant,
        row.win_odds,
        row.win_rank,
        dist,
        bar,
        render_stars(row.stars),
        render_judge(row.judge_level, row.judge_percent),
        tags.join(", "),
        markers,
    )
}

/// Signed bar around a center tick: negative distortion fills left.
fn render_bar(score: i32) -> String {
    let cells = (score.abs() / 20).clamp(0, 5) as usize;
    if score < 0 {
        format!("{:>5}|{:<5}", "◀".repeat(cells), "")
    } else {
        format!("{:>5}|{:<5}", "", "▶".repeat(cells))
    }
}

fn render_stars(stars: Option<u8>) -> String {
    match stars {
        Some(n) => {
            let n = n.min(5) as usize;
            format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
        }
        None => "—".to_string(),
    }
}

fn render_judge(level: u8, percent: u8) -> String {
    if percent == 0 {
        return String::new();
    }
    let cells = (percent as usize / 10).min(10);
    format!("{}{} L{level}", "█".repeat(cells), "░".repeat(10 - cells))
}
