pub mod analysis;
pub mod classify;
pub mod concentration;
pub mod distortion;
pub mod fake_feed;
pub mod heuristics;
pub mod odds_parse;
pub mod rank;
pub mod state;
