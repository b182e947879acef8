//! # podium-core
//!
//! Core library for the Podium leaderboard viewer.
//!
//! This crate provides:
//! - Score record decoding and tie-aware medal assignment
//! - Markup rendering (HTML and plain text)
//! - A cache-bypassing HTTP client for the leaderboard endpoint
//! - The polling view with a pluggable display surface

pub mod board;
pub mod error;
pub mod network;
pub mod render;
pub mod view;

pub use board::{
    Medal, RankedRow, ScoreRecord, ScoreValue, parse_snapshot, rank_rows, top_scores,
};
pub use error::{Error, Result};
pub use network::{HttpClient, LEADERBOARD_ENDPOINT, LeaderboardApi};
pub use render::{BoardFormat, HtmlFormat, TextFormat, escape_html, format_score};
pub use view::{
    DisplaySurface, FileSurface, LeaderboardView, MemorySurface, POLL_INTERVAL, Poller,
    RefreshOutcome,
};
