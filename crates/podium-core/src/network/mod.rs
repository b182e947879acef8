//! HTTP access to the score server.

mod api;
mod client;

pub use api::{LEADERBOARD_ENDPOINT, LeaderboardApi};
pub use client::HttpClient;
