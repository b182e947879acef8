use crate::board::{ScoreRecord, parse_snapshot};
use crate::error::Result;
use crate::network::HttpClient;

/// Endpoint path polled for snapshots, relative to the configured origin.
pub const LEADERBOARD_ENDPOINT: &str = "leaderboard";

/// Facade over the score server.
#[derive(Clone)]
pub struct LeaderboardApi {
    client: HttpClient,
}

impl LeaderboardApi {
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(origin)?,
        })
    }

    /// Fetch and decode one snapshot, bypassing caches.
    pub async fn fetch_snapshot(&self) -> Result<Vec<ScoreRecord>> {
        let body = self.client.get_no_cache(LEADERBOARD_ENDPOINT).await?;
        parse_snapshot(&body)
    }
}
