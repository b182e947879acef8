//! The leaderboard view: one fetch-and-render cycle over a display surface.

mod poller;
mod surface;

pub use poller::{POLL_INTERVAL, Poller};
pub use surface::{DisplaySurface, FileSurface, MemorySurface};

use tracing::{debug, error, warn};

use crate::board::ScoreRecord;
use crate::network::LeaderboardApi;
use crate::render::BoardFormat;

/// Result of one polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Snapshot rendered with this many rows.
    Rendered(usize),
    /// Empty snapshot; empty-state placeholder shown.
    Empty,
    /// Fetch or parse failed; unavailable placeholder shown.
    Failed,
}

/// Owns one API handle, one render format, and one display surface, and
/// repeats the fetch-and-render cycle against them.
pub struct LeaderboardView<F, S> {
    api: LeaderboardApi,
    format: F,
    surface: S,
}

impl<F: BoardFormat, S: DisplaySurface> LeaderboardView<F, S> {
    pub fn new(api: LeaderboardApi, format: F, surface: S) -> Self {
        Self {
            api,
            format,
            surface,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one polling cycle. Failures never propagate: fetch and parse
    /// errors fall back to the unavailable placeholder, and surface write
    /// failures are logged so the next cycle can try again.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        let outcome = match self.api.fetch_snapshot().await {
            Ok(records) => self.apply(&records),
            Err(e) => {
                match e.status() {
                    Some(status) => error!(status, "Error loading leaderboard: {e}"),
                    None => error!("Error loading leaderboard: {e}"),
                }
                let markup = self.format.unavailable();
                self.commit(&markup);
                RefreshOutcome::Failed
            }
        };
        debug!(?outcome, "refresh complete");
        outcome
    }

    /// Render a decoded snapshot and commit it wholesale to the surface.
    fn apply(&mut self, records: &[ScoreRecord]) -> RefreshOutcome {
        let markup = self.format.render(records);
        self.commit(&markup);

        if records.is_empty() {
            RefreshOutcome::Empty
        } else {
            RefreshOutcome::Rendered(records.len())
        }
    }

    fn commit(&mut self, markup: &str) {
        if let Err(e) = self.surface.replace(markup) {
            warn!("Failed to update display surface: {e}");
        }
    }
}
