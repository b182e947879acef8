//! Fixed-cadence polling with an explicit start/stop lifecycle.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use super::{DisplaySurface, LeaderboardView};
use crate::render::BoardFormat;

/// Cadence between polling cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Owns the repeating poll task.
///
/// The first refresh runs immediately; later cycles fire on a fixed interval
/// whether or not the previous one succeeded.
pub struct Poller {
    handle: JoinHandle<()>,
    stop: watch::Sender<bool>,
}

impl Poller {
    pub fn spawn<F, S>(mut view: LeaderboardView<F, S>, interval: Duration) -> Self
    where
        F: BoardFormat + Send + 'static,
        S: DisplaySurface + Send + 'static,
    {
        let (stop, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        view.refresh().await;
                    }
                    _ = stopped.changed() => break,
                }
            }
        });

        Self { handle, stop }
    }

    /// Signal the poll task and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
        info!("Poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::LeaderboardApi;
    use crate::render::HtmlFormat;
    use crate::view::MemorySurface;

    #[tokio::test]
    async fn test_poller_stops_cleanly() {
        // Nothing listens on this port; cycles fail fast and keep polling.
        let api = LeaderboardApi::new("http://127.0.0.1:9").unwrap();
        let view = LeaderboardView::new(api, HtmlFormat, MemorySurface::new());

        let poller = Poller::spawn(view, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(30)).await;

        tokio::time::timeout(Duration::from_secs(5), poller.stop())
            .await
            .expect("poller did not stop in time");
    }
}
