use anyhow::Result;
use clap::{Parser, ValueEnum};
use podium_core::{
    FileSurface, HtmlFormat, LEADERBOARD_ENDPOINT, LeaderboardApi, LeaderboardView, POLL_INTERVAL,
    Poller, TextFormat,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Polls a score server and renders the leaderboard")]
struct Args {
    /// Origin of the score server, e.g. http://localhost:8000
    origin: String,

    /// File the rendered board is written to
    #[arg(short, long, default_value = "leaderboard.html")]
    out: PathBuf,

    /// Output markup format
    #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
    render: RenderFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum RenderFormat {
    Html,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("podium_core=info".parse()?)
                .add_directive("podium_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!(
        "Podium starting: polling {}/{} every {:?}, writing to {:?}",
        args.origin, LEADERBOARD_ENDPOINT, POLL_INTERVAL, args.out
    );

    let api = LeaderboardApi::new(&args.origin)?;
    let surface = FileSurface::new(&args.out);

    let poller = match args.render {
        RenderFormat::Html => {
            Poller::spawn(LeaderboardView::new(api, HtmlFormat, surface), POLL_INTERVAL)
        }
        RenderFormat::Text => {
            Poller::spawn(LeaderboardView::new(api, TextFormat, surface), POLL_INTERVAL)
        }
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");
    poller.stop().await;

    Ok(())
}
