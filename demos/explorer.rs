//! Walks a handful of endpoints for one league season and logs what comes back.
//!
//! Reads `FOOTBALL_API_KEY`, `FOOTBALL_API_ORIGIN` and (optionally) `FOOTBALL_API_TIMEZONE`.
//!
//! ```sh
//! FOOTBALL_API_KEY=... FOOTBALL_API_ORIGIN=api-sports RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example explorer --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=explorer.log FOOTBALL_API_KEY=... FOOTBALL_API_ORIGIN=rapidapi cargo run --example explorer --features tracing
//! ```

use std::fs::File;

use api_football_sdk::{Client, Query};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const LA_LIGA: u32 = 140;
const SEASON: u32 = 2021;
const BARCELONA: u32 = 529;
const REAL_MADRID: u32 = 541;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::from_env()?;
    info!(origin = %client.origin(), host = %client.host());

    match client.timezones().get().await {
        Ok(response) => info!(endpoint = "timezone", count = response.results),
        Err(e) => debug!(endpoint = "timezone", error = %e),
    }

    let league = client.leagues(Some(LA_LIGA), Some(SEASON));

    match league.standings(&Query::new()).await {
        Ok(response) => info!(endpoint = "standings", results = response.results),
        Err(e) => debug!(endpoint = "standings", error = %e),
    }

    match league.top_scorers().await {
        Ok(response) => {
            for entry in response.response.iter().take(5) {
                info!(
                    endpoint = "players/topscorers",
                    player = %entry["player"]["name"],
                    goals = %entry["statistics"][0]["goals"]["total"]
                );
            }
        }
        Err(e) => debug!(endpoint = "players/topscorers", error = %e),
    }

    match league
        .rounds(&Query::from([("current", "true")]))
        .await
    {
        Ok(response) => info!(endpoint = "fixtures/rounds", rounds = ?response.response),
        Err(e) => debug!(endpoint = "fixtures/rounds", error = %e),
    }

    match client
        .teams(Some(BARCELONA))
        .h2h(REAL_MADRID, &Query::from([("last", 3)]))
        .await
    {
        Ok(response) => info!(endpoint = "fixtures/headtohead", results = response.results),
        Err(e) => debug!(endpoint = "fixtures/headtohead", error = %e),
    }

    match client.venues().find(1456).await {
        Ok(Some(venue)) => info!(endpoint = "venues", venue = %venue["name"]),
        Ok(None) => info!(endpoint = "venues", "venue not found"),
        Err(e) => debug!(endpoint = "venues", error = %e),
    }

    Ok(())
}
