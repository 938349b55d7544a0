#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use api_football_sdk::{Client, Config, Origin};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const API_KEY: &str = "test-key";
pub const TIMEZONE: &str = "Europe/London";
pub const RAPIDAPI_HOST: &str = "api-football-v1.p.rapidapi.com";

/// Client pointed at `server`, with a default timezone.
pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .api_key(API_KEY)
        .origin(Origin::RapidApi)
        .timezone(TIMEZONE)
        .build();

    Ok(Client::with_host(&server.base_url(), config)?)
}

/// Client pointed at `server`, without a default timezone.
pub fn client_without_timezone(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .api_key(API_KEY)
        .origin(Origin::ApiSports)
        .build();

    Ok(Client::with_host(&server.base_url(), config)?)
}

/// A successful envelope wrapping `response`.
#[must_use]
pub fn envelope(get: &str, response: Value) -> Value {
    let results = response.as_array().map_or(1, Vec::len);

    json!({
        "get": get,
        "parameters": [],
        "errors": [],
        "results": results,
        "paging": {"current": 1, "total": 1},
        "response": response
    })
}
