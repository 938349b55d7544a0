use serde_json::Value;

use super::require;
use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

const NO_FIXTURE: &str = "No fixture ID set";

/// Fixtures, and the per-fixture endpoints (events, lineups, statistics, ...).
///
/// `get`, `find` and `injuries` are timezone-aware: when the caller's query has
/// no `timezone`, the client's default timezone is sent.
#[derive(Clone, Copy, Debug)]
pub struct Fixtures<'client> {
    client: &'client Client,
    id: Option<u32>,
}

impl<'client> Fixtures<'client> {
    #[must_use]
    pub fn new(client: &'client Client, id: Option<u32>) -> Self {
        Self { client, id }
    }

    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Fixtures matching `query`. The API requires at least one parameter.
    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("fixtures", query, true).await
    }

    pub async fn find(&self, id: u32) -> Result<Option<Value>> {
        self.client
            .call_single("fixtures", &Query::from([("id", id)]), true)
            .await
    }

    pub async fn events(&self, query: &Query) -> Result<Envelope> {
        self.scoped("fixtures/events", query, false).await
    }

    /// Players missing the fixture (injured, suspended, ...).
    pub async fn injuries(&self, query: &Query) -> Result<Envelope> {
        self.scoped("injuries", query, true).await
    }

    pub async fn lineups(&self, query: &Query) -> Result<Envelope> {
        self.scoped("fixtures/lineups", query, false).await
    }

    /// Per-player statistics for the fixture.
    pub async fn players(&self, query: &Query) -> Result<Envelope> {
        self.scoped("fixtures/players", query, false).await
    }

    pub async fn predictions(&self) -> Result<Envelope> {
        self.scoped("predictions", &Query::new(), false).await
    }

    pub async fn statistics(&self, query: &Query) -> Result<Envelope> {
        self.scoped("fixtures/statistics", query, false).await
    }

    async fn scoped(&self, path: &str, query: &Query, use_timezone: bool) -> Result<Envelope> {
        let fixture = require(self.id, NO_FIXTURE)?;
        let query = Query::merged(Query::from([("fixture", fixture)]), query);

        self.client.call(path, &query, use_timezone).await
    }
}
