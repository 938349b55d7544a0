use serde_json::Value;

use super::require;
use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

const NO_TEAM: &str = "No team ID set";

/// Teams, and everything scoped to a single team.
#[derive(Clone, Copy, Debug)]
pub struct Teams<'client> {
    client: &'client Client,
    id: Option<u32>,
}

impl<'client> Teams<'client> {
    #[must_use]
    pub fn new(client: &'client Client, id: Option<u32>) -> Self {
        Self { client, id }
    }

    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("teams", query, false).await
    }

    pub async fn find(&self, id: u32) -> Result<Option<Value>> {
        self.client
            .call_single("teams", &Query::from([("id", id)]), false)
            .await
    }

    /// Countries that have at least one team.
    pub async fn countries(&self) -> Result<Envelope> {
        self.client.call("teams/countries", &Query::new(), false).await
    }

    /// Head-to-head fixtures between the bound team and `opponent`.
    pub async fn h2h(&self, opponent: u32, query: &Query) -> Result<Envelope> {
        let id = require(self.id, NO_TEAM)?;
        let query = Query::merged(Query::from([("h2h", format!("{id}-{opponent}"))]), query);

        self.client.call("fixtures/headtohead", &query, false).await
    }

    pub async fn seasons(&self) -> Result<Envelope> {
        self.scoped("teams/seasons", &Query::new()).await
    }

    pub async fn squad(&self, query: &Query) -> Result<Envelope> {
        self.scoped("players/squads", query).await
    }

    /// Standings of every league the bound team played in during `year`.
    pub async fn standings(&self, year: u32, query: &Query) -> Result<Envelope> {
        let id = require(self.id, NO_TEAM)?;
        let query = Query::merged(Query::from([("team", id), ("season", year)]), query);

        self.client.call("standings", &query, false).await
    }

    pub async fn statistics(&self, league: u32, season: u32, query: &Query) -> Result<Envelope> {
        let id = require(self.id, NO_TEAM)?;
        let identity = Query::from([("team", id), ("league", league), ("season", season)]);

        self.client
            .call("teams/statistics", &Query::merged(identity, query), false)
            .await
    }

    pub async fn transfers(&self, query: &Query) -> Result<Envelope> {
        self.scoped("transfers", query).await
    }

    async fn scoped(&self, path: &str, query: &Query) -> Result<Envelope> {
        let team = require(self.id, NO_TEAM)?;
        let query = Query::merged(Query::from([("team", team)]), query);

        self.client.call(path, &query, false).await
    }
}
