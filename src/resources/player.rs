use super::require;
use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

const NO_PLAYER: &str = "No player ID set";

/// Players, their careers and statistics.
#[derive(Clone, Copy, Debug)]
pub struct Players<'client> {
    client: &'client Client,
    id: Option<u32>,
}

impl<'client> Players<'client> {
    #[must_use]
    pub fn new(client: &'client Client, id: Option<u32>) -> Self {
        Self { client, id }
    }

    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Player statistics matching `query`. The API wants at least a season with an id,
    /// team, league or search.
    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("players", query, false).await
    }

    /// Seasons for which the bound player has statistics.
    pub async fn seasons(&self) -> Result<Envelope> {
        self.scoped("players/seasons", &Query::new()).await
    }

    pub async fn sidelined(&self) -> Result<Envelope> {
        self.scoped("sidelined", &Query::new()).await
    }

    /// Current squads the bound player belongs to.
    pub async fn squads(&self, query: &Query) -> Result<Envelope> {
        self.scoped("players/squads", query).await
    }

    /// The bound player's statistics for one season.
    pub async fn statistics(&self, season: u32, query: &Query) -> Result<Envelope> {
        let id = require(self.id, NO_PLAYER)?;
        let query = Query::merged(Query::from([("id", id), ("season", season)]), query);

        self.client.call("players", &query, false).await
    }

    pub async fn transfers(&self, query: &Query) -> Result<Envelope> {
        self.scoped("transfers", query).await
    }

    pub async fn trophies(&self, query: &Query) -> Result<Envelope> {
        self.scoped("trophies", query).await
    }

    async fn scoped(&self, path: &str, query: &Query) -> Result<Envelope> {
        let player = require(self.id, NO_PLAYER)?;
        let query = Query::merged(Query::from([("player", player)]), query);

        self.client.call(path, &query, false).await
    }
}
