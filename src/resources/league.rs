use serde_json::Value;

use super::require;
use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

const NO_LEAGUE: &str = "No league ID set";
const NO_SEASON: &str = "No season year set";

/// Competitions, and everything scoped to one season of a competition.
///
/// Season-scoped methods need both the league id and the season year; the league id
/// is checked first.
#[derive(Clone, Copy, Debug)]
pub struct Leagues<'client> {
    client: &'client Client,
    id: Option<u32>,
    season: Option<u32>,
}

impl<'client> Leagues<'client> {
    #[must_use]
    pub fn new(client: &'client Client, id: Option<u32>, season: Option<u32>) -> Self {
        Self { client, id, season }
    }

    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    #[must_use]
    pub fn season(&self) -> Option<u32> {
        self.season
    }

    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("leagues", query, false).await
    }

    pub async fn find(&self, id: u32) -> Result<Option<Value>> {
        self.client
            .call_single("leagues", &Query::from([("id", id)]), false)
            .await
    }

    /// Every season year known to the API.
    pub async fn seasons(&self) -> Result<Envelope> {
        self.client.call("leagues/seasons", &Query::new(), false).await
    }

    pub async fn fixtures(&self, query: &Query) -> Result<Envelope> {
        let query = Query::merged(self.identity()?, query);
        self.client.call("fixtures", &query, false).await
    }

    pub async fn injuries(&self, query: &Query) -> Result<Envelope> {
        let query = Query::merged(self.identity()?, query);
        self.client.call("injuries", &query, true).await
    }

    /// One page of the season's players. `page` defaults to 1 and always wins over a
    /// `page` key in `query`.
    pub async fn players(&self, page: Option<u32>, query: &Query) -> Result<Envelope> {
        let page = page.unwrap_or(1);
        let mut query = Query::merged(self.identity()?.with("page", page), query);
        query.insert("page", page);

        self.client.call("players", &query, false).await
    }

    pub async fn rounds(&self, query: &Query) -> Result<Envelope> {
        let query = Query::merged(self.identity()?, query);
        self.client.call("fixtures/rounds", &query, false).await
    }

    pub async fn standings(&self, query: &Query) -> Result<Envelope> {
        let query = Query::merged(self.identity()?, query);
        self.client.call("standings", &query, false).await
    }

    pub async fn top_scorers(&self) -> Result<Envelope> {
        self.top("players/topscorers").await
    }

    pub async fn top_assists(&self) -> Result<Envelope> {
        self.top("players/topassists").await
    }

    pub async fn top_red_cards(&self) -> Result<Envelope> {
        self.top("players/topredcards").await
    }

    pub async fn top_yellow_cards(&self) -> Result<Envelope> {
        self.top("players/topyellowcards").await
    }

    async fn top(&self, path: &str) -> Result<Envelope> {
        self.client.call(path, &self.identity()?, false).await
    }

    fn identity(&self) -> Result<Query> {
        let league = require(self.id, NO_LEAGUE)?;
        let season = require(self.season, NO_SEASON)?;

        Ok(Query::from([("league", league), ("season", season)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::error::{InvalidArgument, Kind};

    fn client() -> Client {
        Client::with_host(
            "http://127.0.0.1:9",
            Config::builder().api_key("key").origin("rapidapi").build(),
        )
        .expect("valid config")
    }

    fn reason(leagues: &Leagues<'_>) -> Option<String> {
        leagues
            .identity()
            .err()
            .and_then(|e| e.downcast_ref::<InvalidArgument>().map(|e| e.reason.clone()))
    }

    #[test]
    fn identity_should_check_league_before_season() {
        let client = client();

        assert_eq!(
            reason(&client.leagues(None, None)).as_deref(),
            Some("No league ID set")
        );
        assert_eq!(
            reason(&client.leagues(Some(140), None)).as_deref(),
            Some("No season year set")
        );
    }

    #[test]
    fn identity_should_order_league_then_season() -> anyhow::Result<()> {
        let client = client();
        let identity = client.leagues(Some(140), Some(2021)).identity()?;

        let keys: Vec<_> = identity.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["league", "season"]);

        Ok(())
    }

    #[test]
    fn zero_season_should_count_as_unset() {
        let client = client();
        let err = client.leagues(Some(140), Some(0)).identity().unwrap_err();

        assert_eq!(err.kind(), Kind::InvalidArgument);
    }
}
