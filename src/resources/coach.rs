use serde_json::Value;

use super::require;
use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

const NO_COACH: &str = "No coach ID set";

/// Coaches and their careers.
#[derive(Clone, Copy, Debug)]
pub struct Coaches<'client> {
    client: &'client Client,
    id: Option<u32>,
}

impl<'client> Coaches<'client> {
    #[must_use]
    pub fn new(client: &'client Client, id: Option<u32>) -> Self {
        Self { client, id }
    }

    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// All coaches matching `query`, with their careers.
    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("coachs", query, false).await
    }

    /// A single coach by id.
    pub async fn find(&self, id: u32) -> Result<Option<Value>> {
        self.client
            .call_single("coachs", &Query::from([("id", id)]), false)
            .await
    }

    /// Trophies won by the bound coach.
    pub async fn trophies(&self) -> Result<Envelope> {
        let id = require(self.id, NO_COACH)?;
        self.client
            .call("trophies", &Query::from([("coach", id)]), false)
            .await
    }

    /// Periods the bound coach was sidelined.
    pub async fn sidelined(&self) -> Result<Envelope> {
        let id = require(self.id, NO_COACH)?;
        self.client
            .call("sidelined", &Query::from([("coach", id)]), false)
            .await
    }
}
