use serde_json::Value;

use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

/// Stadiums. The API requires at least one filter on [`Venues::get`].
#[derive(Clone, Copy, Debug)]
pub struct Venues<'client> {
    client: &'client Client,
}

impl<'client> Venues<'client> {
    #[must_use]
    pub fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("venues", query, false).await
    }

    pub async fn find(&self, id: u32) -> Result<Option<Value>> {
        self.client
            .call_single("venues", &Query::from([("id", id)]), false)
            .await
    }
}
