use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

/// Countries available to the `leagues` endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Countries<'client> {
    client: &'client Client,
}

impl<'client> Countries<'client> {
    #[must_use]
    pub fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Filters such as `name`, `code` or `search` are passed through untouched.
    pub async fn get(&self, query: &Query) -> Result<Envelope> {
        self.client.call("countries", query, false).await
    }
}
