use crate::envelope::Envelope;
use crate::query::Query;
use crate::{Client, Result};

#[derive(Clone, Copy, Debug)]
pub struct Timezones<'client> {
    client: &'client Client,
}

impl<'client> Timezones<'client> {
    #[must_use]
    pub fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Timezone names accepted by the `timezone` parameter of fixture endpoints.
    pub async fn get(&self) -> Result<Envelope> {
        self.client.call("timezone", &Query::new(), false).await
    }
}
