//! Client for the API-Football v3 REST API.
//!
//! The [`Client`] owns the HTTP connection pool and the validated configuration.
//! Every resource builder borrows it and funnels its requests through
//! [`Client::call`] or [`Client::call_single`].
//!
//! # Example
//!
//! ```no_run
//! use api_football_sdk::{Client, Config, Origin, Query};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .api_key("my-key")
//!     .origin(Origin::RapidApi)
//!     .timezone("Europe/Madrid")
//!     .build();
//! let client = Client::new(config)?;
//!
//! // Standings for La Liga 2021
//! let standings = client.leagues(Some(140), Some(2021)).standings(&Query::new()).await?;
//! println!("{} results", standings.results);
//! # Ok(())
//! # }
//! ```

use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret as _;
use url::Url;

use crate::config::{Config, Origin};
use crate::envelope::Envelope;
use crate::query::Query;
use crate::resources::{
    Coaches, Countries, Fixtures, Leagues, Players, Teams, Timezones, Venues,
};
use crate::{RAPIDAPI_HOST, Result, ToQueryParams as _};

/// HTTP client for the API-Football v3 API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    origin: Origin,
    config: Config,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client against the base URL of the configured origin.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Configuration`](crate::error::Kind::Configuration) error if the API
    /// key is blank, or the origin is blank or unknown.
    pub fn new(config: Config) -> Result<Client> {
        let (origin, base_url) = config.validate()?;
        Self::build(base_url, origin, config)
    }

    /// Creates a client against an explicit base URL, e.g. a local mock or a proxy.
    ///
    /// The configuration is validated exactly as in [`Client::new`].
    pub fn with_host(host: &str, config: Config) -> Result<Client> {
        let (origin, _) = config.validate()?;
        Self::build(host, origin, config)
    }

    /// Creates a client from the `FOOTBALL_API_*` environment variables.
    pub fn from_env() -> Result<Client> {
        Self::new(Config::from_env())
    }

    fn build(host: &str, origin: Origin, config: Config) -> Result<Client> {
        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let mut api_key = HeaderValue::from_str(config.api_key().expose_secret())?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("api_football_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("X-RapidAPI-Host", HeaderValue::from_static(RAPIDAPI_HOST));
        headers.insert("X-RapidAPI-Key", api_key);

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()?;

        Ok(Self {
            host,
            origin,
            config,
            client,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends `GET {host}{path}?{query}` and decodes the envelope.
    ///
    /// When `use_timezone` is set and `query` has no `timezone` key, the configured
    /// default timezone (if any) is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be encoded, the request fails, the response
    /// is not an envelope, or the envelope carries errors.
    pub async fn call(&self, path: &str, query: &Query, use_timezone: bool) -> Result<Envelope> {
        let query = match self.config.timezone() {
            Some(timezone) if use_timezone && !query.contains_key("timezone") => {
                query.clone().with("timezone", timezone)
            }
            _ => query.clone(),
        };

        let request = self
            .client
            .request(
                Method::GET,
                format!("{}{path}{}", self.host, query.query_params()?),
            )
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Like [`Client::call`], but yields only the first item of `response`.
    ///
    /// An empty `response` is `Ok(None)`, not an error.
    pub async fn call_single(
        &self,
        path: &str,
        query: &Query,
        use_timezone: bool,
    ) -> Result<Option<serde_json::Value>> {
        Ok(self.call(path, query, use_timezone).await?.into_first())
    }

    #[must_use]
    pub fn coaches(&self, id: Option<u32>) -> Coaches<'_> {
        Coaches::new(self, id)
    }

    #[must_use]
    pub fn countries(&self) -> Countries<'_> {
        Countries::new(self)
    }

    #[must_use]
    pub fn fixtures(&self, id: Option<u32>) -> Fixtures<'_> {
        Fixtures::new(self, id)
    }

    #[must_use]
    pub fn leagues(&self, id: Option<u32>, season: Option<u32>) -> Leagues<'_> {
        Leagues::new(self, id, season)
    }

    #[must_use]
    pub fn players(&self, id: Option<u32>) -> Players<'_> {
        Players::new(self, id)
    }

    #[must_use]
    pub fn teams(&self, id: Option<u32>) -> Teams<'_> {
        Teams::new(self, id)
    }

    #[must_use]
    pub fn timezones(&self) -> Timezones<'_> {
        Timezones::new(self)
    }

    #[must_use]
    pub fn venues(&self) -> Venues<'_> {
        Venues::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    fn config(origin: &str) -> Config {
        Config::builder().api_key("key").origin(origin).build()
    }

    #[test]
    fn mixed_case_origin_should_resolve_same_host() -> anyhow::Result<()> {
        let upper = Client::new(config("RAPIDAPI"))?;
        let lower = Client::new(config("rapidapi"))?;

        assert_eq!(upper.host(), lower.host());
        assert_eq!(
            upper.host().as_str(),
            "https://api-football-v1.p.rapidapi.com/v3/"
        );
        assert_eq!(upper.origin(), Origin::RapidApi);

        Ok(())
    }

    #[test]
    fn api_sports_origin_should_resolve_host() -> anyhow::Result<()> {
        let client = Client::new(config("api-sports"))?;

        assert_eq!(client.host().as_str(), "https://v3.football.api-sports.io/");

        Ok(())
    }

    #[test]
    fn with_host_should_append_trailing_slash() -> anyhow::Result<()> {
        let client = Client::with_host("http://127.0.0.1:8080/v3", config("rapidapi"))?;

        assert_eq!(client.host().as_str(), "http://127.0.0.1:8080/v3/");

        Ok(())
    }

    #[test]
    fn with_host_should_still_validate() {
        let err = Client::with_host("http://127.0.0.1:8080", config("espn")).unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
    }

    #[test]
    fn invalid_host_should_be_configuration_error() {
        let err = Client::with_host("not a url", config("rapidapi")).unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
    }

    #[test]
    fn api_key_with_newline_should_be_configuration_error() {
        let config = Config::builder()
            .api_key("bad\nkey")
            .origin(Origin::RapidApi)
            .build();

        let err = Client::new(config).unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
    }
}
