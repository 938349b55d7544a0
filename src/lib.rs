#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod query;
pub mod resources;
pub(crate) mod serde_helpers;

use phf::phf_map;
use reqwest::Request;
use serde::Serialize;

pub use crate::client::Client;
pub use crate::config::{Config, Origin};
pub use crate::envelope::{Envelope, Paging};
use crate::error::Error;
pub use crate::query::{Query, QueryValue};

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable holding the API key, read by [`Config::from_env`].
pub const API_KEY_VAR: &str = "FOOTBALL_API_KEY";

/// Environment variable holding the API origin (`rapidapi` or `api-sports`).
pub const API_ORIGIN_VAR: &str = "FOOTBALL_API_ORIGIN";

/// Environment variable holding the default timezone for timezone-aware calls.
pub const API_TIMEZONE_VAR: &str = "FOOTBALL_API_TIMEZONE";

/// Environment variable naming the execution environment. `testing` disables TLS verification.
pub const API_ENV_VAR: &str = "FOOTBALL_API_ENV";

/// Value sent as `X-RapidAPI-Host` on every request, whichever origin is selected.
pub const RAPIDAPI_HOST: &str = "api-football-v1.p.rapidapi.com";

/// Origin name to provider and base URL. Base URLs always end with `/`.
static ORIGINS: phf::Map<&'static str, (Origin, &'static str)> = phf_map! {
    "rapidapi" => (Origin::RapidApi, "https://api-football-v1.p.rapidapi.com/v3/"),
    "api-sports" => (Origin::ApiSports, "https://v3.football.api-sports.io/"),
};

/// Looks up an [`Origin`] by its lower-case name.
#[must_use]
pub fn origin(name: &str) -> Option<Origin> {
    ORIGINS.get(name).map(|(origin, _)| *origin)
}

/// Looks up the base URL of an origin by its lower-case name.
#[must_use]
pub fn base_url(name: &str) -> Option<&'static str> {
    ORIGINS.get(name).map(|(_, url)| *url)
}

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the fields into a query string.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::InvalidArgument`](error::Kind::InvalidArgument) error if the value
    /// cannot be flattened into key-value pairs.
    fn query_params(&self) -> Result<String> {
        let params = serde_html_form::to_string(self)?;

        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{params}"))
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes `request` and hands the body to the envelope decoder.
///
/// Non-success statuses surface as [`error::Kind::Status`]; network failures as
/// [`error::Kind::Transport`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<Envelope> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.text().await?;
    let envelope = envelope::decode(&body);

    #[cfg(feature = "tracing")]
    if let Err(e) = &envelope {
        tracing::warn!(method = %method, path = %path, error = %e, "API call returned an error");
    }

    envelope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lookup_should_resolve_known_names() {
        assert_eq!(origin("rapidapi"), Some(Origin::RapidApi));
        assert_eq!(origin("api-sports"), Some(Origin::ApiSports));
    }

    #[test]
    fn origin_lookup_is_case_sensitive() {
        assert_eq!(origin("RapidApi"), None);
        assert_eq!(origin("api_sports"), None);
    }

    #[test]
    fn empty_query_should_produce_empty_string() {
        assert_eq!(Query::new().query_params().ok().as_deref(), Some(""));
    }

    #[test]
    fn unflattenable_value_should_fail() {
        let err = 42_u32.query_params().unwrap_err();

        assert_eq!(err.kind(), error::Kind::InvalidArgument);
    }

    #[test]
    fn base_url_lookup_should_resolve_known_names() {
        assert_eq!(
            base_url("rapidapi"),
            Some("https://api-football-v1.p.rapidapi.com/v3/")
        );
        assert_eq!(
            base_url("api-sports"),
            Some("https://v3.football.api-sports.io/")
        );
        assert_eq!(base_url("RapidAPI"), None);
    }

    #[test]
    fn query_params_should_be_prefixed_and_encoded() {
        let query = Query::from([
            ("fixture", QueryValue::from(720_752)),
            ("round", QueryValue::from("Regular Season - 1")),
        ]);

        assert_eq!(
            query.query_params().ok().as_deref(),
            Some("?fixture=720752&round=Regular+Season+-+1")
        );
    }
}
