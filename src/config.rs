//! Client configuration.
//!
//! A [`Config`] carries the three values the host environment supplies (API key,
//! origin, default timezone) plus the TLS verification switch. It is validated
//! once, when a [`Client`](crate::Client) is constructed, and never changes afterwards.

use std::env;
use std::str::FromStr;

use bon::Builder;
use secrecy::{ExposeSecret as _, SecretString};

use crate::error::Error;
use crate::{API_ENV_VAR, API_KEY_VAR, API_ORIGIN_VAR, API_TIMEZONE_VAR, Result};

/// Provider through which the API is reached.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Origin {
    #[strum(serialize = "rapidapi")]
    RapidApi,
    #[strum(serialize = "api-sports")]
    ApiSports,
}

impl Origin {
    /// Base URL requests are resolved against. Always ends with `/`.
    #[must_use]
    pub fn base_url(self) -> Option<&'static str> {
        crate::base_url(&self.to_string())
    }

    /// Resolves an origin name, ignoring ASCII case, to the provider and its base URL.
    fn resolve(name: &str) -> Result<(Origin, &'static str)> {
        if name.trim().is_empty() {
            return Err(Error::configuration("No API origin set"));
        }

        let name = name.to_ascii_lowercase();
        crate::origin(&name)
            .zip(crate::base_url(&name))
            .ok_or_else(|| Error::configuration("Invalid API origin"))
    }
}

impl FromStr for Origin {
    type Err = Error;

    /// Parses an origin name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Origin::resolve(s).map(|(origin, _)| origin)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.to_string()
    }
}

/// Configuration for [`Client`](crate::Client)
///
/// ```
/// use api_football_sdk::{Config, Origin};
///
/// let config = Config::builder()
///     .api_key("my-key")
///     .origin(Origin::ApiSports)
///     .timezone("Europe/London")
///     .build();
///
/// assert_eq!(config.timezone(), Some("Europe/London"));
/// ```
#[derive(Clone, Debug, Builder)]
pub struct Config {
    #[builder(into)]
    api_key: SecretString,
    /// Raw origin name, matched case-insensitively when the client is built.
    #[builder(into)]
    origin: String,
    /// Timezone injected into timezone-aware calls that do not carry one.
    #[builder(into)]
    timezone: Option<String>,
    /// Disabled only when running in a test environment.
    #[builder(default = true)]
    verify_tls: bool,
}

impl Config {
    /// Reads the configuration from `FOOTBALL_API_*` environment variables.
    ///
    /// Missing variables are left blank so that validation reports them the same
    /// way as an explicitly empty value. `FOOTBALL_API_ENV=testing` turns TLS
    /// verification off.
    #[must_use]
    pub fn from_env() -> Self {
        let testing = env::var(API_ENV_VAR).is_ok_and(|value| value == "testing");

        Config::builder()
            .api_key(env::var(API_KEY_VAR).unwrap_or_default())
            .origin(env::var(API_ORIGIN_VAR).unwrap_or_default())
            .maybe_timezone(env::var(API_TIMEZONE_VAR).ok().filter(|tz| !tz.is_empty()))
            .verify_tls(!testing)
            .build()
    }

    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    #[must_use]
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Checks the key and origin, in that order, and returns the parsed [`Origin`]
    /// with its base URL.
    pub(crate) fn validate(&self) -> Result<(Origin, &'static str)> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(Error::configuration("No API key set"));
        }

        Origin::resolve(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Configuration, Kind};

    fn reason(error: &Error) -> Option<&str> {
        error
            .downcast_ref::<Configuration>()
            .map(|c| c.reason.as_str())
    }

    #[test]
    fn origin_should_parse_ignoring_case() {
        assert_eq!("RAPIDAPI".parse::<Origin>().ok(), Some(Origin::RapidApi));
        assert_eq!("Api-Sports".parse::<Origin>().ok(), Some(Origin::ApiSports));
    }

    #[test]
    fn origin_should_round_trip_through_display() {
        for origin in [Origin::RapidApi, Origin::ApiSports] {
            assert_eq!(origin.to_string().parse::<Origin>().ok(), Some(origin));
        }
    }

    #[test]
    fn unknown_origin_should_fail() {
        let err = "football-data".parse::<Origin>().unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
        assert_eq!(reason(&err), Some("Invalid API origin"));
    }

    #[test]
    fn blank_origin_should_fail() {
        let err = "  ".parse::<Origin>().unwrap_err();

        assert_eq!(reason(&err), Some("No API origin set"));
    }

    #[test]
    fn base_urls_should_match_providers() {
        assert_eq!(
            Origin::RapidApi.base_url(),
            Some("https://api-football-v1.p.rapidapi.com/v3/")
        );
        assert_eq!(
            Origin::ApiSports.base_url(),
            Some("https://v3.football.api-sports.io/")
        );
    }

    #[test]
    fn validate_should_check_key_before_origin() {
        let config = Config::builder().api_key("").origin("nowhere").build();

        let err = config.validate().unwrap_err();

        assert_eq!(reason(&err), Some("No API key set"));
    }

    #[test]
    fn validate_should_return_origin() {
        let config = Config::builder().api_key("key").origin("RapidAPI").build();

        assert_eq!(
            config.validate().ok(),
            Some((Origin::RapidApi, "https://api-football-v1.p.rapidapi.com/v3/"))
        );
        assert!(config.verify_tls(), "TLS verification is on by default");
    }

    #[test]
    fn debug_should_redact_api_key() {
        let config = Config::builder().api_key("super-secret").origin(Origin::RapidApi).build();

        assert!(
            !format!("{config:?}").contains("super-secret"),
            "API key leaked into Debug output"
        );
    }
}
