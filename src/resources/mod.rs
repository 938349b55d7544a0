//! Resource-scoped request builders.
//!
//! Each builder borrows a [`Client`](crate::Client) and carries the identity it was
//! created with (a team id, a league id and season, ...). Identity is fixed for the
//! lifetime of the builder. Methods that need an identity the builder was not
//! given fail with [`Kind::InvalidArgument`](crate::error::Kind::InvalidArgument)
//! before any request is sent.
//!
//! | Builder | Endpoints |
//! |---------|-----------|
//! | [`Coaches`] | `coachs`, `trophies`, `sidelined` |
//! | [`Countries`] | `countries` |
//! | [`Fixtures`] | `fixtures`, `fixtures/*`, `injuries`, `predictions` |
//! | [`Leagues`] | `leagues`, `leagues/seasons`, `fixtures`, `fixtures/rounds`, `injuries`, `standings`, `players`, `players/top*` |
//! | [`Players`] | `players`, `players/seasons`, `players/squads`, `sidelined`, `transfers`, `trophies` |
//! | [`Teams`] | `teams`, `teams/*`, `fixtures/headtohead`, `players/squads`, `standings`, `transfers` |
//! | [`Timezones`] | `timezone` |
//! | [`Venues`] | `venues` |

pub mod coach;
pub mod country;
pub mod fixture;
pub mod league;
pub mod player;
pub mod team;
pub mod timezone;
pub mod venue;

pub use coach::Coaches;
pub use country::Countries;
pub use fixture::Fixtures;
pub use league::Leagues;
pub use player::Players;
pub use team::Teams;
pub use timezone::Timezones;
pub use venue::Venues;

use crate::Result;
use crate::error::Error;

/// Unwraps an identity field, treating `0` the same as absent.
fn require(value: Option<u32>, missing: &'static str) -> Result<u32> {
    value
        .filter(|value| *value != 0)
        .ok_or_else(|| Error::invalid_argument(missing))
}
