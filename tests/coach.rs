#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

use api_football_sdk::Query;
use api_football_sdk::error::{InvalidArgument, Kind};
use httpmock::{Method::GET, MockServer};
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{client, envelope};

#[tokio::test]
async fn get_should_use_coachs_path() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/coachs").query_param("team", "85");
        then.status(StatusCode::OK).json_body(envelope(
            "coachs",
            json!([{"id": 40, "name": "M. Pochettino"}]),
        ));
    });

    let coaches = client
        .coaches(None)
        .get(&Query::from([("team", 85)]))
        .await?;

    assert_eq!(coaches.response[0]["id"], 40);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn trophies_and_sidelined_should_send_coach() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server)?;
    let coach = client.coaches(Some(2));

    let trophies = server.mock(|when, then| {
        when.method(GET).path("/trophies").query_param("coach", "2");
        then.status(StatusCode::OK)
            .json_body(envelope("trophies", json!([{"league": "Ligue 1"}])));
    });
    let sidelined = server.mock(|when, then| {
        when.method(GET).path("/sidelined").query_param("coach", "2");
        then.status(StatusCode::OK)
            .json_body(envelope("sidelined", json!([])));
    });

    assert_eq!(coach.trophies().await?.results, 1);
    assert!(coach.sidelined().await?.response.is_empty());

    trophies.assert();
    sidelined.assert();

    Ok(())
}

#[tokio::test]
async fn unbound_coach_should_not_send_requests() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = client(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(StatusCode::OK)
            .json_body(envelope("trophies", json!([])));
    });

    for coach in [client.coaches(None), client.coaches(Some(0))] {
        let results = [
            ("trophies", coach.trophies().await),
            ("sidelined", coach.sidelined().await),
        ];

        for (method, result) in results {
            let err = result.unwrap_err();

            assert_eq!(err.kind(), Kind::InvalidArgument, "{method}");
            assert_eq!(
                err.downcast_ref::<InvalidArgument>().map(|e| e.reason.as_str()),
                Some("No coach ID set"),
                "{method}"
            );
        }
    }

    mock.assert_calls(0);

    Ok(())
}
