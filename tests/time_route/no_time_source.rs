//! tests/time_route/no_time_source.rs
//! `/time` with no registered time source renders the empty value instead
//! of failing.

#[path = "../common/mod.rs"]
mod common;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

#[tokio::test]
async fn renders_empty_value_without_a_time_source() {
    let base_url: String = common::spawn_app(common::state_with_time_source(None));

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/time", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap(),
        "text/html; charset=utf-8"
    );
    assert_eq!(resp.text().await.unwrap(), "Time: ");
}
