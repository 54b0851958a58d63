//! Service-account auth and writer against one mock server.

use std::path::Path;
use std::sync::Arc;

use cupfinals_config::SheetTarget;
use cupfinals_protocols::{FinalResult, ResultSink};
use cupfinals_sheets::{ServiceAccountAuth, ServiceAccountKey, SheetWriter, SheetsClient};
use serde_json::json;
use url::Url;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/service_account.json");

#[tokio::test]
async fn test_append_with_service_account() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.integration",
            "expires_in": 3599
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/v4/spreadsheets/sheet-42/values/Sheet1!A1"))
        .and(matchers::header("authorization", "Bearer ya29.integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"range": "Sheet1!A1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/v4/spreadsheets/sheet-42/values/Sheet1!A:D:append"))
        .and(matchers::header("authorization", "Bearer ya29.integration"))
        .and(matchers::body_partial_json(json!({
            "values": [
                ["Year", "Winner", "Score", "Runner-Up"],
                [2014, "Germany", "1–0 (a.e.t.)", "Argentina"],
                [2018, "France", "4–2", "Croatia"]
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"spreadsheetId": "sheet-42"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut key = ServiceAccountKey::from_file(Path::new(FIXTURE)).unwrap();
    key.token_uri = format!("{}/token", server.uri());

    let client = SheetsClient::new(Arc::new(ServiceAccountAuth::new(key)))
        .unwrap()
        .with_base_url(Url::parse(&format!("{}/v4/spreadsheets", server.uri())).unwrap());
    let writer = SheetWriter::new(client, SheetTarget::new("sheet-42", "Sheet1"));

    let results = [
        FinalResult::new(2014, "Germany", "1–0 (a.e.t.)", "Argentina"),
        FinalResult::new(2018, "France", "4–2", "Croatia"),
    ];
    assert!(writer.append_results(&results).await);
}
