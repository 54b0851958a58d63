use std::sync::Arc;

use super::*;
use crate::auth::StaticToken;
use serde_json::json;
use url::Url;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

fn final_1930() -> FinalResult {
    FinalResult::new(1930, "Uruguay", "4–2", "Argentina")
}

fn sheet_writer(server: &MockServer, target: SheetTarget) -> SheetWriter {
    let client = SheetsClient::new(Arc::new(StaticToken("t".to_string())))
        .unwrap()
        .with_base_url(Url::parse(&server.uri()).unwrap());
    SheetWriter::new(client, target)
}

async fn mount_first_row(server: &MockServer, body: Value) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/sheet-1/values/Finals!A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_append(server: &MockServer, expected_values: Value) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/sheet-1/values/Finals!A:D:append"))
        .and(matchers::query_param("valueInputOption", "USER_ENTERED"))
        .and(matchers::query_param("insertDataOption", "INSERT_ROWS"))
        .and(matchers::body_partial_json(json!({ "values": expected_values })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-1",
            "updates": {"updatedRange": "Finals!A1:D2"}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_empty_sheet_gets_header_then_row() {
    let server = MockServer::start().await;
    mount_first_row(&server, json!({"range": "Finals!A1", "majorDimension": "ROWS"})).await;
    mount_append(
        &server,
        json!([
            ["Year", "Winner", "Score", "Runner-Up"],
            [1930, "Uruguay", "4–2", "Argentina"]
        ]),
    )
    .await;

    let writer = sheet_writer(&server, SheetTarget::new("sheet-1", "Finals"));
    assert_eq!(writer.append(&[final_1930()]).await.unwrap(), 2);
}

#[tokio::test]
async fn test_empty_first_row_collection_counts_as_empty() {
    let server = MockServer::start().await;
    mount_first_row(&server, json!({"values": [[]]})).await;
    mount_append(
        &server,
        json!([
            ["Year", "Winner", "Score", "Runner-Up"],
            [1930, "Uruguay", "4–2", "Argentina"]
        ]),
    )
    .await;

    let writer = sheet_writer(&server, SheetTarget::new("sheet-1", "Finals"));
    assert!(writer.append_results(&[final_1930()]).await);
}

#[tokio::test]
async fn test_existing_data_gets_rows_only() {
    let server = MockServer::start().await;
    mount_first_row(&server, json!({"values": [["Year"]]})).await;
    mount_append(&server, json!([[1930, "Uruguay", "4–2", "Argentina"]])).await;

    let writer = sheet_writer(&server, SheetTarget::new("sheet-1", "Finals"));
    assert_eq!(writer.append(&[final_1930()]).await.unwrap(), 1);
}

#[tokio::test]
async fn test_empty_batch_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let writer = sheet_writer(&server, SheetTarget::new("sheet-1", "Finals"));
    assert!(writer.append_results(&[]).await);
    assert!(writer.append_results(&[]).await);

    // even without a usable target
    let writer = sheet_writer(&server, SheetTarget::unresolved());
    assert!(writer.append_results(&[]).await);
}

#[tokio::test]
async fn test_unresolved_target_fails_without_requests() {
    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for target in [
        SheetTarget::unresolved(),
        SheetTarget::new("YOUR_SPREADSHEET_ID_HERE", "Sheet1"),
    ] {
        let writer = sheet_writer(&server, target);
        assert!(matches!(
            writer.append(&[final_1930()]).await,
            Err(SheetsError::Config(_))
        ));
        assert!(!writer.append_results(&[final_1930()]).await);
    }
}

#[tokio::test]
async fn test_rejected_append_reports_failure() {
    let server = MockServer::start().await;
    mount_first_row(&server, json!({"values": [["Year"]]})).await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let writer = sheet_writer(&server, SheetTarget::new("sheet-1", "Finals"));
    assert!(!writer.append_results(&[final_1930()]).await);
}

#[test]
fn test_row_shapes() {
    assert_eq!(header_row(), vec![json!("Year"), json!("Winner"), json!("Score"), json!("Runner-Up")]);
    assert_eq!(
        result_row(&final_1930()),
        vec![json!(1930), json!("Uruguay"), json!("4–2"), json!("Argentina")]
    );
}
