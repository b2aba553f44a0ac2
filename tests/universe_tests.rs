//! Universe details and the reports resolved through CMS queries.

mod common;

use bocli::{ClientError, ObjectId};
use common::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_universe(mock_server: &MockServer, id: u64, kind: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/universes/{}", DOCUMENTS, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "universe": {
                "id": id,
                "cuid": "AQB2GBuI7nJNiHvHqbCbAtQ",
                "name": "eFashion",
                "type": kind,
                "folderId": 23
            }
        })))
        .mount(mock_server)
        .await;
}

async fn mount_cms_query(mock_server: &MockServer, fragment: &str, entries: Value) {
    Mock::given(method("POST"))
        .and(path(format!("{}/v1/cmsquery", PLATFORM)))
        .and(query_param("page", "1"))
        .and(query_param("pagesize", "50000"))
        .and(body_string_contains(fragment))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entries": entries })))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_universe_details_lowercase_kind() {
    let mock_server = MockServer::start().await;
    mount_universe(&mock_server, 5551, "UNX").await;
    let client = logged_on_client(&mock_server).await;

    let details = client
        .get_universe_details(&ObjectId::from(5551))
        .await
        .unwrap();
    assert_eq!(details.kind, "unx");
    assert_eq!(details.name, "eFashion");
    assert_eq!(details.cuid, "AQB2GBuI7nJNiHvHqbCbAtQ");
}

#[tokio::test]
async fn test_unknown_universe_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/universes/404", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = logged_on_client(&mock_server).await;
    match client.get_universe_details(&ObjectId::from(404)).await {
        Err(ClientError::NotFound(message)) => {
            assert!(message.contains("Check the universe id again"));
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reports_of_unx_universe() {
    let mock_server = MockServer::start().await;
    mount_universe(&mock_server, 5551, "unx").await;
    mount_cms_query(
        &mock_server,
        "SI_SL_DOCUMENTS FROM CI_APPOBJECTS WHERE SI_KIND = 'DSL.MetaDataFile' AND SI_ID =5551",
        json!([{
            "SI_ID": 5551,
            "SI_NAME": "eFashion",
            "SI_SL_DOCUMENTS": { "1": 7001, "2": 7002, "SI_TOTAL": 2 }
        }]),
    )
    .await;

    let client = logged_on_client(&mock_server).await;
    let reports = client
        .get_related_reports(&ObjectId::from(5551))
        .await
        .unwrap();
    assert_eq!(reports.universe_id, ObjectId::from(5551));
    assert_eq!(reports.universe_name, "eFashion");
    assert_eq!(reports.report_ids, vec![ObjectId::from(7001), ObjectId::from(7002)]);
}

#[tokio::test]
async fn test_reports_of_unv_universe() {
    let mock_server = MockServer::start().await;
    mount_universe(&mock_server, 42, "unv").await;
    mount_cms_query(
        &mock_server,
        "SI_WEBI FROM CI_APPOBJECTS WHERE SI_KIND = 'Universe' AND SI_ID = 42",
        json!([{
            "SI_ID": 42,
            "SI_NAME": "Island Resorts",
            "SI_WEBI": { "SI_TOTAL": 1, "1": 8100 }
        }]),
    )
    .await;

    let client = logged_on_client(&mock_server).await;
    let reports = client.get_related_reports(&ObjectId::from(42)).await.unwrap();
    assert_eq!(reports.universe_name, "Island Resorts");
    assert_eq!(reports.report_ids, vec![ObjectId::from(8100)]);
}

#[tokio::test]
async fn test_universe_without_reports() {
    let mock_server = MockServer::start().await;
    mount_universe(&mock_server, 42, "unv").await;
    mount_cms_query(
        &mock_server,
        "SI_WEBI",
        json!([{ "SI_ID": 42, "SI_NAME": "Island Resorts", "SI_WEBI": { "SI_TOTAL": 0 } }]),
    )
    .await;

    let client = logged_on_client(&mock_server).await;
    let reports = client.get_related_reports(&ObjectId::from(42)).await.unwrap();
    assert!(reports.report_ids.is_empty());
}

#[tokio::test]
async fn test_unsupported_universe_type_issues_no_query() {
    let mock_server = MockServer::start().await;
    mount_universe(&mock_server, 5551, "relational").await;

    Mock::given(method("POST"))
        .and(path(format!("{}/v1/cmsquery", PLATFORM)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = logged_on_client(&mock_server).await;
    match client.get_related_reports(&ObjectId::from(5551)).await {
        Err(ClientError::UnsupportedUniverseType(kind)) => assert_eq!(kind, "relational"),
        other => panic!("Expected UnsupportedUniverseType, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_of_universe() {
    let mock_server = MockServer::start().await;
    mount_cms_query(
        &mock_server,
        "SI_DATACONNECTION",
        json!([{ "SI_DATACONNECTION": { "1": 6240, "SI_TOTAL": 1 } }]),
    )
    .await;

    let client = logged_on_client(&mock_server).await;
    let connection = client.get_connection_id(&ObjectId::from(5551)).await.unwrap();
    assert_eq!(connection, ObjectId::from(6240));
}

#[tokio::test]
async fn test_empty_query_result_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_cms_query(&mock_server, "SI_DATACONNECTION", json!([])).await;

    let client = logged_on_client(&mock_server).await;
    let result = client.get_connection_id(&ObjectId::from(5551)).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_non_numeric_id_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/v1/cmsquery", PLATFORM)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = logged_on_client(&mock_server).await;
    let result = client.get_connection_id(&ObjectId::from("1 OR 1=1")).await;
    assert!(matches!(result, Err(ClientError::InvalidIdentifier(_))));
}
