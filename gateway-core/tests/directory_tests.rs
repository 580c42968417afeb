// Tests for the HTTP directory client

use gateway_core::directory::{DirectoryLookupService, HttpDirectory};
use gateway_core::error::GatewayError;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn directory_for(server: &MockServer) -> HttpDirectory {
    let base = Url::parse(&server.uri()).unwrap();
    HttpDirectory::new(&base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_lookup_spawned_planet() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .and(query_param("urbit-id", "~sampel-palnet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urbit-id": "~sampel-palnet",
            "ownership": { "owner": { "address": "0x0" } },
            "sponsor": {
                "urbit-id": "~marzod",
                "sponsor": { "urbit-id": "~zod", "sponsor": null }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let record = directory.lookup("~sampel-palnet").await.unwrap().unwrap();

    assert_eq!(record.urbit_id.as_str(), "~sampel-palnet");
    let sponsor = record.sponsor.as_ref().unwrap();
    assert_eq!(sponsor.urbit_id.as_str(), "~marzod");
    assert_eq!(
        sponsor.sponsor.as_ref().unwrap().urbit_id.as_str(),
        "~zod"
    );
}

#[tokio::test]
async fn test_lookup_null_is_unspawned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert!(directory.lookup("~fipfes").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_empty_body_is_unspawned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert!(directory.lookup("~fipfes").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let err = directory.lookup("~zod").await.unwrap_err();
    assert!(matches!(err, GatewayError::DirectoryStatus(503)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_lookup_malformed_json_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"urbit-id\": 5"))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let err = directory.lookup("~zod").await.unwrap_err();
    assert!(matches!(err, GatewayError::DirectoryDecode(_)));
}

#[tokio::test]
async fn test_lookup_invalid_sponsor_name_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get-node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urbit-id": "~zod",
            "sponsor": { "urbit-id": "not-a-ship" }
        })))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert!(matches!(
        directory.lookup("~zod").await,
        Err(GatewayError::DirectoryDecode(_))
    ));
}

#[tokio::test]
async fn test_lookup_unreachable_host() {
    // Bind then drop a listener so the port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let base = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
    let directory = HttpDirectory::new(&base, Duration::from_secs(2)).unwrap();
    assert!(matches!(
        directory.lookup("~zod").await,
        Err(GatewayError::Directory(_))
    ));
}
