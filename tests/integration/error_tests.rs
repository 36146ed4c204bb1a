//! Error propagation from the service to the caller.

use anyhow::Result;
use serde_json::json;
use smaug::pagination::{ListQuery, ListSource};
use smaug::{ErrorKind, ServiceConfig, TokenCredentials};
use test_case::test_case;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, serve_collection, trigger_fixtures};

#[test_case(400, ErrorKind::InvalidArgument; "bad request")]
#[test_case(401, ErrorKind::Unauthorized; "expired token")]
#[test_case(403, ErrorKind::Forbidden; "missing role")]
#[test_case(404, ErrorKind::NotFound; "unknown marker")]
#[test_case(429, ErrorKind::RateLimited; "rate limited")]
#[test_case(500, ErrorKind::Internal; "server error")]
#[test_case(503, ErrorKind::Unavailable; "service down")]
#[tokio::test]
async fn test_status_maps_to_kind(status: u16, kind: ErrorKind) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 20).await.unwrap();
    let err = client.plans().list_paged().await.unwrap_err();
    assert_eq!(err.kind(), kind);
}

#[tokio::test]
async fn test_unknown_marker_propagates_with_request_id() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 3).await?;

    let err = client
        .triggers()
        .list_paged()
        .marker("trg_deleted")
        .sort_key("name")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.request_id(), Some("req-marker-missing"));
    assert!(err.message().contains("trg_deleted"));

    Ok(())
}

#[tokio::test]
async fn test_client_request_id_used_when_service_sends_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/plans/pln_1"))
        .and(header_exists("x-openstack-request-id"))
        .respond_with(ResponseTemplate::new(409).set_body_string("plan is in use"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 20).await?;
    let err = client.plans().delete("pln_1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.request_id().is_some_and(|id| id.starts_with("req-")));
    assert!(err.message().contains("plan is in use"));

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restores"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, 20).await?;
    let err = client.restores().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);

    Ok(())
}

#[tokio::test]
async fn test_entity_missing_required_field() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "providers": [{"name": "no id"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, 20).await?;
    let err = client.providers().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);

    Ok(())
}

#[tokio::test]
async fn test_connection_refused() -> Result<()> {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let uri = format!("http://{}", listener.local_addr()?);
    drop(listener);

    let client = smaug::Client::builder()
        .service_config(ServiceConfig::builder().endpoint(uri).build())
        .credentials(TokenCredentials::new("token"))
        .build()
        .await?;
    let err = client.plans().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(err.is_transient());

    Ok(())
}

#[tokio::test]
async fn test_headers_sent_on_every_call() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/providers/prv_1/checkpoints"))
        .and(header("X-Auth-Token", "integration-token"))
        .and(header("X-Project-Id", "proj_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"checkpoints": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 20).await?;
    let source = client.checkpoints("prv_1");
    let items = source.collection().list(&ListQuery::new()).await?;
    assert!(items.is_empty());

    Ok(())
}
