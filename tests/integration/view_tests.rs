//! List view glue over the HTTP client.

use anyhow::Result;
use smaug::ErrorKind;
use smaug::resources::Trigger;
use smaug::view::{ListView, PaginationParams, TableData};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, serve_collection, trigger_fixtures, trigger_names};

const NOTICE: &str = "Unable to retrieve triggers list.";

#[tokio::test]
async fn test_view_follows_its_own_links() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 3).await?;
    let triggers = client.triggers();
    let view = ListView::new(NOTICE);

    let first: TableData<Trigger> = view
        .load(triggers.collection(), "", client.pagination_config())
        .await;
    assert_eq!(trigger_names(first.items()), ["a", "b", "c"]);
    assert_eq!(view.prev_link(&first), None);

    let next_link = view.next_link(&first).unwrap_or_default();
    assert_eq!(next_link, "marker=trg_c");
    let second = view
        .load(triggers.collection(), &next_link, client.pagination_config())
        .await;
    assert_eq!(trigger_names(second.items()), ["d", "e", "f"]);
    assert!(second.has_more_data());
    assert!(second.has_prev_data());

    let prev_link = view.prev_link(&second).unwrap_or_default();
    assert_eq!(prev_link, "prev_marker=trg_d");
    let back = view
        .load(triggers.collection(), &prev_link, client.pagination_config())
        .await;
    assert_eq!(trigger_names(back.items()), ["a", "b", "c"]);
    assert!(back.has_more_data());
    assert!(!back.has_prev_data());

    Ok(())
}

#[tokio::test]
async fn test_view_with_custom_params() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 2).await?;
    let view = ListView::new(NOTICE).with_params(
        PaginationParams::builder()
            .next("trigger_marker")
            .prev("prev_trigger_marker")
            .build(),
    );

    // An unrelated "marker" parameter is ignored.
    let data = view
        .load(
            client.triggers().collection(),
            "?marker=trg_f&trigger_marker=trg_b",
            client.pagination_config(),
        )
        .await;
    assert_eq!(trigger_names(data.items()), ["c", "d"]);
    assert_eq!(view.next_link(&data).as_deref(), Some("trigger_marker=trg_d"));
    assert_eq!(view.prev_link(&data).as_deref(), Some("prev_trigger_marker=trg_c"));

    Ok(())
}

#[tokio::test]
async fn test_view_failure_is_a_notice() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/triggers"))
        .respond_with(ResponseTemplate::new(503).insert_header("x-openstack-request-id", "req-down"))
        .mount(&server)
        .await;

    let client = client_for(&server, 3).await?;
    let view = ListView::new(NOTICE);
    let data = view
        .load(client.triggers().collection(), "marker=trg_c", client.pagination_config())
        .await;

    assert!(data.is_failed());
    assert!(data.items().is_empty());
    assert!(!data.has_more_data());
    assert!(!data.has_prev_data());
    assert_eq!(data.notice(), Some(NOTICE));

    let error = data.error().map(|e| (e.kind(), e.request_id().map(str::to_string)));
    assert_eq!(error, Some((ErrorKind::Unavailable, Some("req-down".to_string()))));
    assert_eq!(view.next_link(&data), None);

    Ok(())
}
