//! Forward and backward navigation through a served collection.

use anyhow::Result;
use smaug::SortOrder;

use crate::common::{client_for, serve_collection, trigger_fixtures, trigger_names};

#[tokio::test]
async fn test_walk_forward_then_back() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 3).await?;
    let triggers = client.triggers();

    let first = triggers
        .list_paged()
        .sort_key("name")
        .sort_dir(SortOrder::Ascending)
        .await?;
    assert_eq!(trigger_names(&first.items), ["a", "b", "c"]);
    assert!(first.has_more_data);
    assert!(!first.has_prev_data);

    let second = triggers
        .list_paged()
        .maybe_marker(first.next_marker())
        .sort_key("name")
        .sort_dir(SortOrder::Ascending)
        .await?;
    assert_eq!(trigger_names(&second.items), ["d", "e", "f"]);
    assert!(second.has_more_data);
    assert!(second.has_prev_data);

    let last = triggers
        .list_paged()
        .maybe_marker(second.next_marker())
        .sort_key("name")
        .sort_dir(SortOrder::Ascending)
        .await?;
    assert_eq!(trigger_names(&last.items), ["g"]);
    assert!(!last.has_more_data);
    assert!(last.has_prev_data);

    let back = triggers
        .list_paged()
        .maybe_marker(last.prev_marker())
        .reversed_order(true)
        .sort_key("name")
        .sort_dir(SortOrder::Ascending)
        .await?;
    assert_eq!(trigger_names(&back.items), ["d", "e", "f"]);
    assert!(back.has_more_data);
    assert!(back.has_prev_data);

    let start = triggers
        .list_paged()
        .maybe_marker(back.prev_marker())
        .reversed_order(true)
        .sort_key("name")
        .sort_dir(SortOrder::Ascending)
        .await?;
    assert_eq!(trigger_names(&start.items), ["a", "b", "c"]);
    assert!(start.has_more_data);
    assert!(!start.has_prev_data);
    assert_eq!(start.prev_marker(), None);

    Ok(())
}

#[tokio::test]
async fn test_descending_listing_and_back() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 4).await?;
    let triggers = client.triggers();

    let first = triggers
        .list_paged()
        .sort_key("name")
        .sort_dir(SortOrder::Descending)
        .await?;
    assert_eq!(trigger_names(&first.items), ["g", "f", "e", "d"]);

    let second = triggers
        .list_paged()
        .maybe_marker(first.next_marker())
        .sort_key("name")
        .sort_dir(SortOrder::Descending)
        .await?;
    assert_eq!(trigger_names(&second.items), ["c", "b", "a"]);
    assert!(!second.has_more_data);
    assert!(second.has_prev_data);

    let back = triggers
        .list_paged()
        .maybe_marker(second.prev_marker())
        .reversed_order(true)
        .sort_key("name")
        .sort_dir(SortOrder::Descending)
        .await?;
    assert_eq!(trigger_names(&back.items), ["g", "f", "e", "d"]);
    assert!(back.has_more_data);
    assert!(!back.has_prev_data);

    Ok(())
}

#[tokio::test]
async fn test_page_size_override() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 3).await?;

    let page = client.triggers().list_paged().sort_key("name").page_size(7).await?;
    assert_eq!(page.len(), 7);
    assert!(!page.has_more_data);
    assert!(!page.has_prev_data);

    Ok(())
}

#[tokio::test]
async fn test_unpaginated_listing_never_sets_flags() -> Result<()> {
    let server = serve_collection("/triggers", "triggers", trigger_fixtures()).await;
    let client = client_for(&server, 2).await?;

    let page = client
        .triggers()
        .list_paged()
        .paginate(false)
        .marker("trg_a")
        .limit(5)
        .sort_key("name")
        .await?;
    assert_eq!(trigger_names(&page.items), ["b", "c", "d", "e", "f"]);
    assert!(!page.has_more_data);
    assert!(!page.has_prev_data);

    let all = client.triggers().list().await?;
    assert_eq!(all.len(), 7);

    Ok(())
}
