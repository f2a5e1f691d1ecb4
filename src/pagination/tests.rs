//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::test_support::{list_body, FakeTransport};
use crate::types::JsonValue;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Rec {
    id: String,
}

fn source(transport: Arc<FakeTransport>, collection: &str) -> PageSource<Rec> {
    PageSource::new(transport, collection, deserialize_record())
}

fn ids(page: &Page<Rec>) -> Vec<&str> {
    page.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Links Tests
// ============================================================================

#[test]
fn test_links_deserialize_known_and_other_relations() {
    let links: Links = serde_json::from_value(json!({
        "self": {"href": "https://api.mollie.com/v2/payments/tr_1", "type": "application/hal+json"},
        "checkout": {"href": "https://www.mollie.com/payscreen/select-method/1", "type": "text/html"},
        "next": null,
        "documentation": {"href": "https://docs.mollie.com", "type": "text/html"}
    }))
    .unwrap();

    assert_eq!(
        links.href("self"),
        Some("https://api.mollie.com/v2/payments/tr_1")
    );
    assert_eq!(
        links.get("checkout"),
        Some(&Link::new(
            "https://www.mollie.com/payscreen/select-method/1",
            "text/html"
        ))
    );
    assert!(links.next.is_none());
    assert!(links.previous.is_none());
    assert!(links.get("dashboard").is_none());
}

#[test]
fn test_links_null_other_relation() {
    let links: Links = serde_json::from_value(json!({"refunds": null})).unwrap();
    assert!(links.get("refunds").is_none());
    assert!(links.other.contains_key("refunds"));
}

// ============================================================================
// Page Construction Tests
// ============================================================================

#[test]
fn test_page_without_neighbours() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({
        "_embedded": {"payments": [{"id": "tr_1"}, {"id": "tr_2"}]},
        "count": 2,
        "_links": {"next": null, "previous": null}
    });

    let page = Page::from_response(body, source(transport, "payments")).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.count(), 2);
    assert_eq!(ids(&page), vec!["tr_1", "tr_2"]);
    assert!(page.next_page().is_none());
    assert!(page.previous_page().is_none());
    assert!(!page.has_next_page());
    assert!(!page.has_previous_page());
}

#[test]
fn test_page_preserves_server_order() {
    let transport = Arc::new(FakeTransport::new());
    let body = list_body("customers", &["cst_c", "cst_a", "cst_b"], None, None);

    let page = Page::from_response(body, source(transport, "customers")).unwrap();
    assert_eq!(ids(&page), vec!["cst_c", "cst_a", "cst_b"]);
}

#[test]
fn test_page_accepts_plain_links_key() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({
        "_embedded": {"payments": []},
        "count": 0,
        "links": {"next": null, "previous": null}
    });

    let page = Page::from_response(body, source(transport, "payments")).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_page_neighbours_present_iff_links_non_null() {
    let transport = Arc::new(FakeTransport::new());
    let body = list_body(
        "payments",
        &["tr_3"],
        Some("https://api.mollie.com/v2/payments?from=tr_4&limit=1"),
        Some("https://api.mollie.com/v2/payments?from=tr_2&limit=1"),
    );

    let page = Page::from_response(body, source(transport, "payments")).unwrap();
    assert!(page.next_page().is_some());
    assert!(page.previous_page().is_some());
}

#[test]
fn test_page_custom_transform() {
    let transport = Arc::new(FakeTransport::new());
    let transform: Transform<String> =
        Arc::new(|raw: JsonValue| -> crate::error::Result<String> {
            Ok(raw["id"].as_str().unwrap_or_default().to_uppercase())
        });
    let body = list_body("payments", &["tr_a", "tr_b"], None, None);

    let page = Page::from_response(body, PageSource::new(transport, "payments", transform)).unwrap();
    assert_eq!(page.items(), &["TR_A".to_string(), "TR_B".to_string()]);
}

#[test]
fn test_page_transform_error_propagates() {
    let transport = Arc::new(FakeTransport::new());
    let transform: Transform<u32> =
        Arc::new(|_: JsonValue| -> crate::error::Result<u32> { Err(Error::Other("nope".into())) });
    let body = list_body("payments", &["tr_a"], None, None);

    let result = Page::from_response(body, PageSource::new(transport, "payments", transform));
    assert!(matches!(result, Err(Error::Other(ref m)) if m == "nope"));
}

// ============================================================================
// Malformed Response Tests
// ============================================================================

#[test]
fn test_missing_embedded_collection() {
    let transport = Arc::new(FakeTransport::new());
    let body = list_body("refunds", &["re_1"], None, None);

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(err.to_string().contains("missing _embedded.payments"));
}

#[test]
fn test_embedded_collection_not_array() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({
        "_embedded": {"payments": {"id": "tr_1"}},
        "count": 1,
        "_links": {}
    });

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_missing_links() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({"_embedded": {"payments": []}, "count": 0});

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(err.to_string().contains("missing _links"));
}

#[test]
fn test_missing_count() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({"_embedded": {"payments": []}, "_links": {}});

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(err.to_string().contains("missing count"));
}

#[test]
fn test_count_mismatch() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({
        "_embedded": {"payments": [{"id": "tr_1"}]},
        "count": 2,
        "_links": {}
    });

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_record_not_matching_model() {
    let transport = Arc::new(FakeTransport::new());
    let body = json!({
        "_embedded": {"payments": [{"id": 42}]},
        "count": 1,
        "_links": {}
    });

    let err = Page::from_response(body, source(transport, "payments")).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_non_object_body() {
    let transport = Arc::new(FakeTransport::new());
    let err = Page::from_response(json!([1, 2]), source(transport, "payments")).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

// ============================================================================
// Navigation Tests
// ============================================================================

const PAGE_2: &str = "https://api.mollie.com/v2/payments?from=tr_3&limit=2";
const PAGE_1: &str = "https://api.mollie.com/v2/payments?limit=2";

#[tokio::test]
async fn test_next_page_fetches_link_href() {
    let transport = Arc::new(
        FakeTransport::new().respond(
            PAGE_2,
            list_body("payments", &["tr_3", "tr_4"], None, Some(PAGE_1)),
        ),
    );
    let first = Page::from_response(
        list_body("payments", &["tr_1", "tr_2"], Some(PAGE_2), None),
        source(Arc::clone(&transport), "payments"),
    )
    .unwrap();

    let second = first.next_page().unwrap().await.unwrap();

    assert_eq!(ids(&second), vec!["tr_3", "tr_4"]);
    assert!(second.next_page().is_none());
    assert!(second.previous_page().is_some());
    assert_eq!(transport.call_paths(), vec![PAGE_2.to_string()]);
    assert!(transport.calls()[0].query.is_empty());
}

#[tokio::test]
async fn test_previous_page_round_trip() {
    let transport = Arc::new(
        FakeTransport::new()
            .respond(PAGE_1, list_body("payments", &["tr_1", "tr_2"], Some(PAGE_2), None)),
    );
    let second = Page::from_response(
        list_body("payments", &["tr_3"], None, Some(PAGE_1)),
        source(Arc::clone(&transport), "payments"),
    )
    .unwrap();

    let first = second.previous_page().unwrap().await.unwrap();
    assert_eq!(ids(&first), vec!["tr_1", "tr_2"]);
    assert!(first.previous_page().is_none());
}

#[tokio::test]
async fn test_next_page_error_surfaces() {
    let transport = Arc::new(FakeTransport::new().fail(PAGE_2, 500));
    let first = Page::from_response(
        list_body("payments", &["tr_1"], Some(PAGE_2), None),
        source(transport, "payments"),
    )
    .unwrap();

    let err = first.next_page().unwrap().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[test]
fn test_follow_missing_relation() {
    let transport = Arc::new(FakeTransport::new());
    let page = Page::from_response(
        list_body("payments", &["tr_1"], None, None),
        source(transport, "payments"),
    )
    .unwrap();

    let err = page.follow("next").err().unwrap();
    assert!(matches!(err, Error::NoSuchLink { ref rel } if rel == "next"));
    assert!(page.follow("self").is_ok());
}

#[test]
fn test_page_into_iter_and_deref() {
    let transport = Arc::new(FakeTransport::new());
    let page = Page::from_response(
        list_body("payments", &["tr_1", "tr_2"], None, None),
        source(transport, "payments"),
    )
    .unwrap();

    assert_eq!(page[0].id, "tr_1");
    assert_eq!(page.first().map(|r| r.id.as_str()), Some("tr_1"));

    let collected: Vec<String> = page.into_iter().map(|r| r.id).collect();
    assert_eq!(collected, vec!["tr_1".to_string(), "tr_2".to_string()]);
}

#[test]
fn test_page_debug() {
    let transport = Arc::new(FakeTransport::new());
    let page = Page::from_response(
        list_body("payments", &["tr_1"], None, None),
        source(transport, "payments"),
    )
    .unwrap();

    let debug_str = format!("{page:?}");
    assert!(debug_str.contains("Page"));
    assert!(debug_str.contains("payments"));
}
