// mida-client/tests/to_order.rs
// To-order backlog: fetch + aggregation through the client.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mida_client::{ClientConfig, MidaClient, RetryPolicy};

fn client(server: &MockServer) -> MidaClient {
    let policy = RetryPolicy {
        attempts: 1,
        timeout_by_attempt: vec![Duration::from_millis(500)],
        backoff: Duration::from_millis(20),
    };
    MidaClient::in_memory(ClientConfig::new(server.uri()).with_retry(policy))
}

fn order(id: &str, number: u32, quantity: u32) -> serde_json::Value {
    json!({
        "id": id,
        "orderNumber": number,
        "customerEmail": "buyer@example.com",
        "paymentStatus": "PAID",
        "total": 29.9,
        "createdAt": "2025-11-02T10:15:00Z",
        "items": [
            {
                "product": { "id": "prod-1", "name": "Hoodie" },
                "color": "Black",
                "size": "M",
                "quantity": quantity,
                "lineTotal": 29.9
            }
        ]
    })
}

#[tokio::test]
async fn test_backlog_aggregates_fetched_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/orders/summary-to-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [order("ord-1", 1, 2), order("ord-2", 2, 1)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backlog = client(&server).to_order_backlog().await.unwrap();

    assert_eq!(backlog.orders.len(), 2);
    assert_eq!(backlog.summary.total_orders, 2);
    assert_eq!(backlog.summary.total_items, 3);

    let hoodie = backlog.summary.product("Hoodie").unwrap();
    assert_eq!(hoodie.total, 3);
    assert_eq!(hoodie.color("Black").unwrap().size("M"), 3);
}

#[tokio::test]
async fn test_empty_backlog_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/orders/summary-to-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [] })))
        .mount(&server)
        .await;

    let backlog = client(&server).to_order_backlog().await.unwrap();

    assert!(backlog.orders.is_empty());
    assert_eq!(backlog.summary.total_orders, 0);
    assert_eq!(backlog.summary.total_items, 0);
    assert!(backlog.summary.is_empty());
}
