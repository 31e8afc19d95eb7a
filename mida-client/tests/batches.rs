// mida-client/tests/batches.rs
// Batch lifecycle: local validation, creation, status transitions, CSV.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mida_client::{ClientConfig, ClientError, MidaClient, RetryPolicy};
use shared::models::{Batch, BatchCreate, BatchStatus, BatchUpdate};

fn client(server: &MockServer) -> MidaClient {
    let policy = RetryPolicy {
        attempts: 2,
        timeout_by_attempt: vec![Duration::from_millis(500)],
        backoff: Duration::from_millis(20),
    };
    MidaClient::in_memory(ClientConfig::new(server.uri()).with_retry(policy))
}

fn batch_body(status: &str) -> serde_json::Value {
    json!({
        "id": "batch-1",
        "batchNumber": 4,
        "status": status,
        "supplierName": "TexPrint",
        "orders": [
            {
                "id": "ord-1",
                "orderNumber": 12,
                "customerEmail": "buyer@example.com",
                "paymentStatus": "ORDERED",
                "total": 59.9,
                "createdAt": "2025-11-02T10:15:00Z",
                "items": [
                    {
                        "product": { "id": "prod-1", "name": "Hoodie" },
                        "color": "Black",
                        "size": "M",
                        "quantity": 2,
                        "lineTotal": 59.9
                    }
                ]
            }
        ],
        "createdAt": "2025-11-03T09:00:00Z"
    })
}

#[tokio::test]
async fn test_create_batch_with_no_orders_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = client
        .create_batch(&BatchCreate::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    // Nothing reached the network.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_batch_posts_selection_and_supplier_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/batches"))
        .and(body_partial_json(json!({
            "orderIds": ["ord-1", "ord-2"],
            "supplierName": "TexPrint"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_body("DRAFT")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let create = BatchCreate {
        order_ids: vec!["ord-1".to_string(), "ord-2".to_string()],
        supplier_name: Some("TexPrint".to_string()),
        ..Default::default()
    };

    let batch = client.create_batch(&create).await.unwrap();
    assert_eq!(batch.batch_number, 4);
    assert_eq!(batch.status, BatchStatus::Draft);
    assert_eq!(batch.orders.len(), 1);
}

#[tokio::test]
async fn test_update_batch_rejects_backward_transition_locally() {
    let server = MockServer::start().await;
    let client = client(&server);

    let current: Batch = serde_json::from_value(batch_body("RECEIVED")).unwrap();
    let update = BatchUpdate {
        status: Some(BatchStatus::Draft),
        ..Default::default()
    };

    let err = client.update_batch(&current, &update).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_batch_submits_forward_transition() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/batches/batch-1"))
        .and(body_partial_json(json!({ "status": "ORDERED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_body("ORDERED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let current: Batch = serde_json::from_value(batch_body("DRAFT")).unwrap();
    let update = BatchUpdate {
        status: Some(BatchStatus::Ordered),
        supplier_order_id: Some("PO-2025-004".to_string()),
        ..Default::default()
    };

    let updated = client.update_batch(&current, &update).await.unwrap();
    assert_eq!(updated.status, BatchStatus::Ordered);
}

#[tokio::test]
async fn test_update_batch_allows_metadata_only_edit_on_received() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/batches/batch-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_body("RECEIVED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let current: Batch = serde_json::from_value(batch_body("RECEIVED")).unwrap();
    let update = BatchUpdate {
        notes: Some("Arrived with two cartons damaged".to_string()),
        ..Default::default()
    };

    client.update_batch(&current, &update).await.unwrap();
}

#[tokio::test]
async fn test_export_batch_csv_embeds_batch_number() {
    let server = MockServer::start().await;
    let client = client(&server);

    let batch: Batch = serde_json::from_value(batch_body("ORDERED")).unwrap();
    let export = client.export_batch_csv(&batch);

    assert!(export.filename.starts_with("batch-4_"));
    assert!(export.filename.ends_with(".csv"));
    assert_eq!(
        export.content,
        "Prodotto,Colore,Taglia,Quantità\nHoodie,Black,M,2\n"
    );
}
