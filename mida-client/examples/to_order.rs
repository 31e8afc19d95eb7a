//! To-order workflow example
//!
//! Logs in, prints the supplier purchase summary for the current backlog,
//! and optionally creates a batch from every listed order.
//!
//! Run: cargo run --example to_order -- <base-url> <admin-token> [--create]

use std::sync::Arc;

use mida_client::{ClientConfig, FileSession, MidaClient};
use shared::models::BatchCreate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:3001".to_string());
    let token = args.next().unwrap_or_default();
    let create = args.next().as_deref() == Some("--create");

    let session = Arc::new(FileSession::load(std::path::Path::new(".mida"))?);
    let client = MidaClient::new(ClientConfig::new(base_url), session);

    if !client.is_authenticated() {
        client.login(&token).await?;
    }

    let backlog = client.to_order_backlog().await?;
    println!(
        "{} orders waiting, {} items total",
        backlog.summary.total_orders, backlog.summary.total_items
    );
    for product in &backlog.summary.products {
        println!("{} ({} pcs)", product.name, product.total);
        for color in &product.colors {
            for size in &color.sizes {
                println!("  {} / {}: {}", color.color, size.size, size.quantity);
            }
        }
    }

    if create && !backlog.orders.is_empty() {
        let batch = client
            .create_batch(&BatchCreate {
                order_ids: backlog.orders.iter().map(|o| o.id.clone()).collect(),
                ..Default::default()
            })
            .await?;
        let export = client.export_batch_csv(&client.batch(&batch.id).await?);
        std::fs::write(&export.filename, export.content)?;
        println!("Created batch #{}, wrote {}", batch.batch_number, export.filename);
    }

    Ok(())
}
