//! Client-side CSV export
//!
//! Batch exports re-aggregate the batch's member orders with the same
//! grouping as the to-order view, then emit one row per distinct
//! (product, color, size) tuple. Filenames embed the current date and,
//! for batches, the batch number.

use chrono::NaiveDate;

use shared::models::Batch;
use shared::order::summary::summarize;

/// CSV header row for supplier batch exports
pub const BATCH_CSV_HEADER: &str = "Prodotto,Colore,Taglia,Quantità";

/// Render a batch's purchase rows as CSV. Every row, header included, is
/// newline-terminated.
pub fn batch_csv(batch: &Batch) -> String {
    let summary = summarize(&batch.orders);

    let mut out = String::new();
    out.push_str(BATCH_CSV_HEADER);
    out.push('\n');
    for row in summary.distinct_rows() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            row.product, row.color, row.size, row.quantity
        ));
    }
    out
}

/// Filename for a batch CSV download, e.g. `batch-3_2025-11-28.csv`.
pub fn batch_csv_filename(batch: &Batch, date: NaiveDate) -> String {
    format!("batch-{}_{}.csv", batch.batch_number, date.format("%Y-%m-%d"))
}

/// Filename for the backend spreadsheet export, e.g. `ordini_2025-11-28.xlsx`.
pub fn orders_export_filename(date: NaiveDate) -> String {
    format!("ordini_{}.xlsx", date.format("%Y-%m-%d"))
}
