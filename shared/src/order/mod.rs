//! Order domain logic
//!
//! Pure computations over orders: the product/color/size aggregation that
//! feeds the to-order backlog view and batch CSV exports.

pub mod summary;

pub use summary::{ColorSummary, ProductSummary, SizeCount, SummaryRow, ToOrderSummary, summarize};
