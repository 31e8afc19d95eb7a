//! To-order aggregation
//!
//! Collapses a list of orders into supplier-ready purchase quantities,
//! grouped product -> color -> size. Each level keeps the insertion order
//! of first occurrence and accumulates quantities as running sums, so the
//! output is stable for display while totals stay independent of input
//! order.
//!
//! Pure functions only: this runs on every to-order view and again after
//! every batch mutation to refresh the remaining backlog.

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// Quantity of a single size within a color group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeCount {
    pub size: String,
    pub quantity: u32,
}

/// Per-color subtotal with its size breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSummary {
    pub color: String,
    pub total: u32,
    pub sizes: Vec<SizeCount>,
}

impl ColorSummary {
    /// Quantity for a size, 0 if the size never appeared.
    pub fn size(&self, size: &str) -> u32 {
        self.sizes
            .iter()
            .find(|s| s.size == size)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    fn add(&mut self, size: &str, quantity: u32) {
        self.total += quantity;
        match self.sizes.iter_mut().find(|s| s.size == size) {
            Some(entry) => entry.quantity += quantity,
            None => self.sizes.push(SizeCount {
                size: size.to_string(),
                quantity,
            }),
        }
    }
}

/// Per-product total with its color breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub name: String,
    pub total: u32,
    pub colors: Vec<ColorSummary>,
}

impl ProductSummary {
    /// Color group lookup by name.
    pub fn color(&self, color: &str) -> Option<&ColorSummary> {
        self.colors.iter().find(|c| c.color == color)
    }

    fn add(&mut self, color: &str, size: &str, quantity: u32) {
        self.total += quantity;
        let idx = match self.colors.iter().position(|c| c.color == color) {
            Some(idx) => idx,
            None => {
                self.colors.push(ColorSummary {
                    color: color.to_string(),
                    total: 0,
                    sizes: Vec::new(),
                });
                self.colors.len() - 1
            }
        };
        self.colors[idx].add(size, quantity);
    }
}

/// One flattened (product, color, size, quantity) tuple, in grouping order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRow {
    pub product: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

/// Aggregated view of the orders awaiting a supplier purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToOrderSummary {
    /// Number of distinct orders in the input
    pub total_orders: u32,
    /// Sum of all item quantities across all orders
    pub total_items: u32,
    pub products: Vec<ProductSummary>,
}

impl ToOrderSummary {
    /// Product group lookup by name.
    pub fn product(&self, name: &str) -> Option<&ProductSummary> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Whether any quantities were aggregated.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Flattens the summary into one row per distinct (product, color, size)
    /// tuple, preserving grouping order. Feeds the batch CSV export.
    pub fn distinct_rows(&self) -> Vec<SummaryRow> {
        let mut rows = Vec::new();
        for product in &self.products {
            for color in &product.colors {
                for size in &color.sizes {
                    rows.push(SummaryRow {
                        product: product.name.clone(),
                        color: color.color.clone(),
                        size: size.size.clone(),
                        quantity: size.quantity,
                    });
                }
            }
        }
        rows
    }
}

/// Aggregates orders into per-product/color/size purchase quantities.
///
/// The input is trusted to already be the eligible set (PAID, unbatched);
/// filtering belongs to the backend. An empty slice yields zero totals and
/// no products rather than an error.
pub fn summarize(orders: &[Order]) -> ToOrderSummary {
    let mut summary = ToOrderSummary {
        total_orders: orders.len() as u32,
        ..Default::default()
    };

    for order in orders {
        for item in &order.items {
            summary.total_items += item.quantity;
            let idx = match summary
                .products
                .iter()
                .position(|p| p.name == item.product.name)
            {
                Some(idx) => idx,
                None => {
                    summary.products.push(ProductSummary {
                        name: item.product.name.clone(),
                        total: 0,
                        colors: Vec::new(),
                    });
                    summary.products.len() - 1
                }
            };
            summary.products[idx].add(&item.color, &item.size, item.quantity);
        }
    }

    summary
}
