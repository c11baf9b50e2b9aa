use serde::{Deserialize, Serialize};

use super::MenuItem;

/// An order being assembled over one program run.
///
/// The item list grows only by appending; items are never removed. The total
/// is always recomputed from the items, so it is the exact sum of their prices
/// at the moment of calculation. No discounts, no tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<MenuItem>,
}

impl Order {
    /// Creates a new, empty order.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    /// Sum of the prices of every item; `0.0` for an empty order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(MenuItem::price).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Payload for opening a fresh order. There is nothing to configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {}

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Appends an item to the order. No dedup, no limit.
    AddItem(MenuItem),
    /// Reports the current item count and running total.
    Summary,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Result from AddItem - the item count after appending.
    Added { count: usize },
    /// Result from Summary - the current snapshot.
    Summary(OrderSummary),
}

/// Snapshot of an order's size and running total.
///
/// The shell checks `item_count` to decide whether there is anything to pay;
/// comparing the float total against zero would be fragile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub item_count: usize,
    pub total: f64,
}
