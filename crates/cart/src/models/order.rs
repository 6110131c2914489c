//! Order summaries recorded at checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::OrderNumber;

/// Summary of a completed checkout, stored in the `lastOrder` slot.
///
/// `orderNumber`, `items` and `total` are the fields a success page reads;
/// `subtotal` and `placedAt` are optional so older records still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_number: OrderNumber,
    /// Number of line items in the cart at checkout.
    pub items: usize,
    /// Formatted grand total including shipping, e.g. `$40.00`.
    pub total: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<DateTime<Utc>>,
}
