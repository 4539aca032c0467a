//! Cart line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use unlock_style_core::ItemId;

/// One service line in the cart.
///
/// There is no quantity field. Adding the same service twice makes two
/// lines, since the salon sells appointment slots rather than units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    /// When the line was added to the cart.
    pub timestamp: DateTime<Utc>,
}
