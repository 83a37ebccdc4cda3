use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

/// A placed order. Read-only here: orders are only loaded to be invoiced.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub total_amount: BigDecimal,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}
