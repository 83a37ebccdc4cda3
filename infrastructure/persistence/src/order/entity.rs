use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub total_amount: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub product_name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            product_name: self.product_name,
            quantity: u32::try_from(self.quantity).unwrap_or(0),
            unit_price: self.price,
        }
    }
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItemEntity>) -> Order {
        Order {
            id: self.id,
            user_id: UserId::new(self.user_id),
            total_amount: self.total_amount,
            items: items.into_iter().map(|i| i.into_domain()).collect(),
            created_at: self.created_at,
        }
    }
}
