use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity};
use crate::db::database_error;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, total_amount, created_at FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        let items = sqlx::query_as::<_, OrderItemEntity>(
            r#"SELECT p.name AS product_name, oi.quantity, oi.price
            FROM order_items oi
            JOIN products p ON p.id = oi.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.position"#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(order.into_domain(items))
    }
}
