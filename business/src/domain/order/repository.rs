use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads the order with its items in insertion order.
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
}
