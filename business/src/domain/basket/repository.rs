use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::BasketLine;

/// Durable baskets: one per user, owning its lines.
#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn find_basket_id(&self, user_id: &UserId) -> Result<Option<Uuid>, RepositoryError>;
    async fn get_or_create_basket(&self, user_id: &UserId) -> Result<Uuid, RepositoryError>;
    async fn get_lines(&self, basket_id: Uuid) -> Result<Vec<BasketLine>, RepositoryError>;
    /// Replaces every line of the basket atomically.
    async fn replace_lines(
        &self,
        basket_id: Uuid,
        lines: &[BasketLine],
    ) -> Result<(), RepositoryError>;
    /// Inserts the line unless the basket already holds that product.
    /// Returns whether a row was written.
    async fn insert_line_if_absent(
        &self,
        basket_id: Uuid,
        line: &BasketLine,
    ) -> Result<bool, RepositoryError>;
    async fn delete_lines(&self, basket_id: Uuid) -> Result<u64, RepositoryError>;
}
