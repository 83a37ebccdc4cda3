use async_trait::async_trait;

use super::errors::BasketError;
use super::model::Basket;

/// Where a basket lives for the current request. Anonymous visitors get the
/// session-backed implementation, identified users the persistent one; the
/// basket use cases only see this trait.
#[async_trait]
pub trait BasketStore: Send + Sync {
    async fn load(&self) -> Result<Basket, BasketError>;
    async fn save(&self, basket: &Basket) -> Result<(), BasketError>;
    async fn clear(&self) -> Result<(), BasketError>;
}
