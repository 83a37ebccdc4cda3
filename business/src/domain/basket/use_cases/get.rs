use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::store::BasketStore;

#[async_trait]
pub trait GetBasketUseCase: Send + Sync {
    async fn execute(&self, store: &dyn BasketStore) -> Result<Basket, BasketError>;
}
