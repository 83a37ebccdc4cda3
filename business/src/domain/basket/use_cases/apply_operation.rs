use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{Basket, BasketOperation};
use crate::domain::basket::store::BasketStore;

pub struct ApplyBasketOperationParams {
    pub operation: BasketOperation,
    pub product_id: Option<Uuid>,
}

#[async_trait]
pub trait ApplyBasketOperationUseCase: Send + Sync {
    async fn execute(
        &self,
        store: &dyn BasketStore,
        params: ApplyBasketOperationParams,
    ) -> Result<Basket, BasketError>;
}
