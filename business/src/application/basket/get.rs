use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::store::BasketStore;
use crate::domain::basket::use_cases::get::GetBasketUseCase;
use crate::domain::logger::Logger;

pub struct GetBasketUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBasketUseCase for GetBasketUseCaseImpl {
    async fn execute(&self, store: &dyn BasketStore) -> Result<Basket, BasketError> {
        let basket = store.load().await?;
        self.logger
            .debug(&format!("Loaded basket with {} lines", basket.lines().len()));
        Ok(basket)
    }
}
