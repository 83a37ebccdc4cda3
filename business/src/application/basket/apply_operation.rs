use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::store::BasketStore;
use crate::domain::basket::use_cases::apply_operation::{
    ApplyBasketOperationParams, ApplyBasketOperationUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ApplyBasketOperationUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyBasketOperationUseCase for ApplyBasketOperationUseCaseImpl {
    async fn execute(
        &self,
        store: &dyn BasketStore,
        params: ApplyBasketOperationParams,
    ) -> Result<Basket, BasketError> {
        self.logger
            .info(&format!("Applying basket operation: {}", params.operation));

        if !params.operation.requires_product() {
            store.clear().await?;
            return Ok(Basket::new());
        }

        // Resolve the product before touching the basket
        let product_id = params.product_id.ok_or(BasketError::ProductRequired)?;
        let product = self
            .product_repository
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BasketError::ProductNotFound,
                other => BasketError::Repository(other),
            })?;

        let mut basket = store.load().await?;
        basket.apply(params.operation, Some(&product));
        store.save(&basket).await?;

        self.logger.info(&format!(
            "Basket now holds {} of product {}",
            basket.quantity_of(product.id),
            product.id
        ));
        Ok(basket)
    }
}
