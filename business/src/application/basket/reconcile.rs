use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::store::BasketStore;
use crate::domain::basket::use_cases::reconcile::{ReconcileBasketParams, ReconcileBasketUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct ReconcileBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ReconcileBasketUseCaseImpl {
    /// Copies session lines the durable basket does not hold yet. Lines that
    /// fail to insert are logged and skipped.
    async fn migrate(&self, basket: &Basket, user_id: &UserId) -> Result<(), BasketError> {
        if basket.is_empty() {
            return Ok(());
        }

        let basket_id = self.repository.get_or_create_basket(user_id).await?;

        let mut migrated = 0usize;
        for line in basket.lines() {
            match self.repository.insert_line_if_absent(basket_id, line).await {
                Ok(true) => migrated += 1,
                Ok(false) => self.logger.debug(&format!(
                    "Product {} already in basket {}, keeping stored line",
                    line.product_id, basket_id
                )),
                Err(e) => self.logger.warn(&format!(
                    "Could not migrate product {} into basket {}: {}",
                    line.product_id, basket_id, e
                )),
            }
        }

        self.logger.info(&format!(
            "Migrated {} of {} session lines for user {}",
            migrated,
            basket.lines().len(),
            user_id
        ));
        Ok(())
    }
}

#[async_trait]
impl ReconcileBasketUseCase for ReconcileBasketUseCaseImpl {
    async fn execute(
        &self,
        session: &dyn BasketStore,
        params: ReconcileBasketParams,
    ) -> Result<(), BasketError> {
        self.logger.info(&format!(
            "Reconciling session basket for user {}",
            params.user_id
        ));

        let result = match session.load().await {
            Ok(basket) => self.migrate(&basket, &params.user_id).await,
            Err(e) => Err(e),
        };

        // The session copy goes away whatever happened above
        session.clear().await?;

        if let Err(e) = &result {
            self.logger
                .error(&format!("Basket reconciliation failed: {}", e));
        }
        result
    }
}
