use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::store::BasketStore;
use crate::domain::shared::value_objects::UserId;

pub struct ReconcileBasketParams {
    pub user_id: UserId,
}

/// Moves a session basket into the user's durable basket after sign-in.
#[async_trait]
pub trait ReconcileBasketUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &dyn BasketStore,
        params: ReconcileBasketParams,
    ) -> Result<(), BasketError>;
}
