use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::shared::value_objects::UserId;

pub struct RenderInvoiceParams {
    pub order_id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait RenderInvoiceUseCase: Send + Sync {
    async fn execute(&self, params: RenderInvoiceParams) -> Result<Vec<u8>, OrderError>;
}
