use async_trait::async_trait;

use crate::domain::shipping::errors::ShippingError;

pub struct GetBranchChoicesParams {
    pub city: Option<String>,
}

#[async_trait]
pub trait GetBranchChoicesUseCase: Send + Sync {
    async fn execute(&self, params: GetBranchChoicesParams) -> Result<Vec<String>, ShippingError>;
}
