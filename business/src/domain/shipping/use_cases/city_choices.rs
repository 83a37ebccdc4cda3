use async_trait::async_trait;

use crate::domain::shipping::errors::ShippingError;

#[async_trait]
pub trait GetCityChoicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, ShippingError>;
}
