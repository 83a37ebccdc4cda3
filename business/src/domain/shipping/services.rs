use async_trait::async_trait;

use super::errors::ShippingError;
use super::model::{ShippingCity, ShippingWarehouse};

/// Service port for the carrier's reference directory.
#[async_trait]
pub trait ShippingDirectoryService: Send + Sync {
    async fn list_cities(&self) -> Result<Vec<ShippingCity>, ShippingError>;
    /// A single page of warehouses, optionally narrowed to one city. An
    /// unsuccessful lookup yields no warehouses rather than an error.
    async fn list_warehouses(
        &self,
        city: Option<String>,
    ) -> Result<Vec<ShippingWarehouse>, ShippingError>;
}
