use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::InvoiceRenderer;
use crate::domain::order::use_cases::render_invoice::{RenderInvoiceParams, RenderInvoiceUseCase};

pub struct RenderInvoiceUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub renderer: Arc<dyn InvoiceRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenderInvoiceUseCase for RenderInvoiceUseCaseImpl {
    async fn execute(&self, params: RenderInvoiceParams) -> Result<Vec<u8>, OrderError> {
        self.logger
            .info(&format!("Rendering invoice for order: {}", params.order_id));

        let order = self
            .repository
            .get_by_id(params.order_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let document = self.renderer.render(&order)?;

        self.logger.info(&format!(
            "Invoice rendered for order {} ({} items, {} bytes)",
            order.id,
            order.items.len(),
            document.len()
        ));
        Ok(document)
    }
}
