use super::errors::OrderError;
use super::model::Order;

/// Service port turning an order into a printable invoice document.
pub trait InvoiceRenderer: Send + Sync {
    fn render(&self, order: &Order) -> Result<Vec<u8>, OrderError>;
}
