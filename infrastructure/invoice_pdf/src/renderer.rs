use business::domain::order::errors::OrderError;
use business::domain::order::invoice::draw_invoice;
use business::domain::order::model::Order;
use business::domain::order::services::InvoiceRenderer;

use crate::canvas::PdfCanvas;

/// Renders invoices as in-memory PDF documents.
pub struct PdfInvoiceRenderer;

impl InvoiceRenderer for PdfInvoiceRenderer {
    fn render(&self, order: &Order) -> Result<Vec<u8>, OrderError> {
        let mut canvas = PdfCanvas::new();
        draw_invoice(order, &mut canvas);
        Ok(canvas.finish())
    }
}
