use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Binary, Json},
};
use uuid::Uuid;

use business::domain::order::use_cases::render_invoice::{
    RenderInvoiceParams, RenderInvoiceUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    render_invoice_use_case: Arc<dyn RenderInvoiceUseCase>,
}

impl OrderApi {
    pub fn new(render_invoice_use_case: Arc<dyn RenderInvoiceUseCase>) -> Self {
        Self {
            render_invoice_use_case,
        }
    }
}

fn content_disposition(order_id: Uuid) -> String {
    format!("attachment; filename=\"invoice-{order_id}.pdf\"")
}

/// Order API
#[OpenApi]
impl OrderApi {
    /// Download an invoice
    ///
    /// Returns the order's invoice as a PDF attachment. Only the user who
    /// placed the order can download it.
    #[oai(path = "/orders/:id/invoice", method = "get", tag = "ApiTags::Orders")]
    async fn invoice(&self, auth: FirebaseBearer, id: Path<String>) -> InvoiceResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return InvoiceResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "order.invalid_id",
                )));
            }
        };
        let params = RenderInvoiceParams {
            order_id,
            user_id: UserId::new(auth.0),
        };

        match self.render_invoice_use_case.execute(params).await {
            Ok(pdf) => InvoiceResponse::Ok(Binary(pdf), content_disposition(order_id)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => InvoiceResponse::NotFound(json),
                    _ => InvoiceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum InvoiceResponse {
    #[oai(status = 200, content_type = "application/pdf")]
    Ok(
        Binary<Vec<u8>>,
        #[oai(header = "Content-Disposition")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
