#[derive(Debug, thiserror::Error)]
pub enum ShippingError {
    #[error("shipping.request_failed")]
    RequestFailed,
    #[error("shipping.invalid_response")]
    InvalidResponse,
    #[error("shipping.rejected")]
    Rejected,
}
