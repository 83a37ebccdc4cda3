#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.product_required")]
    ProductRequired,
    #[error("basket.product_not_found")]
    ProductNotFound,
    #[error("basket.session_unavailable")]
    SessionUnavailable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
