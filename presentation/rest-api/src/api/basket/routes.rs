use std::sync::Arc;

use poem::Request;
use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::application::basket::persistent_store::PersistentBasketStore;
use business::domain::basket::model::BasketOperation;
use business::domain::basket::repository::BasketRepository;
use business::domain::basket::store::BasketStore;
use business::domain::basket::use_cases::apply_operation::{
    ApplyBasketOperationParams, ApplyBasketOperationUseCase,
};
use business::domain::basket::use_cases::get::GetBasketUseCase;
use business::domain::basket::use_cases::reconcile::{
    ReconcileBasketParams, ReconcileBasketUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::basket::dto::BasketResponse;
use crate::api::basket::session_store::SessionBasketStore;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{FirebaseBearer, identify};
use crate::api::tags::ApiTags;

pub struct BasketApi {
    apply_use_case: Arc<dyn ApplyBasketOperationUseCase>,
    get_use_case: Arc<dyn GetBasketUseCase>,
    reconcile_use_case: Arc<dyn ReconcileBasketUseCase>,
    repository: Arc<dyn BasketRepository>,
}

impl BasketApi {
    pub fn new(
        apply_use_case: Arc<dyn ApplyBasketOperationUseCase>,
        get_use_case: Arc<dyn GetBasketUseCase>,
        reconcile_use_case: Arc<dyn ReconcileBasketUseCase>,
        repository: Arc<dyn BasketRepository>,
    ) -> Self {
        Self {
            apply_use_case,
            get_use_case,
            reconcile_use_case,
            repository,
        }
    }

    /// Identified users work on their durable basket, everyone else on the
    /// session one.
    fn store<'a>(&self, user_id: Option<UserId>, session: &'a Session) -> Box<dyn BasketStore + 'a> {
        match user_id {
            Some(user_id) => Box::new(PersistentBasketStore::new(self.repository.clone(), user_id)),
            None => Box::new(SessionBasketStore::new(session)),
        }
    }

    async fn apply(
        &self,
        req: &Request,
        session: &Session,
        operation: BasketOperation,
        product_id: Option<Uuid>,
    ) -> BasketResultResponse {
        let user_id = match identify(req).await {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::warn!("Basket {operation} rejected: {e}");
                return BasketResultResponse::Unauthorized(ErrorResponse::unauthorized(e));
            }
        };
        let store = self.store(user_id, session);
        let params = ApplyBasketOperationParams {
            operation,
            product_id,
        };

        match self.apply_use_case.execute(&*store, params).await {
            Ok(basket) => BasketResultResponse::Ok(Json(basket.into())),
            Err(err) => BasketResultResponse::from_error(err),
        }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, BasketResultResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        BasketResultResponse::BadRequest(Json(ErrorResponse::new(
            "ValidationError",
            "basket.invalid_product_id",
        )))
    })
}

/// Basket API
///
/// The same endpoints serve anonymous visitors (basket kept in the session
/// cookie) and signed-in users (basket stored in the database). Sending an
/// invalid bearer token is rejected rather than treated as anonymous.
#[OpenApi]
impl BasketApi {
    /// Get the current basket
    #[oai(path = "/basket", method = "get", tag = "ApiTags::Basket")]
    async fn get(&self, req: &Request, session: &Session) -> BasketResultResponse {
        let user_id = match identify(req).await {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::warn!("Basket read rejected: {e}");
                return BasketResultResponse::Unauthorized(ErrorResponse::unauthorized(e));
            }
        };
        let store = self.store(user_id, session);

        match self.get_use_case.execute(&*store).await {
            Ok(basket) => BasketResultResponse::Ok(Json(basket.into())),
            Err(err) => BasketResultResponse::from_error(err),
        }
    }

    /// Add a product
    ///
    /// Adds one unit of the product, creating the line if needed.
    #[oai(path = "/basket/add/:product_id", method = "post", tag = "ApiTags::Basket")]
    async fn add(
        &self,
        req: &Request,
        session: &Session,
        product_id: Path<String>,
    ) -> BasketResultResponse {
        match parse_product_id(&product_id.0) {
            Ok(id) => self.apply(req, session, BasketOperation::Add, Some(id)).await,
            Err(response) => response,
        }
    }

    /// Increment a line
    ///
    /// Adds one unit to an existing line; a product not in the basket is left out.
    #[oai(
        path = "/basket/increment/:product_id",
        method = "post",
        tag = "ApiTags::Basket"
    )]
    async fn increment(
        &self,
        req: &Request,
        session: &Session,
        product_id: Path<String>,
    ) -> BasketResultResponse {
        match parse_product_id(&product_id.0) {
            Ok(id) => {
                self.apply(req, session, BasketOperation::Increment, Some(id))
                    .await
            }
            Err(response) => response,
        }
    }

    /// Decrement a line
    ///
    /// Removes one unit; the line disappears when its quantity reaches zero.
    #[oai(
        path = "/basket/decrement/:product_id",
        method = "post",
        tag = "ApiTags::Basket"
    )]
    async fn decrement(
        &self,
        req: &Request,
        session: &Session,
        product_id: Path<String>,
    ) -> BasketResultResponse {
        match parse_product_id(&product_id.0) {
            Ok(id) => {
                self.apply(req, session, BasketOperation::Decrement, Some(id))
                    .await
            }
            Err(response) => response,
        }
    }

    /// Clear the basket
    #[oai(path = "/basket/clear", method = "post", tag = "ApiTags::Basket")]
    async fn clear(&self, req: &Request, session: &Session) -> BasketResultResponse {
        self.apply(req, session, BasketOperation::Clear, None).await
    }

    /// Move the session basket into the user's basket
    ///
    /// Called once after sign-in. Lines for products the user already has
    /// are skipped. The session basket is emptied even if storing fails.
    #[oai(path = "/basket/sync", method = "post", tag = "ApiTags::Basket")]
    async fn sync(&self, auth: FirebaseBearer, session: &Session) -> SyncBasketResponse {
        let user_id = UserId::new(auth.0);
        let store = SessionBasketStore::new(session);

        match self
            .reconcile_use_case
            .execute(&store, ReconcileBasketParams { user_id })
            .await
        {
            Ok(()) => SyncBasketResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                SyncBasketResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BasketResultResponse {
    #[oai(status = 200)]
    Ok(Json<BasketResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl BasketResultResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SyncBasketResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
