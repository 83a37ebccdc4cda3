use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shipping::use_cases::branch_choices::{
    GetBranchChoicesParams, GetBranchChoicesUseCase,
};
use business::domain::shipping::use_cases::city_choices::GetCityChoicesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ShippingApi {
    city_choices_use_case: Arc<dyn GetCityChoicesUseCase>,
    branch_choices_use_case: Arc<dyn GetBranchChoicesUseCase>,
}

impl ShippingApi {
    pub fn new(
        city_choices_use_case: Arc<dyn GetCityChoicesUseCase>,
        branch_choices_use_case: Arc<dyn GetBranchChoicesUseCase>,
    ) -> Self {
        Self {
            city_choices_use_case,
            branch_choices_use_case,
        }
    }
}

/// Shipping directory API
///
/// Nova Poshta reference data used to fill the checkout form.
#[OpenApi]
impl ShippingApi {
    /// List cities
    ///
    /// City names in the order the carrier returns them.
    #[oai(path = "/shipping/cities", method = "get", tag = "ApiTags::Shipping")]
    async fn cities(&self) -> ShippingChoicesResponse {
        match self.city_choices_use_case.execute().await {
            Ok(cities) => ShippingChoicesResponse::Ok(Json(cities)),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ShippingChoicesResponse::BadGateway(json)
            }
        }
    }

    /// List branches
    ///
    /// Warehouses of the "Branch" category, optionally within one city.
    /// An upstream rejection yields an empty list.
    #[oai(path = "/shipping/warehouses", method = "get", tag = "ApiTags::Shipping")]
    async fn warehouses(
        &self,
        /// City name as returned by /shipping/cities
        city: Query<Option<String>>,
    ) -> ShippingChoicesResponse {
        let city = city.0.filter(|name| !name.trim().is_empty());

        match self
            .branch_choices_use_case
            .execute(GetBranchChoicesParams { city })
            .await
        {
            Ok(branches) => ShippingChoicesResponse::Ok(Json(branches)),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ShippingChoicesResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShippingChoicesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
