use std::sync::Arc;

use logger::TracingLogger;
use persistence::basket::repository::BasketRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use invoice_pdf::renderer::PdfInvoiceRenderer;
use nova_poshta::client::NovaPoshtaClient;
use nova_poshta::directory::ShippingDirectoryNovaPoshta;

use business::application::basket::apply_operation::ApplyBasketOperationUseCaseImpl;
use business::application::basket::get::GetBasketUseCaseImpl;
use business::application::basket::reconcile::ReconcileBasketUseCaseImpl;
use business::application::order::render_invoice::RenderInvoiceUseCaseImpl;
use business::application::shipping::branch_choices::GetBranchChoicesUseCaseImpl;
use business::application::shipping::city_choices::GetCityChoicesUseCaseImpl;

use crate::api::basket::routes::BasketApi;
use crate::api::health::routes::HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::shipping::routes::ShippingApi;
use crate::config::nova_poshta_config::NovaPoshtaConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub basket_api: BasketApi,
    pub shipping_api: ShippingApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, nova_poshta_config: &NovaPoshtaConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let basket_repository = Arc::new(BasketRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));

        let mut nova_poshta_client = NovaPoshtaClient::new(nova_poshta_config.api_key.clone());
        if let Some(api_url) = &nova_poshta_config.api_url {
            nova_poshta_client = nova_poshta_client.with_api_url(api_url.clone());
        }
        let shipping_directory = Arc::new(ShippingDirectoryNovaPoshta::new(nova_poshta_client));
        let invoice_renderer = Arc::new(PdfInvoiceRenderer);

        // Basket use cases
        let apply_use_case = Arc::new(ApplyBasketOperationUseCaseImpl {
            product_repository,
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetBasketUseCaseImpl {
            logger: logger.clone(),
        });
        let reconcile_use_case = Arc::new(ReconcileBasketUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });

        // Shipping use cases
        let city_choices_use_case = Arc::new(GetCityChoicesUseCaseImpl {
            directory: shipping_directory.clone(),
            logger: logger.clone(),
        });
        let branch_choices_use_case = Arc::new(GetBranchChoicesUseCaseImpl {
            directory: shipping_directory,
            logger: logger.clone(),
        });

        // Order use cases
        let render_invoice_use_case = Arc::new(RenderInvoiceUseCaseImpl {
            repository: order_repository,
            renderer: invoice_renderer,
            logger,
        });

        Self {
            health_api: HealthApi,
            basket_api: BasketApi::new(
                apply_use_case,
                get_use_case,
                reconcile_use_case,
                basket_repository,
            ),
            shipping_api: ShippingApi::new(city_choices_use_case, branch_choices_use_case),
            order_api: OrderApi::new(render_invoice_use_case),
        }
    }
}
