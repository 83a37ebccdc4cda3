use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shipping::errors::ShippingError;
use crate::domain::shipping::services::ShippingDirectoryService;
use crate::domain::shipping::use_cases::city_choices::GetCityChoicesUseCase;

pub struct GetCityChoicesUseCaseImpl {
    pub directory: Arc<dyn ShippingDirectoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCityChoicesUseCase for GetCityChoicesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ShippingError> {
        self.logger.info("Fetching shipping city choices");

        let cities = self.directory.list_cities().await.inspect_err(|e| {
            self.logger
                .error(&format!("Shipping directory city lookup failed: {}", e))
        })?;

        Ok(cities.into_iter().map(|c| c.description).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipping::model::{ShippingCity, ShippingWarehouse};
    use mockall::mock;

    mock! {
        pub Directory {}

        #[async_trait]
        impl ShippingDirectoryService for Directory {
            async fn list_cities(&self) -> Result<Vec<ShippingCity>, ShippingError>;
            async fn list_warehouses(&self, city: Option<String>) -> Result<Vec<ShippingWarehouse>, ShippingError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn city(description: &str) -> ShippingCity {
        ShippingCity {
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_descriptions_in_directory_order() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_cities()
            .returning(|| Ok(vec![city("Kyiv"), city("Lviv"), city("Kyiv")]));

        let use_case = GetCityChoicesUseCaseImpl {
            directory: Arc::new(directory),
            logger: mock_logger(),
        };

        let choices = use_case.execute().await.unwrap();

        assert_eq!(choices, vec!["Kyiv", "Lviv", "Kyiv"]);
    }

    #[tokio::test]
    async fn should_propagate_directory_failure() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_cities()
            .returning(|| Err(ShippingError::RequestFailed));

        let use_case = GetCityChoicesUseCaseImpl {
            directory: Arc::new(directory),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), ShippingError::RequestFailed));
    }
}
