use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shipping::errors::ShippingError;
use crate::domain::shipping::model::branch_choices;
use crate::domain::shipping::services::ShippingDirectoryService;
use crate::domain::shipping::use_cases::branch_choices::{
    GetBranchChoicesParams, GetBranchChoicesUseCase,
};

pub struct GetBranchChoicesUseCaseImpl {
    pub directory: Arc<dyn ShippingDirectoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBranchChoicesUseCase for GetBranchChoicesUseCaseImpl {
    async fn execute(&self, params: GetBranchChoicesParams) -> Result<Vec<String>, ShippingError> {
        self.logger.info(&format!(
            "Fetching branch choices (city: {})",
            params.city.as_deref().unwrap_or("any")
        ));

        let warehouses = self
            .directory
            .list_warehouses(params.city)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Shipping directory warehouse lookup failed: {}", e))
            })?;

        let choices = branch_choices(warehouses);
        self.logger
            .debug(&format!("Found {} branch warehouses", choices.len()));
        Ok(choices)
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

    fn warehouses(branches: usize, others: usize) -> Vec<ShippingWarehouse> {
        let mut list = Vec::new();
        for i in 0..branches {
            list.push(ShippingWarehouse {
                description: format!("Branch #{}", i + 1),
                category: "Branch".to_string(),
            });
        }
        for i in 0..others {
            list.push(ShippingWarehouse {
                description: format!("Postomat #{}", i + 1),
                category: "Postomat".to_string(),
            });
        }
        list
    }

    #[tokio::test]
    async fn should_return_only_branch_descriptions() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_warehouses()
            .returning(|_| Ok(warehouses(3, 4)));

        let use_case = GetBranchChoicesUseCaseImpl {
            directory: Arc::new(directory),
            logger: mock_logger(),
        };

        let choices = use_case
            .execute(GetBranchChoicesParams { city: None })
            .await
            .unwrap();

        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0], "Branch #1");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_directory_has_nothing() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_warehouses()
            .returning(|_| Ok(vec![]));

        let use_case = GetBranchChoicesUseCaseImpl {
            directory: Arc::new(directory),
            logger: mock_logger(),
        };

        let choices = use_case
            .execute(GetBranchChoicesParams { city: None })
            .await
            .unwrap();

        assert!(choices.is_empty());
    }

    #[tokio::test]
    async fn should_pass_city_filter_to_directory() {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_warehouses()
            .withf(|city| city.as_deref() == Some("Lviv"))
            .times(1)
            .returning(|_| Ok(warehouses(1, 0)));

        let use_case = GetBranchChoicesUseCaseImpl {
            directory: Arc::new(directory),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBranchChoicesParams {
                city: Some("Lviv".to_string()),
            })
            .await;

        assert!(result.is_ok());
    }
}
