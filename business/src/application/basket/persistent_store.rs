use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::store::BasketStore;
use crate::domain::shared::value_objects::UserId;

/// Basket store for an identified user. The durable basket row is only
/// created once something is written to it.
pub struct PersistentBasketStore {
    repository: Arc<dyn BasketRepository>,
    user_id: UserId,
}

impl PersistentBasketStore {
    pub fn new(repository: Arc<dyn BasketRepository>, user_id: UserId) -> Self {
        Self {
            repository,
            user_id,
        }
    }
}

#[async_trait]
impl BasketStore for PersistentBasketStore {
    async fn load(&self) -> Result<Basket, BasketError> {
        let Some(basket_id) = self.repository.find_basket_id(&self.user_id).await? else {
            return Ok(Basket::new());
        };
        let lines = self.repository.get_lines(basket_id).await?;
        Ok(Basket::from_lines(lines))
    }

    async fn save(&self, basket: &Basket) -> Result<(), BasketError> {
        let basket_id = self.repository.get_or_create_basket(&self.user_id).await?;
        self.repository
            .replace_lines(basket_id, basket.lines())
            .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), BasketError> {
        if let Some(basket_id) = self.repository.find_basket_id(&self.user_id).await? {
            self.repository.delete_lines(basket_id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::BasketLine;
    use crate::domain::errors::RepositoryError;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub BasketRepo {}

        #[async_trait]
        impl BasketRepository for BasketRepo {
            async fn find_basket_id(&self, user_id: &UserId) -> Result<Option<Uuid>, RepositoryError>;
            async fn get_or_create_basket(&self, user_id: &UserId) -> Result<Uuid, RepositoryError>;
            async fn get_lines(&self, basket_id: Uuid) -> Result<Vec<BasketLine>, RepositoryError>;
            async fn replace_lines(&self, basket_id: Uuid, lines: &[BasketLine]) -> Result<(), RepositoryError>;
            async fn insert_line_if_absent(&self, basket_id: Uuid, line: &BasketLine) -> Result<bool, RepositoryError>;
            async fn delete_lines(&self, basket_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    #[tokio::test]
    async fn should_load_empty_basket_without_creating_one() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_find_basket_id().returning(|_| Ok(None));
        mock_repo.expect_get_or_create_basket().never();

        let store = PersistentBasketStore::new(Arc::new(mock_repo), test_user_id());

        let basket = store.load().await.unwrap();

        assert!(basket.is_empty());
    }

    #[tokio::test]
    async fn should_load_stored_lines() {
        let basket_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_find_basket_id()
            .returning(move |_| Ok(Some(basket_id)));
        mock_repo
            .expect_get_lines()
            .with(eq(basket_id))
            .returning(move |_| {
                Ok(vec![BasketLine::from_repository(
                    product_id,
                    "Tea".to_string(),
                    2,
                    BigDecimal::from(3),
                )])
            });

        let store = PersistentBasketStore::new(Arc::new(mock_repo), test_user_id());

        let basket = store.load().await.unwrap();

        assert_eq!(basket.quantity_of(product_id), 2);
        assert_eq!(basket.total_price(), BigDecimal::from(6));
    }

    #[tokio::test]
    async fn should_create_basket_lazily_on_save() {
        let basket_id = Uuid::new_v4();
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_or_create_basket()
            .times(1)
            .returning(move |_| Ok(basket_id));
        mock_repo
            .expect_replace_lines()
            .withf(move |id, lines| *id == basket_id && lines.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let store = PersistentBasketStore::new(Arc::new(mock_repo), test_user_id());

        let result = store.save(&Basket::new()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_skip_delete_when_user_has_no_basket() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_find_basket_id().returning(|_| Ok(None));
        mock_repo.expect_delete_lines().never();

        let store = PersistentBasketStore::new(Arc::new(mock_repo), test_user_id());

        assert!(store.clear().await.is_ok());
    }
}
