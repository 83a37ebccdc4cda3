use async_trait::async_trait;
use poem::session::Session;

use business::domain::basket::errors::BasketError;
use business::domain::basket::model::Basket;
use business::domain::basket::session::{SESSION_BASKET_KEY, SessionBasket};
use business::domain::basket::store::BasketStore;

/// Basket kept in the visitor's server-side session, for anonymous requests and
/// as the source side of reconciliation.
pub struct SessionBasketStore<'a> {
    session: &'a Session,
}

impl<'a> SessionBasketStore<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl BasketStore for SessionBasketStore<'_> {
    async fn load(&self) -> Result<Basket, BasketError> {
        // An unreadable entry (old format, tampering) starts a fresh basket.
        Ok(self
            .session
            .get::<SessionBasket>(SESSION_BASKET_KEY)
            .map(SessionBasket::into_basket)
            .unwrap_or_default())
    }

    async fn save(&self, basket: &Basket) -> Result<(), BasketError> {
        if basket.is_empty() {
            self.session.remove(SESSION_BASKET_KEY);
            return Ok(());
        }

        let value = serde_json::to_value(SessionBasket::from_basket(basket)).map_err(|e| {
            tracing::error!("Could not serialize session basket: {e}");
            BasketError::SessionUnavailable
        })?;
        self.session.set(SESSION_BASKET_KEY, value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), BasketError> {
        self.session.remove(SESSION_BASKET_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use business::domain::basket::model::BasketLine;
    use uuid::Uuid;

    use super::*;

    fn basket_with(lines: &[(Uuid, &str, u32, &str)]) -> Basket {
        Basket::from_lines(
            lines
                .iter()
                .map(|(id, name, quantity, price)| {
                    BasketLine::from_repository(
                        *id,
                        name.to_string(),
                        *quantity,
                        BigDecimal::from_str(price).unwrap(),
                    )
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn should_load_empty_basket_from_fresh_session() {
        let session = Session::default();
        let store = SessionBasketStore::new(&session);

        let basket = store.load().await.unwrap();

        assert!(basket.is_empty());
    }

    #[tokio::test]
    async fn should_keep_lines_and_order_across_save_and_load() {
        let session = Session::default();
        let store = SessionBasketStore::new(&session);
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let basket = basket_with(&[(first, "Tea", 2, "10.00"), (second, "Honey", 1, "4.50")]);

        store.save(&basket).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, basket);
        assert_eq!(loaded.lines()[0].product_id, first);
        assert_eq!(loaded.lines()[1].product_id, second);
    }

    #[tokio::test]
    async fn should_remove_entry_on_clear() {
        let session = Session::default();
        let store = SessionBasketStore::new(&session);
        store
            .save(&basket_with(&[(Uuid::new_v4(), "Tea", 1, "10.00")]))
            .await
            .unwrap();

        store.clear().await.unwrap();

        assert!(session.get::<SessionBasket>(SESSION_BASKET_KEY).is_none());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_start_fresh_when_entry_is_unreadable() {
        let session = Session::default();
        session.set(SESSION_BASKET_KEY, "not a basket");
        let store = SessionBasketStore::new(&session);

        let basket = store.load().await.unwrap();

        assert!(basket.is_empty());
    }
}
