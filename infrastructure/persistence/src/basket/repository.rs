use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::basket::model::BasketLine;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{BasketLineEntity, quantity_column};
use crate::db::database_error;

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn find_basket_id(&self, user_id: &UserId) -> Result<Option<Uuid>, RepositoryError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM baskets WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn get_or_create_basket(&self, user_id: &UserId) -> Result<Uuid, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row on conflict
        sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO baskets (id, user_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id"#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn get_lines(&self, basket_id: Uuid) -> Result<Vec<BasketLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketLineEntity>(
            r#"SELECT bi.product_id, p.name AS product_name, bi.quantity, bi.price
            FROM basket_items bi
            JOIN products p ON p.id = bi.product_id
            WHERE bi.basket_id = $1
            ORDER BY bi.position, bi.created_at"#,
        )
        .bind(basket_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn replace_lines(
        &self,
        basket_id: Uuid,
        lines: &[BasketLine],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query("DELETE FROM basket_items WHERE basket_id = $1")
            .bind(basket_id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        let now = Utc::now();
        for (line, position) in lines.iter().zip(0i32..) {
            sqlx::query(
                r#"INSERT INTO basket_items (id, basket_id, product_id, quantity, price, position, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(Uuid::new_v4())
            .bind(basket_id)
            .bind(line.product_id)
            .bind(quantity_column(line.quantity))
            .bind(&line.unit_price)
            .bind(position)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)
    }

    async fn insert_line_if_absent(
        &self,
        basket_id: Uuid,
        line: &BasketLine,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO basket_items (id, basket_id, product_id, quantity, price, position, created_at)
            SELECT $1, $2, $3, $4, $5, COALESCE(MAX(position) + 1, 0), $6
            FROM basket_items WHERE basket_id = $2
            ON CONFLICT (basket_id, product_id) DO NOTHING"#,
        )
        .bind(Uuid::new_v4())
        .bind(basket_id)
        .bind(line.product_id)
        .bind(quantity_column(line.quantity))
        .bind(&line.unit_price)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_lines(&self, basket_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM basket_items WHERE basket_id = $1")
            .bind(basket_id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_oversized_quantity() {
        assert_eq!(quantity_column(u32::MAX), i32::MAX);
        assert_eq!(quantity_column(3), 3);
    }

    #[test]
    fn should_map_negative_stored_quantity_to_zero() {
        let entity = BasketLineEntity {
            product_id: Uuid::new_v4(),
            product_name: "Tea".to_string(),
            quantity: -1,
            price: bigdecimal::BigDecimal::from(2),
        };

        assert_eq!(entity.into_domain().quantity, 0);
    }
}
