use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::basket::model::BasketLine;

/// A basket item joined with its product name.
#[derive(Debug, FromRow)]
pub struct BasketLineEntity {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl BasketLineEntity {
    /// Negative quantities cannot be stored; they map to 0 and get dropped
    /// when the basket is rebuilt.
    pub fn into_domain(self) -> BasketLine {
        BasketLine::from_repository(
            self.product_id,
            self.product_name,
            u32::try_from(self.quantity).unwrap_or(0),
            self.price,
        )
    }
}

/// Quantities beyond `i32::MAX` are clamped to fit the column.
pub fn quantity_column(quantity: u32) -> i32 {
    i32::try_from(quantity).unwrap_or(i32::MAX)
}
