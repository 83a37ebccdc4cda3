use poem_openapi::Object;

use business::domain::basket::model::{Basket, BasketLine};
use business::domain::shared::value_objects::format_money;

#[derive(Debug, Clone, Object)]
pub struct BasketLineResponse {
    /// Product unique identifier
    pub product_id: String,
    /// Product name at the time it was added
    pub name: String,
    /// Number of units
    pub quantity: u32,
    /// Unit price, two decimal places
    pub price: String,
    /// Unit price times quantity, two decimal places
    pub total_price: String,
}

impl From<&BasketLine> for BasketLineResponse {
    fn from(line: &BasketLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.product_name.clone(),
            quantity: line.quantity,
            price: format_money(&line.unit_price),
            total_price: format_money(&line.total_price()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketResponse {
    /// Lines in insertion order
    pub items: Vec<BasketLineResponse>,
    /// Sum of all line totals, two decimal places
    pub total_price: String,
}

impl From<Basket> for BasketResponse {
    fn from(basket: Basket) -> Self {
        Self {
            items: basket.lines().iter().map(BasketLineResponse::from).collect(),
            total_price: format_money(&basket.total_price()),
        }
    }
}
