use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Basket, BasketLine};

/// Session key under which an anonymous visitor's basket is kept.
pub const SESSION_BASKET_KEY: &str = "basket";

/// One session entry. `position` restores insertion order, which a keyed map
/// does not keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBasketEntry {
    pub name: String,
    pub quantity: u32,
    pub price: BigDecimal,
    pub position: u32,
}

/// Session representation of a basket, keyed by product id as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionBasket {
    pub entries: BTreeMap<String, SessionBasketEntry>,
}

impl SessionBasket {
    pub fn from_basket(basket: &Basket) -> Self {
        let entries = basket
            .lines()
            .iter()
            .zip(0u32..)
            .map(|(line, position)| {
                (
                    line.product_id.to_string(),
                    SessionBasketEntry {
                        name: line.product_name.clone(),
                        quantity: line.quantity,
                        price: line.unit_price.clone(),
                        position,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Entries whose key is not a product id are skipped.
    pub fn into_basket(self) -> Basket {
        let mut entries: Vec<_> = self
            .entries
            .into_iter()
            .filter_map(|(key, entry)| Uuid::from_str(&key).ok().map(|id| (id, entry)))
            .collect();
        entries.sort_by_key(|(_, entry)| entry.position);

        Basket::from_lines(
            entries
                .into_iter()
                .map(|(id, entry)| {
                    BasketLine::from_repository(id, entry.name, entry.quantity, entry.price)
                })
                .collect(),
        )
    }
}
