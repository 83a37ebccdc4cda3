use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::product::model::Product;

/// The four mutations a basket accepts, whichever store backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketOperation {
    Add,
    Increment,
    Decrement,
    Clear,
}

impl BasketOperation {
    /// Every operation except `Clear` targets a single product.
    pub fn requires_product(&self) -> bool {
        !matches!(self, BasketOperation::Clear)
    }
}

impl std::fmt::Display for BasketOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasketOperation::Add => write!(f, "add"),
            BasketOperation::Increment => write!(f, "increment"),
            BasketOperation::Decrement => write!(f, "decrement"),
            BasketOperation::Clear => write!(f, "clear"),
        }
    }
}

/// One product in a basket. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl BasketLine {
    /// A fresh line priced at the product's current price.
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: 1,
            unit_price: product.price.clone(),
        }
    }

    /// Constructor for data already persisted in a store (no validation).
    pub fn from_repository(
        product_id: Uuid,
        product_name: String,
        quantity: u32,
        unit_price: BigDecimal,
    ) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
        }
    }

    pub fn total_price(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// Ordered basket contents, at most one line per product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a basket from stored lines, dropping any with a zero quantity.
    pub fn from_lines(lines: Vec<BasketLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: Uuid) -> Option<&BasketLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn quantity_of(&self, product_id: Uuid) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    pub fn total_price(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.total_price())
    }

    /// Adding a product already in the basket increments it.
    pub fn add(&mut self, product: &Product) {
        if self.increment(product.id) {
            return;
        }
        self.lines.push(BasketLine::for_product(product));
    }

    /// Returns false when the product is not in the basket.
    pub fn increment(&mut self, product_id: Uuid) -> bool {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes the line when its last unit goes. Returns false when the
    /// product is not in the basket.
    pub fn decrement(&mut self, product_id: Uuid) -> bool {
        let Some(index) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return false;
        };
        let line = &mut self.lines[index];
        if line.quantity <= 1 {
            self.lines.remove(index);
        } else {
            line.quantity -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Applies an operation. `product` is ignored for `Clear`; callers resolve
    /// it beforehand for every other operation.
    pub fn apply(&mut self, operation: BasketOperation, product: Option<&Product>) {
        match (operation, product) {
            (BasketOperation::Clear, _) => self.clear(),
            (BasketOperation::Add, Some(product)) => self.add(product),
            (BasketOperation::Increment, Some(product)) => {
                self.increment(product.id);
            }
            (BasketOperation::Decrement, Some(product)) => {
                self.decrement(product.id);
            }
            (_, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;
    use proptest::prelude::*;

    use super::*;

    fn product(name: &str, price: &str) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            BigDecimal::from_str(price).unwrap(),
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn should_insert_line_with_quantity_one_on_first_add() {
        let coffee = product("Coffee", "4.50");
        let mut basket = Basket::new();

        basket.add(&coffee);

        assert_eq!(basket.lines().len(), 1);
        assert_eq!(basket.quantity_of(coffee.id), 1);
        assert_eq!(basket.lines()[0].unit_price, coffee.price);
    }

    #[test]
    fn should_keep_insertion_order() {
        let tea = product("Tea", "2.00");
        let milk = product("Milk", "1.20");
        let mut basket = Basket::new();

        basket.add(&tea);
        basket.add(&milk);
        basket.add(&tea);

        let names: Vec<_> = basket.lines().iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Milk"]);
    }

    #[test]
    fn should_remove_line_when_decremented_to_zero() {
        let tea = product("Tea", "2.00");
        let mut basket = Basket::new();
        basket.add(&tea);

        assert!(basket.decrement(tea.id));

        assert!(basket.is_empty());
        assert!(basket.line(tea.id).is_none());
    }

    #[test]
    fn should_ignore_decrement_of_absent_product() {
        let tea = product("Tea", "2.00");
        let milk = product("Milk", "1.20");
        let mut basket = Basket::new();
        basket.add(&milk);

        assert!(!basket.decrement(tea.id));
        assert_eq!(basket.quantity_of(milk.id), 1);
    }

    #[test]
    fn should_ignore_increment_of_absent_product() {
        let tea = product("Tea", "2.00");
        let mut basket = Basket::new();

        basket.apply(BasketOperation::Increment, Some(&tea));

        assert!(basket.is_empty());
    }

    #[test]
    fn should_compute_line_and_basket_totals() {
        let tea = product("Tea", "2.50");
        let milk = product("Milk", "1.25");
        let mut basket = Basket::new();
        basket.add(&tea);
        basket.add(&tea);
        basket.add(&milk);

        assert_eq!(basket.line(tea.id).unwrap().total_price(), BigDecimal::from(5));
        assert_eq!(basket.total_price(), BigDecimal::from_str("6.25").unwrap());
    }

    #[test]
    fn should_have_zero_total_after_clear() {
        let tea = product("Tea", "2.50");
        let mut basket = Basket::new();
        basket.add(&tea);

        basket.apply(BasketOperation::Clear, None);

        assert!(basket.is_empty());
        assert_eq!(basket.total_price(), BigDecimal::zero());
    }

    #[test]
    fn should_leave_one_unit_after_two_adds_and_one_decrement() {
        let p = product("P", "10.00");
        let mut basket = Basket::new();

        basket.apply(BasketOperation::Add, Some(&p));
        basket.apply(BasketOperation::Add, Some(&p));
        basket.apply(BasketOperation::Decrement, Some(&p));

        assert_eq!(basket.quantity_of(p.id), 1);
        assert_eq!(basket.total_price(), BigDecimal::from(10));
    }

    #[test]
    fn should_drop_zero_quantity_lines_when_rebuilding() {
        let lines = vec![
            BasketLine::from_repository(Uuid::new_v4(), "Tea".into(), 0, BigDecimal::from(2)),
            BasketLine::from_repository(Uuid::new_v4(), "Milk".into(), 3, BigDecimal::from(1)),
        ];

        let basket = Basket::from_lines(lines);

        assert_eq!(basket.lines().len(), 1);
        assert_eq!(basket.lines()[0].product_name, "Milk");
    }

    #[test]
    fn should_only_require_product_for_targeted_operations() {
        assert!(BasketOperation::Add.requires_product());
        assert!(BasketOperation::Increment.requires_product());
        assert!(BasketOperation::Decrement.requires_product());
        assert!(!BasketOperation::Clear.requires_product());
    }

    proptest! {
        #[test]
        fn repeated_add_counts_every_call(adds in 1u32..200) {
            let p = product("P", "1.99");
            let mut basket = Basket::new();

            for _ in 0..adds {
                basket.apply(BasketOperation::Add, Some(&p));
            }

            prop_assert_eq!(basket.lines().len(), 1);
            prop_assert_eq!(basket.quantity_of(p.id), adds);
        }

        #[test]
        fn clear_always_empties(adds in 0usize..20) {
            let mut basket = Basket::new();
            for i in 0..adds {
                basket.add(&product(&format!("P{i}"), "3.00"));
            }

            basket.apply(BasketOperation::Clear, None);

            prop_assert!(basket.is_empty());
            prop_assert_eq!(basket.total_price(), BigDecimal::zero());
        }
    }
}
