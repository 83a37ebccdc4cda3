/// Warehouse category of public pickup points.
pub const BRANCH_CATEGORY: &str = "Branch";

/// A city served by the carrier. The description is the display name and is
/// used directly as the selectable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingCity {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingWarehouse {
    pub description: String,
    pub category: String,
}

impl ShippingWarehouse {
    pub fn is_branch(&self) -> bool {
        self.category == BRANCH_CATEGORY
    }
}

/// Display names of the branch warehouses, in directory order.
pub fn branch_choices(warehouses: Vec<ShippingWarehouse>) -> Vec<String> {
    warehouses
        .into_iter()
        .filter(ShippingWarehouse::is_branch)
        .map(|w| w.description)
        .collect()
}
