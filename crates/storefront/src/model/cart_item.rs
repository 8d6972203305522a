use serde::{Deserialize, Serialize};

use super::Product;

/// One line of the shopping cart.
///
/// `quantity` is the number of units in the cart. It is unrelated to `product.quantity`,
/// which is the catalog's stock level at the time the product was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    /// A fresh cart line holding a single unit.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}
