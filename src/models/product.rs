use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregates::line_amount;
use crate::collection::Entity;
use crate::filters::Searchable;

/// A sellable product as listed at the till.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub category: String,
    /// Units available for sale.
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }
}

/// A product with the quantity requested in the current sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn line_total(&self) -> Decimal {
        line_amount(self.product.price, self.quantity)
    }
}

impl Entity for CartItem {
    fn id(&self) -> &str {
        &self.product.id
    }
}
