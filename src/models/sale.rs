use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::models::product::CartItem;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PaymentMethod {
    Card,
    Cash,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SaleStatus {
    #[default]
    Completed,
    Refunded,
}

/// A finalized till transaction. Never edited after checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    /// UTC time of checkout, minute precision.
    pub date: NaiveDateTime,
    pub status: SaleStatus,
}

impl Sale {
    pub fn article_count(&self) -> usize {
        self.items.len()
    }

    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl Entity for Sale {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Formats the sequential sale number, e.g. `S001`.
pub fn sale_number(sequence: usize) -> String {
    format!("S{:03}", sequence)
}
