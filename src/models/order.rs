use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::aggregates::{line_amount, sum_products};
use crate::collection::{validate_not_blank, Draft, Entity};
use crate::filters::Searchable;
use crate::models::BadgeVariant;

/// Whether the order replenishes stock or redistributes surplus.
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
pub enum OrderType {
    Stock,
    Surplus,
}

/// Enum representing the possible statuses of an order.
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
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Completed,
}

impl OrderStatus {
    /// Next status in the approval flow; `None` once completed.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Approved),
            Self::Approved => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Completed => BadgeVariant::Success,
            Self::Approved => BadgeVariant::Accent,
            Self::Pending => BadgeVariant::Warning,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        line_amount(self.price, self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Store name the order belongs to.
    pub store: String,
    pub items: Vec<OrderLine>,
    /// Stored total. Authoritative for display; see [`Order::lines_total`].
    pub total: Decimal,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Σ quantity × price over the lines.
    pub fn lines_total(&self) -> Decimal {
        sum_products(&self.items, |line| line.price, |line| line.quantity)
    }

    /// Stored total minus the line-derived total, when they differ.
    pub fn total_mismatch(&self) -> Option<Decimal> {
        let derived = self.lines_total();
        (derived != self.total).then(|| self.total.saturating_sub(derived))
    }

    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.store.as_str(), self.id.as_str()]
    }
}

/// Editable order. Committing derives the total from the lines.
#[derive(Clone, Debug, Default, Validate)]
pub struct OrderDraft {
    pub id: String,
    pub order_type: Option<OrderType>,
    pub status: OrderStatus,
    #[validate(custom = "validate_not_blank")]
    pub store: String,
    #[validate(length(min = 1, message = "An order needs at least one line"))]
    #[validate]
    pub items: Vec<OrderLine>,
    pub date: Option<DateTime<Utc>>,
}

impl Draft for OrderDraft {
    type Record = Order;

    fn draft_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, id: String) -> Order {
        let total = sum_products(&self.items, |line| line.price, |line| line.quantity);
        Order {
            id,
            order_type: self.order_type.unwrap_or(OrderType::Stock),
            status: self.status,
            store: self.store.trim().to_string(),
            items: self.items,
            total,
            date: self.date.unwrap_or_else(Utc::now),
        }
    }
}
