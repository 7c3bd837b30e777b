use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregates::line_amount;
use crate::collection::Entity;
use crate::filters::Searchable;
use crate::models::BadgeVariant;

/// Direction of a surplus transfer, seen from the current store.
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
pub enum MovementType {
    Received,
    Given,
}

impl MovementType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Reçu",
            Self::Given => "Donné",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Received => BadgeVariant::Success,
            Self::Given => BadgeVariant::Warning,
        }
    }
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
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MovementStatus {
    #[default]
    Pending,
    Completed,
}

impl MovementStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Completed => "Complété",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Completed => BadgeVariant::Success,
            Self::Pending => BadgeVariant::Warning,
        }
    }
}

/// A surplus transfer between stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub status: MovementStatus,
    pub date: NaiveDate,
    /// Counterpart store, by name.
    pub store: String,
}

impl MovementItem {
    pub fn line_total(&self) -> Decimal {
        line_amount(self.price, self.quantity)
    }
}

impl Entity for MovementItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for MovementItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.store.as_str()]
    }
}
