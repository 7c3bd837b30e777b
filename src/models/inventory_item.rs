use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregates::line_amount;
use crate::collection::Entity;
use crate::filters::Searchable;
use crate::models::BadgeVariant;

/// Stock-check status of an inventory line.
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
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Discrepancy,
}

impl VerificationStatus {
    /// Verified and Discrepancy have no outgoing transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Verified => "Vérifié",
            Self::Discrepancy => "Écart",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Verified => BadgeVariant::Success,
            Self::Discrepancy => BadgeVariant::Error,
            Self::Pending => BadgeVariant::Warning,
        }
    }
}

/// A counted stock line awaiting (or past) verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    /// Units actually counted.
    pub quantity: u32,
    pub expected_quantity: u32,
    pub price: Decimal,
    pub category: String,
    status: VerificationStatus,
}

impl InventoryItem {
    /// A freshly counted line, pending verification.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        quantity: u32,
        expected_quantity: u32,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            quantity,
            expected_quantity,
            price,
            category: category.into(),
            status: VerificationStatus::Pending,
        }
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    /// Resolves a pending line to its [`verification_outcome`](Self::verification_outcome).
    /// Terminal lines keep their status.
    pub fn verified(mut self) -> Self {
        if !self.status.is_terminal() {
            self.status = self.verification_outcome();
        }
        self
    }

    pub fn has_discrepancy(&self) -> bool {
        self.quantity != self.expected_quantity
    }

    /// Counted minus expected units.
    pub fn variance(&self) -> i64 {
        i64::from(self.quantity) - i64::from(self.expected_quantity)
    }

    /// Status the count resolves to once verified.
    pub fn verification_outcome(&self) -> VerificationStatus {
        if self.has_discrepancy() {
            VerificationStatus::Discrepancy
        } else {
            VerificationStatus::Verified
        }
    }

    pub fn stock_value(&self) -> Decimal {
        line_amount(self.price, self.quantity)
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }
}
