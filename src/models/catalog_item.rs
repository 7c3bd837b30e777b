use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;

/// A fully described catalog article, classified along every taxonomy axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub genre_id: String,
    pub class_id: String,
    pub material_id: String,
    pub pattern_id: String,
    pub design_id: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub quantity: u32,
    pub reorder_point: u32,
    pub store_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity <= self.reorder_point
    }

    /// Classified on all five axes.
    pub fn is_cataloged(&self) -> bool {
        [
            &self.genre_id,
            &self.class_id,
            &self.material_id,
            &self.pattern_id,
            &self.design_id,
        ]
        .iter()
        .all(|id| !id.trim().is_empty())
    }

    pub fn margin(&self) -> Decimal {
        self.price.saturating_sub(self.cost)
    }
}

impl Entity for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }
}
