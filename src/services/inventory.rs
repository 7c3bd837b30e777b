use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    aggregates::{count_where, sum_by},
    collection::EntityCollection,
    filters::{apply_filter, Filter, SearchQuery, Selection},
    models::{InventoryItem, VerificationStatus},
    services::Transition,
};

/// Category and free-text criteria of the verification page.
#[derive(Clone, Debug, Default)]
pub struct InventoryFilter {
    pub category: Selection<String>,
    pub search: SearchQuery,
}

impl Filter<InventoryItem> for InventoryFilter {
    fn matches(&self, item: &InventoryItem) -> bool {
        self.category.matches(&item.category) && self.search.matches_item(item)
    }
}

/// Counts shown above the verification list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub discrepancies: usize,
    pub stock_value: Decimal,
}

/// Stock verification page: counted lines checked against expectations.
#[derive(Clone, Debug, Default)]
pub struct InventoryService {
    items: EntityCollection<InventoryItem>,
}

impl InventoryService {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items: EntityCollection::new(items),
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.items.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.get(id)
    }

    pub fn filtered(&self, filter: &InventoryFilter) -> Vec<InventoryItem> {
        apply_filter(self.items.as_slice(), filter)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.items.iter() {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Resolves a pending line to verified or discrepancy.
    ///
    /// Lines already verified or flagged are left untouched.
    #[instrument(skip(self))]
    pub fn verify(&mut self, id: &str) -> Transition<VerificationStatus> {
        let Some(current) = self.items.get(id) else {
            debug!("Inventory item {} not found", id);
            return Transition::NotFound;
        };
        if current.status().is_terminal() {
            debug!("Inventory item {} already {}", id, current.status());
            return Transition::Unchanged;
        }

        let outcome = current.verification_outcome();
        self.items.update(id, |item| item.clone().verified());
        info!("Verified inventory item {}: {}", id, outcome);
        Transition::Applied(outcome)
    }

    pub fn summary(&self) -> VerificationSummary {
        let items = self.items.as_slice();
        let with_status =
            |status: VerificationStatus| count_where(items, |item| item.status() == status);
        VerificationSummary {
            total: items.len(),
            pending: with_status(VerificationStatus::Pending),
            verified: with_status(VerificationStatus::Verified),
            discrepancies: with_status(VerificationStatus::Discrepancy),
            stock_value: sum_by(items, InventoryItem::stock_value),
        }
    }
}
