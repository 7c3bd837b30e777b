use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    aggregates::{count_where, sum_by},
    collection::EntityCollection,
    filters::{apply_filter, Filter, SearchQuery, Selection},
    models::{MovementItem, MovementStatus, MovementType},
    services::Transition,
};

#[derive(Clone, Debug, Default)]
pub struct MovementFilter {
    pub movement_type: Selection<MovementType>,
    pub status: Selection<MovementStatus>,
    pub search: SearchQuery,
}

impl Filter<MovementItem> for MovementFilter {
    fn matches(&self, item: &MovementItem) -> bool {
        self.movement_type.matches(&item.movement_type)
            && self.status.matches(&item.status)
            && self.search.matches_item(item)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovementSummary {
    pub received_units: u64,
    pub given_units: u64,
    pub pending: usize,
    pub value: Decimal,
}

/// Surplus movements between stores.
#[derive(Clone, Debug, Default)]
pub struct MovementService {
    movements: EntityCollection<MovementItem>,
}

impl MovementService {
    pub fn new(movements: Vec<MovementItem>) -> Self {
        Self {
            movements: EntityCollection::new(movements),
        }
    }

    pub fn movements(&self) -> &[MovementItem] {
        self.movements.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&MovementItem> {
        self.movements.get(id)
    }

    pub fn filtered(&self, filter: &MovementFilter) -> Vec<MovementItem> {
        apply_filter(self.movements.as_slice(), filter)
    }

    /// Marks a pending movement as completed. There is no way back.
    #[instrument(skip(self))]
    pub fn complete(&mut self, id: &str) -> Transition<MovementStatus> {
        let Some(current) = self.movements.get(id) else {
            debug!("Movement {} not found", id);
            return Transition::NotFound;
        };
        if current.status.is_terminal() {
            debug!("Movement {} already completed", id);
            return Transition::Unchanged;
        }

        self.movements.update(id, |movement| MovementItem {
            status: MovementStatus::Completed,
            ..movement.clone()
        });
        info!("Completed movement {}", id);
        Transition::Applied(MovementStatus::Completed)
    }

    /// Totals over the given (usually filtered) movements.
    pub fn summarize(movements: &[MovementItem]) -> MovementSummary {
        let units_of = |kind: MovementType| -> u64 {
            movements
                .iter()
                .filter(|m| m.movement_type == kind)
                .map(|m| u64::from(m.quantity))
                .sum()
        };
        MovementSummary {
            received_units: units_of(MovementType::Received),
            given_units: units_of(MovementType::Given),
            pending: count_where(movements, |m| m.status == MovementStatus::Pending),
            value: sum_by(movements, MovementItem::line_total),
        }
    }
}
