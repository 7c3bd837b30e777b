use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::{
    aggregates::sum_by,
    collection::EntityCollection,
    errors::ServiceResult,
    filters::{apply_filter, Filter, SearchQuery, Selection},
    models::{Order, OrderDraft, OrderStatus, OrderType},
    services::Transition,
};

/// Type tab plus search over store and order id.
#[derive(Clone, Debug, Default)]
pub struct OrderFilter {
    pub order_type: Selection<OrderType>,
    pub status: Selection<OrderStatus>,
    pub search: SearchQuery,
}

impl OrderFilter {
    pub fn tab(order_type: OrderType) -> Self {
        Self {
            order_type: Selection::Only(order_type),
            ..Self::default()
        }
    }
}

impl Filter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        self.order_type.matches(&order.order_type)
            && self.status.matches(&order.status)
            && self.search.matches_item(order)
    }
}

/// Stock and surplus orders.
#[derive(Clone, Debug, Default)]
pub struct OrderService {
    orders: EntityCollection<Order>,
}

impl OrderService {
    pub fn new(orders: Vec<Order>) -> Self {
        let orders = EntityCollection::new(orders);
        for order in orders.iter() {
            if let Some(delta) = order.total_mismatch() {
                warn!(
                    "Order {} stored total differs from its lines by {}",
                    order.id, delta
                );
            }
        }
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn filtered(&self, filter: &OrderFilter) -> Vec<Order> {
        apply_filter(self.orders.as_slice(), filter)
    }

    /// Sum of stored totals over `orders`.
    pub fn total_value(orders: &[Order]) -> Decimal {
        sum_by(orders, |order| order.total)
    }

    /// Creates or edits an order from a draft.
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - The committed order, total derived from its lines
    /// * `Err(ServiceError::ValidationError)` - Blank store or no lines
    /// * `Err(ServiceError::NotFound)` - The draft targets an unknown id
    #[instrument(skip(self, draft), fields(order_id = %draft.id))]
    pub fn save(&mut self, draft: OrderDraft) -> ServiceResult<Order> {
        let order = self.orders.save(draft)?;
        info!("Saved order {} ({})", order.id, order.total);
        Ok(order)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Option<Order> {
        let removed = self.orders.remove(id);
        if removed.is_some() {
            info!("Deleted order {}", id);
        }
        removed
    }

    /// Moves an order one step along pending → approved → completed.
    #[instrument(skip(self))]
    pub fn advance(&mut self, id: &str) -> Transition<OrderStatus> {
        let Some(current) = self.orders.get(id) else {
            debug!("Order {} not found", id);
            return Transition::NotFound;
        };
        let Some(next) = current.status.next() else {
            debug!("Order {} already completed", id);
            return Transition::Unchanged;
        };

        self.orders.update(id, |order| Order {
            status: next,
            ..order.clone()
        });
        info!("Order {} is now {}", id, next);
        Transition::Applied(next)
    }
}
