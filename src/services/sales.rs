use chrono::{NaiveDateTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    aggregates::{sum_by, sum_products},
    collection::EntityCollection,
    filters::{apply_filter, Filter, SearchQuery, Selection},
    models::{sale::sale_number, CartItem, PaymentMethod, Product, Sale, SaleStatus},
};

/// Whether cart quantities may exceed the product's available stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockPolicy {
    /// Quantities are taken as entered.
    #[default]
    Unguarded,
    /// Quantities are clamped to `Product::stock`.
    CapAtStock,
}

impl StockPolicy {
    fn clamp(&self, requested: u32, stock: u32) -> u32 {
        match self {
            StockPolicy::Unguarded => requested,
            StockPolicy::CapAtStock => requested.min(stock),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    pub category: Selection<String>,
    pub search: SearchQuery,
}

impl Filter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category) && self.search.matches_item(product)
    }
}

/// The sale being rung up. At most one line per product; every line has a
/// quantity of at least one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: EntityCollection<CartItem>,
}

impl Cart {
    pub fn lines(&self) -> &[CartItem] {
        self.lines.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartItem> {
        self.lines.get(product_id)
    }

    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> Decimal {
        sum_products(
            self.lines.as_slice(),
            |line| line.product.price,
            |line| line.quantity,
        )
    }

    fn add(&mut self, product: &Product, policy: StockPolicy) {
        let id = product.id.as_str();
        if self.lines.contains(id) {
            self.lines.update(id, |line| {
                let quantity = policy.clamp(line.quantity.saturating_add(1), line.product.stock);
                CartItem::new(line.product.clone(), quantity.max(1))
            });
        } else if policy.clamp(1, product.stock) >= 1 {
            self.lines.insert(CartItem::new(product.clone(), 1));
        } else {
            debug!("Product {} is out of stock", id);
        }
    }

    fn set_quantity(&mut self, product_id: &str, quantity: i64, policy: StockPolicy) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.lines.update(product_id, |line| {
            let quantity = policy.clamp(requested, line.product.stock);
            CartItem::new(line.product.clone(), quantity)
        });
        if self.lines.get(product_id).map_or(false, |line| line.quantity == 0) {
            self.remove(product_id);
        }
    }

    fn remove(&mut self, product_id: &str) -> Option<CartItem> {
        self.lines.remove(product_id)
    }

    fn clear(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.lines).into_iter().collect()
    }
}

/// Point of sale: product catalog, the open cart and the sales history.
#[derive(Clone, Debug, Default)]
pub struct PointOfSale {
    products: EntityCollection<Product>,
    cart: Cart,
    history: EntityCollection<Sale>,
    policy: StockPolicy,
}

impl PointOfSale {
    pub fn new(products: Vec<Product>, history: Vec<Sale>, policy: StockPolicy) -> Self {
        Self {
            products: EntityCollection::new(products),
            cart: Cart::default(),
            history: EntityCollection::new(history),
            policy,
        }
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn filtered_products(&self, filter: &ProductFilter) -> Vec<Product> {
        apply_filter(self.products.as_slice(), filter)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &[Sale] {
        self.history.as_slice()
    }

    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Adds one unit of `product`, opening a line if needed.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product, self.policy);
        debug!("Cart holds {} units", self.cart.unit_count());
    }

    /// Sets a line's quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.cart.set_quantity(product_id, quantity, self.policy);
    }

    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: &str) {
        if self.cart.remove(product_id).is_none() {
            debug!("Product {} was not in the cart", product_id);
        }
    }

    pub fn calculate_total(&self) -> Decimal {
        self.cart.total()
    }

    /// Rings up the cart at the current UTC minute. See [`PointOfSale::checkout_at`].
    pub fn checkout(&mut self, payment_method: PaymentMethod) -> Option<Sale> {
        let now = Utc::now().naive_utc();
        let now = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        self.checkout_at(payment_method, now)
    }

    /// Turns the cart into a completed sale and empties the cart.
    ///
    /// An empty cart is a no-op and yields `None`. Otherwise exactly one
    /// sale is appended to the history and the cart is cleared before
    /// returning.
    #[instrument(skip(self))]
    pub fn checkout_at(
        &mut self,
        payment_method: PaymentMethod,
        date: NaiveDateTime,
    ) -> Option<Sale> {
        if self.cart.is_empty() {
            warn!("Checkout requested with an empty cart");
            return None;
        }

        let mut sequence = self.history.len() + 1;
        while self.history.contains(&sale_number(sequence)) {
            sequence += 1;
        }

        let total = self.cart.total();
        let sale = Sale {
            id: sale_number(sequence),
            items: self.cart.clear(),
            total,
            payment_method,
            date,
            status: SaleStatus::Completed,
        };
        self.history.insert(sale.clone());

        info!(
            "Sale {} completed: {} by {}",
            sale.id, sale.total, payment_method
        );
        Some(sale)
    }

    /// Revenue of completed sales in the history.
    pub fn revenue(&self) -> Decimal {
        let completed: Vec<Sale> = self
            .history
            .iter()
            .filter(|sale| sale.status == SaleStatus::Completed)
            .cloned()
            .collect();
        sum_by(&completed, |sale| sale.total)
    }
}
