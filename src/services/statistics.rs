use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    aggregates::{ratio, sum_by, sum_counts},
    models::DailySales,
};

/// Reporting period, counted back from the latest recorded day.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DateRange {
    #[default]
    Week,
    Month,
    Year,
}

impl DateRange {
    pub fn days(&self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Semaine",
            Self::Month => "Mois",
            Self::Year => "Année",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SalesSummary {
    pub total_revenue: Decimal,
    pub total_orders: u64,
    pub total_items: u64,
    /// Revenue per order, zero when there were no orders.
    pub average_order_value: Decimal,
}

impl SalesSummary {
    pub fn from_days(days: &[DailySales]) -> Self {
        let total_revenue = sum_by(days, |day| day.revenue);
        let total_orders = sum_counts(days, |day| u64::from(day.orders));
        let total_items = sum_counts(days, |day| u64::from(day.items));
        Self {
            total_revenue,
            total_orders,
            total_items,
            average_order_value: ratio(total_revenue, Decimal::from(total_orders)).round_dp(2),
        }
    }

    /// Units sold per order, zero when there were no orders.
    pub fn items_per_order(&self) -> Decimal {
        ratio(Decimal::from(self.total_items), Decimal::from(self.total_orders)).round_dp(2)
    }
}

/// Sales statistics page over daily aggregates.
#[derive(Clone, Debug, Default)]
pub struct StatisticsService {
    days: Vec<DailySales>,
}

impl StatisticsService {
    /// Days are kept sorted by date.
    pub fn new(mut days: Vec<DailySales>) -> Self {
        days.sort_by_key(|day| day.date);
        Self { days }
    }

    pub fn latest_day(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    /// Days falling inside `range`, oldest first.
    pub fn series(&self, range: DateRange) -> Vec<DailySales> {
        let Some(latest) = self.latest_day() else {
            return Vec::new();
        };
        let first = latest
            .checked_sub_days(Days::new(range.days() - 1))
            .unwrap_or(NaiveDate::MIN);
        self.days
            .iter()
            .filter(|day| day.date >= first && day.date <= latest)
            .cloned()
            .collect()
    }

    pub fn summary(&self, range: DateRange) -> SalesSummary {
        SalesSummary::from_days(&self.series(range))
    }
}
