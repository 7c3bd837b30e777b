use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of aggregated sales figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub orders: u32,
    pub items: u32,
}
