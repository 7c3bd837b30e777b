use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    aggregates::{count_where, percentage, Trend},
    models::{ActivityLog, BadgeVariant, CatalogItem},
};

/// Stock health counters for the overview cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub recently_added: usize,
}

impl InventorySummary {
    /// Counts over `items`; "recent" means created within `recent_days`
    /// before `now`.
    pub fn compute(items: &[CatalogItem], now: DateTime<Utc>, recent_days: u32) -> Self {
        let since = now - Duration::days(i64::from(recent_days));
        Self {
            total_items: items.len(),
            low_stock: count_where(items, CatalogItem::is_low_stock),
            out_of_stock: count_where(items, CatalogItem::is_out_of_stock),
            recently_added: count_where(items, |item| {
                item.created_at >= since && item.created_at <= now
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressLevel {
    Error,
    Warning,
    Success,
}

impl ProgressLevel {
    /// Under 30% is an error, under 70% a warning.
    pub fn for_percent(percent: Decimal) -> Self {
        if percent < Decimal::from(30) {
            Self::Error
        } else if percent < Decimal::from(70) {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Error => BadgeVariant::Error,
            Self::Warning => BadgeVariant::Warning,
            Self::Success => BadgeVariant::Success,
        }
    }
}

/// How much of the catalog is fully classified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogProgress {
    pub total: u64,
    pub cataloged: u64,
    pub remaining: u64,
    pub percent_complete: Decimal,
    pub level: ProgressLevel,
}

impl CatalogProgress {
    /// `cataloged` is capped at `total`.
    pub fn from_counts(total: u64, cataloged: u64) -> Self {
        let cataloged = cataloged.min(total);
        let percent_complete = percentage(cataloged, total);
        Self {
            total,
            cataloged,
            remaining: total - cataloged,
            percent_complete,
            level: ProgressLevel::for_percent(percent_complete),
        }
    }

    pub fn compute(items: &[CatalogItem]) -> Self {
        let cataloged = count_where(items, CatalogItem::is_cataloged);
        Self::from_counts(items.len() as u64, cataloged as u64)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: u64,
}

/// Counts records per key, keys in first-seen order.
pub fn category_distribution<T, K>(items: &[T], key: K) -> Vec<CategoryCount>
where
    K: Fn(&T) -> String,
{
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        let name = key(item);
        match counts.iter_mut().find(|count| count.name == name) {
            Some(count) => count.value += 1,
            None => counts.push(CategoryCount { name, value: 1 }),
        }
    }
    counts
}

/// Period-over-period changes supplied by reporting, shown next to the
/// overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardTrends {
    pub total_items: Trend,
    pub low_stock: Trend,
    pub catalog_complete: Trend,
    pub new_items: Trend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub inventory: InventorySummary,
    pub progress: CatalogProgress,
    pub trends: DashboardTrends,
    pub categories: Vec<CategoryCount>,
    pub recent_activity: Vec<ActivityLog>,
}

/// Landing page: stock health, catalog progress and recent activity.
#[derive(Clone, Debug, Default)]
pub struct DashboardService {
    items: Vec<CatalogItem>,
    trends: DashboardTrends,
    recent_days: u32,
}

impl DashboardService {
    pub fn new(items: Vec<CatalogItem>, trends: DashboardTrends, recent_days: u32) -> Self {
        Self {
            items,
            trends,
            recent_days,
        }
    }

    /// Builds the overview at `now`. Categories are counted by genre id
    /// and labelled through `genre_name`.
    pub fn overview_at<N>(
        &self,
        now: DateTime<Utc>,
        genre_name: N,
        recent_activity: Vec<ActivityLog>,
    ) -> DashboardOverview
    where
        N: Fn(&str) -> Option<String>,
    {
        DashboardOverview {
            inventory: InventorySummary::compute(&self.items, now, self.recent_days),
            progress: CatalogProgress::compute(&self.items),
            trends: self.trends,
            categories: category_distribution(&self.items, |item| {
                genre_name(&item.genre_id).unwrap_or_else(|| item.genre_id.clone())
            }),
            recent_activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(0, 0, dec!(0), ProgressLevel::Error)]
    #[case(100, 29, dec!(29), ProgressLevel::Error)]
    #[case(100, 30, dec!(30), ProgressLevel::Warning)]
    #[case(100, 69, dec!(69), ProgressLevel::Warning)]
    #[case(100, 70, dec!(70), ProgressLevel::Success)]
    #[case(1500, 1135, dec!(75.67), ProgressLevel::Success)]
    fn progress_levels(
        #[case] total: u64,
        #[case] cataloged: u64,
        #[case] percent: Decimal,
        #[case] level: ProgressLevel,
    ) {
        let progress = CatalogProgress::from_counts(total, cataloged);
        assert_eq!(progress.percent_complete, percent);
        assert_eq!(progress.level, level);
        assert_eq!(progress.remaining, total - cataloged);
    }

    #[test]
    fn distribution_counts_in_first_seen_order() {
        let genres = ["Femmes", "Hommes", "Femmes", "Filles", "Hommes", "Femmes"];
        let counts = category_distribution(&genres, |g| g.to_string());
        assert_eq!(
            counts,
            vec![
                CategoryCount { name: "Femmes".into(), value: 3 },
                CategoryCount { name: "Hommes".into(), value: 2 },
                CategoryCount { name: "Filles".into(), value: 1 },
            ]
        );
    }
}
