use chrono::{NaiveDate, TimeZone, Utc};
use invclothing::{
    models::TaxonomyKind,
    seed,
    services::{
        catalog::TaxonomyService,
        dashboard::{CategoryCount, DashboardService, ProgressLevel},
        statistics::{DateRange, StatisticsService},
    },
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[rstest]
#[case(DateRange::Week)]
#[case(DateRange::Month)]
#[case(DateRange::Year)]
fn seed_week_summarizes_every_range(#[case] range: DateRange) {
    let stats = StatisticsService::new(seed::daily_sales());
    let summary = stats.summary(range);

    assert_eq!(summary.total_revenue, dec!(106000));
    assert_eq!(summary.total_orders, 370);
    assert_eq!(summary.total_items, 1025);
    assert_eq!(summary.average_order_value, dec!(286.49));
    assert_eq!(summary.items_per_order(), dec!(2.77));
}

#[test]
fn series_is_sorted_and_ends_at_latest_day() {
    let mut days = seed::daily_sales();
    days.reverse();
    let stats = StatisticsService::new(days);

    let series = stats.series(DateRange::Week);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(stats.latest_day(), NaiveDate::from_ymd_opt(2024, 3, 7));
}

#[test]
fn empty_statistics_have_no_series() {
    let stats = StatisticsService::new(vec![]);
    assert!(stats.series(DateRange::Month).is_empty());
    assert_eq!(stats.summary(DateRange::Month).average_order_value, Decimal::ZERO);
}

#[test]
fn seed_dashboard_overview() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let genres = TaxonomyService::new(TaxonomyKind::Genre, seed::genres());
    let dashboard = DashboardService::new(
        seed::catalog_items(now),
        seed::dashboard_trends(),
        7,
    );

    let overview = dashboard.overview_at(
        now,
        |id| genres.get(id).map(|g| g.name.clone()),
        seed::activity_logs(now).into_iter().take(3).collect(),
    );

    assert_eq!(overview.inventory.total_items, 6);
    assert_eq!(overview.inventory.low_stock, 1);
    assert_eq!(overview.inventory.out_of_stock, 1);
    assert_eq!(overview.inventory.recently_added, 3);

    assert_eq!(overview.progress.cataloged, 4);
    assert_eq!(overview.progress.remaining, 2);
    assert_eq!(overview.progress.percent_complete, dec!(66.67));
    assert_eq!(overview.progress.level, ProgressLevel::Warning);

    assert_eq!(
        overview.categories,
        vec![
            CategoryCount { name: "Hommes".into(), value: 3 },
            CategoryCount { name: "Femmes".into(), value: 1 },
            CategoryCount { name: "Garçons".into(), value: 1 },
            CategoryCount { name: "Filles".into(), value: 1 },
        ]
    );
    assert!(overview.trends.total_items.is_positive());
    assert!(!overview.trends.low_stock.is_positive());
    assert_eq!(overview.recent_activity.len(), 3);
}

#[test]
fn unknown_genres_fall_back_to_their_id() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let dashboard = DashboardService::new(seed::catalog_items(now), Default::default(), 7);

    let overview = dashboard.overview_at(now, |_| None, vec![]);

    assert_eq!(overview.categories[0].name, "1");
}

#[test]
fn empty_catalog_reports_zero_progress() {
    let dashboard = DashboardService::new(vec![], Default::default(), 7);
    let overview = dashboard.overview_at(Utc::now(), |_| None, vec![]);

    assert_eq!(overview.progress.percent_complete, Decimal::ZERO);
    assert_eq!(overview.progress.level, ProgressLevel::Error);
    assert!(overview.categories.is_empty());
}
