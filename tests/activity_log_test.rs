mod common;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use common::activity;
use rstest::rstest;
use invclothing::{
    filters::Selection,
    models::{ActionKind, User, UserRole},
    seed,
    services::activity::{
        group_by_recency_at, ActivityFilter, ActivityService, BucketOrder, RecencyBucket,
        RecencyWindow,
    },
};

fn paris() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

fn local(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    paris()
        .with_ymd_and_hms(2024, 3, day, hour, minute, 0)
        .unwrap()
}

fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    local(day, hour, minute).with_timezone(&Utc)
}

fn journal() -> Vec<invclothing::models::ActivityLog> {
    vec![
        activity("1", "Update", utc(10, 14, 30)),
        activity("2", "Create", utc(10, 0, 30)),
        activity("3", "Delete", utc(9, 23, 30)),
        activity("4", "Add", utc(5, 9, 0)),
        activity("5", "Login", utc(1, 8, 0)),
        activity("6", "Logout", utc(10, 12, 0)),
    ]
}

fn ids(entries: &[invclothing::models::ActivityLog]) -> Vec<&str> {
    entries.iter().map(|log| log.id.as_str()).collect()
}

#[test]
fn buckets_follow_local_midnight_boundaries() {
    let groups = group_by_recency_at(&journal(), &local(10, 15, 0), BucketOrder::Insertion);

    let buckets: Vec<RecencyBucket> = groups.iter().map(|g| g.bucket).collect();
    assert_eq!(
        buckets,
        vec![
            RecencyBucket::Today,
            RecencyBucket::Yesterday,
            RecencyBucket::ThisWeek,
            RecencyBucket::Older,
        ]
    );
    assert_eq!(ids(&groups[0].entries), vec!["1", "2", "6"]);
    assert_eq!(ids(&groups[1].entries), vec!["3"]);
    assert_eq!(ids(&groups[2].entries), vec!["4"]);
    assert_eq!(ids(&groups[3].entries), vec!["5"]);
    assert_eq!(groups[0].label, "Aujourd'hui");
    assert_eq!(groups[3].label, "Plus ancien");
}

#[rstest]
#[case(utc(10, 0, 0), RecencyBucket::Today)]
#[case(utc(9, 23, 59), RecencyBucket::Yesterday)]
#[case(utc(9, 0, 0), RecencyBucket::Yesterday)]
#[case(utc(8, 23, 59), RecencyBucket::ThisWeek)]
#[case(utc(3, 0, 0), RecencyBucket::ThisWeek)]
#[case(utc(2, 23, 59), RecencyBucket::Older)]
fn midnight_boundaries_are_inclusive(
    #[case] timestamp: DateTime<Utc>,
    #[case] expected: RecencyBucket,
) {
    let window = RecencyWindow::at(&local(10, 15, 0));
    assert_eq!(window.bucket(timestamp), expected);
}

#[test]
fn newest_first_sorts_within_each_bucket() {
    let groups = group_by_recency_at(&journal(), &local(10, 15, 0), BucketOrder::NewestFirst);
    assert_eq!(ids(&groups[0].entries), vec!["1", "6", "2"]);
}

#[test]
fn empty_buckets_are_omitted() {
    let logs = vec![
        activity("1", "Update", utc(10, 9, 0)),
        activity("2", "Update", utc(1, 9, 0)),
    ];
    let groups = group_by_recency_at(&logs, &local(10, 15, 0), BucketOrder::Insertion);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].bucket, RecencyBucket::Today);
    assert_eq!(groups[1].bucket, RecencyBucket::Older);
}

#[test]
fn grouping_nothing_yields_no_groups() {
    assert!(group_by_recency_at(&[], &local(10, 15, 0), BucketOrder::Insertion).is_empty());
}

#[test]
fn kind_filter_maps_add_to_create() {
    let service = ActivityService::new(journal(), BucketOrder::Insertion);
    let filter = ActivityFilter {
        kind: Selection::Only(ActionKind::Create),
        ..ActivityFilter::default()
    };

    assert_eq!(ids(&service.filtered(&filter)), vec!["2", "4"]);
}

#[test]
fn filtered_groups_only_contain_matches() {
    let service = ActivityService::new(journal(), BucketOrder::Insertion);
    let filter = ActivityFilter {
        kind: Selection::Only(ActionKind::Delete),
        ..ActivityFilter::default()
    };

    let groups = service.grouped_at(&filter, &local(10, 15, 0));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].bucket, RecencyBucket::Yesterday);
}

#[test]
fn seed_journal_splits_today_and_yesterday() {
    let now = local(10, 15, 0);
    let service = ActivityService::new(
        seed::activity_logs(now.with_timezone(&Utc)),
        BucketOrder::Insertion,
    );

    let groups = service.grouped_at(&ActivityFilter::default(), &now);
    assert_eq!(ids(&groups[0].entries), vec!["1", "2", "3", "4"]);
    assert_eq!(groups[1].bucket, RecencyBucket::Yesterday);
    assert_eq!(ids(&groups[1].entries), vec!["5", "6", "7"]);
}

#[test]
fn recent_returns_newest_entries() {
    let service = ActivityService::new(journal(), BucketOrder::Insertion);
    assert_eq!(ids(&service.recent(3)), vec!["1", "6", "2"]);
}

#[test]
fn record_appends_entry_for_user() {
    let mut service = ActivityService::new(vec![], BucketOrder::Insertion);
    let user = User {
        id: "2".into(),
        name: "Claire Martin".into(),
        email: "claire@example.com".into(),
        role: UserRole::Manager,
        avatar: None,
        store_id: None,
    };

    let log = service.record(&user, "Add", "A ajouté un nouveau magasin");

    assert_eq!(service.logs(), &[log.clone()]);
    assert_eq!(log.kind(), ActionKind::Create);
    assert_eq!(log.user_name, "Claire Martin");
}
