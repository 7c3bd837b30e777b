use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    collection::{next_id, EntityCollection},
    filters::{apply_filter, Filter, Selection},
    models::{ActionKind, ActivityLog, User},
};

/// Ordering of records inside one recency bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketOrder {
    /// Keep the order the log was recorded in.
    #[default]
    Insertion,
    /// Most recent first.
    NewestFirst,
}

/// Display buckets, in the order they are rendered.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecencyBucket {
    Today,
    Yesterday,
    ThisWeek,
    Older,
}

impl RecencyBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Aujourd'hui",
            Self::Yesterday => "Hier",
            Self::ThisWeek => "Cette semaine",
            Self::Older => "Plus ancien",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityGroup {
    pub bucket: RecencyBucket,
    pub label: &'static str,
    pub entries: Vec<ActivityLog>,
}

/// Day boundaries relative to one instant, in the caller's timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecencyWindow {
    today: DateTime<Utc>,
    yesterday: DateTime<Utc>,
    week_start: DateTime<Utc>,
}

impl RecencyWindow {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let date = now.date_naive();
        Self {
            today: midnight(&tz, Some(date)),
            yesterday: midnight(&tz, date.checked_sub_days(Days::new(1))),
            week_start: midnight(&tz, date.checked_sub_days(Days::new(7))),
        }
    }

    pub fn bucket(&self, timestamp: DateTime<Utc>) -> RecencyBucket {
        if timestamp >= self.today {
            RecencyBucket::Today
        } else if timestamp >= self.yesterday {
            RecencyBucket::Yesterday
        } else if timestamp >= self.week_start {
            RecencyBucket::ThisWeek
        } else {
            RecencyBucket::Older
        }
    }
}

// Start of `date` in `tz`. Where midnight falls in a DST gap the naive
// midnight is read as UTC.
fn midnight<Tz: TimeZone>(tz: &Tz, date: Option<NaiveDate>) -> DateTime<Utc> {
    let Some(start) = date.and_then(|d| d.and_hms_opt(0, 0, 0)) else {
        return DateTime::<Utc>::MIN_UTC;
    };
    tz.from_local_datetime(&start)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&start))
}

/// Partitions `logs` into recency buckets relative to `now`.
///
/// Buckets come out in fixed order and empty ones are omitted.
pub fn group_by_recency_at<Tz: TimeZone>(
    logs: &[ActivityLog],
    now: &DateTime<Tz>,
    order: BucketOrder,
) -> Vec<ActivityGroup> {
    let window = RecencyWindow::at(now);
    let mut groups: Vec<ActivityGroup> = [
        RecencyBucket::Today,
        RecencyBucket::Yesterday,
        RecencyBucket::ThisWeek,
        RecencyBucket::Older,
    ]
    .into_iter()
    .map(|bucket| ActivityGroup {
        bucket,
        label: bucket.label(),
        entries: Vec::new(),
    })
    .collect();

    for log in logs {
        let bucket = window.bucket(log.timestamp);
        if let Some(group) = groups.iter_mut().find(|g| g.bucket == bucket) {
            group.entries.push(log.clone());
        }
    }

    if order == BucketOrder::NewestFirst {
        for group in &mut groups {
            // stable, so equal timestamps keep insertion order
            group.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
    }

    groups.retain(|group| !group.entries.is_empty());
    groups
}

#[derive(Clone, Debug, Default)]
pub struct ActivityFilter {
    pub kind: Selection<ActionKind>,
    pub user_id: Selection<String>,
}

impl Filter<ActivityLog> for ActivityFilter {
    fn matches(&self, log: &ActivityLog) -> bool {
        self.kind.matches(&log.kind()) && self.user_id.matches(&log.user_id)
    }
}

/// User activity journal.
#[derive(Clone, Debug, Default)]
pub struct ActivityService {
    logs: EntityCollection<ActivityLog>,
    order: BucketOrder,
}

impl ActivityService {
    pub fn new(logs: Vec<ActivityLog>, order: BucketOrder) -> Self {
        Self {
            logs: EntityCollection::new(logs),
            order,
        }
    }

    pub fn logs(&self) -> &[ActivityLog] {
        self.logs.as_slice()
    }

    pub fn filtered(&self, filter: &ActivityFilter) -> Vec<ActivityLog> {
        apply_filter(self.logs.as_slice(), filter)
    }

    /// Filtered journal grouped relative to the local clock.
    pub fn grouped(&self, filter: &ActivityFilter) -> Vec<ActivityGroup> {
        self.grouped_at(filter, &Local::now())
    }

    pub fn grouped_at<Tz: TimeZone>(
        &self,
        filter: &ActivityFilter,
        now: &DateTime<Tz>,
    ) -> Vec<ActivityGroup> {
        group_by_recency_at(&self.filtered(filter), now, self.order)
    }

    /// The `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ActivityLog> {
        let mut logs = self.logs.as_slice().to_vec();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit);
        logs
    }

    /// Appends a journal entry for `user`.
    #[instrument(skip(self, user, details), fields(user_id = %user.id))]
    pub fn record(
        &mut self,
        user: &User,
        action: &str,
        details: impl Into<String>,
    ) -> ActivityLog {
        let log = ActivityLog {
            id: next_id(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            action: action.to_string(),
            details: details.into(),
            timestamp: Utc::now(),
        };
        self.logs.insert(log.clone());
        info!("Recorded {} activity for {}", log.kind(), user.name);
        log
    }
}
