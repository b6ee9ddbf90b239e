//! Canned figures for the overview page. There is no upstream for these.

use jiff::{SignedDuration, Timestamp};

use crate::dashboard::{Activity, ActivityKind, ChangeType, DashboardStat};

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("1", "Total Revenue", "$45,231.89", "+20.1%"),
        ("2", "Subscriptions", "+2350", "+180.1%"),
        ("3", "Active Users", "+12,234", "+19%"),
        ("4", "Sales", "+573", "+201"),
    ]
    .into_iter()
    .map(|(id, title, value, change)| DashboardStat {
        id: id.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        change_type: ChangeType::Positive,
    })
    .collect()
}

/// Recent activity, timestamped relative to `now`.
pub fn recent_activity(now: Timestamp) -> Vec<Activity> {
    [
        ("1", ActivityKind::User, "New user registered", 2),
        ("2", ActivityKind::Report, "Payment processed successfully", 4),
        ("3", ActivityKind::System, "System backup completed", 6),
    ]
    .into_iter()
    .map(|(id, kind, message, hours_ago)| Activity {
        id: id.to_string(),
        kind,
        message: message.to_string(),
        at: now - SignedDuration::from_hours(hours_ago),
    })
    .collect()
}
