use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// A headline metric on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub id: String,
    pub title: String,
    pub value: String,
    /// Change versus the previous month, already formatted.
    pub change: String,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    User,
    Report,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub message: String,
    pub at: Timestamp,
}

impl Activity {
    /// Coarse relative age, e.g. "2 hours ago".
    pub fn ago(&self, now: Timestamp) -> String {
        let secs = now.duration_since(self.at).as_secs().max(0);

        let (amount, unit) = match secs {
            0..60 => return "just now".to_string(),
            60..3_600 => (secs / 60, "minute"),
            3_600..86_400 => (secs / 3_600, "hour"),
            _ => (secs / 86_400, "day"),
        };

        if amount == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{amount} {unit}s ago")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats: Vec<DashboardStat>,
    pub recent_activity: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn activity_at(at: Timestamp) -> Activity {
        Activity {
            id: "1".into(),
            kind: ActivityKind::System,
            message: "System backup completed".into(),
            at,
        }
    }

    #[test]
    fn relative_age_buckets() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let cases = [
            (SignedDuration::from_secs(5), "just now"),
            (SignedDuration::from_secs(60), "1 minute ago"),
            (SignedDuration::from_mins(42), "42 minutes ago"),
            (SignedDuration::from_hours(1), "1 hour ago"),
            (SignedDuration::from_hours(6), "6 hours ago"),
            (SignedDuration::from_hours(49), "2 days ago"),
        ];

        for (age, want) in cases {
            assert_eq!(activity_at(now - age).ago(now), want, "age {age:?}");
        }
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let later = now + SignedDuration::from_mins(3);
        assert_eq!(activity_at(later).ago(now), "just now");
    }
}
