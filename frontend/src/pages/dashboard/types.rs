use chrono::{DateTime, Utc};

use crate::api::{UserDayStatus, UserPointings};

/// Everything the dashboard shows for one day, fetched in one pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySnapshot {
    pub per_user: Vec<UserDayStatus>,
    pub total_users: u32,
    pub present_count: u32,
}

impl DailySnapshot {
    pub fn absent_count(&self) -> u32 {
        self.total_users.saturating_sub(self.present_count)
    }

    /// Share of present employees. An empty company is 0%, not a
    /// division by zero.
    pub fn present_percentage(&self) -> f64 {
        if self.total_users == 0 {
            return 0.0;
        }
        f64::from(self.present_count) * 100.0 / f64::from(self.total_users)
    }
}

/// One entry/exit pair in the drill-down table. The gateway reports
/// entries and exits as two independent lists; a missing side (an open
/// session, or a lost badge scan) leaves a hole instead of shifting
/// the pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointingRow {
    pub entre: Option<DateTime<Utc>>,
    pub sortie: Option<DateTime<Utc>>,
}

pub fn pair_pointings(pointings: &UserPointings) -> Vec<PointingRow> {
    let len = pointings.entre.len().max(pointings.sortie.len());
    (0..len)
        .map(|i| PointingRow {
            entre: pointings.entre.get(i).copied(),
            sortie: pointings.sortie.get(i).copied(),
        })
        .collect()
}

/// Detail modal payload: the day's pointings plus the month-to-date
/// total the gateway preformats.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub user: UserDayStatus,
    pub rows: Vec<PointingRow>,
    pub monthly_time: String,
}
