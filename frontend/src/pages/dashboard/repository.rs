use std::rc::Rc;

use chrono::{Datelike, NaiveDate};

use super::types::{pair_pointings, DailySnapshot, UserDetail};
use crate::api::{ApiClient, ApiError, UserDayStatus};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_snapshot(&self, date: NaiveDate) -> Result<DailySnapshot, ApiError> {
        let per_user = self.client.daily_user_statuses(date).await?;
        let total_users = self.client.count_users().await?;
        let present_count = self.client.present_users_count().await?;
        Ok(DailySnapshot {
            per_user,
            total_users,
            present_count,
        })
    }

    /// Day pointings plus the running monthly total for one employee.
    pub async fn fetch_user_detail(
        &self,
        user: UserDayStatus,
        date: NaiveDate,
    ) -> Result<UserDetail, ApiError> {
        let pointings = self.client.user_pointings(user.user_id, date).await?;
        let monthly_time = self
            .client
            .monthly_work_time(user.user_id, date.month(), date.year())
            .await?;
        let rows = pointings
            .iter()
            .flat_map(pair_pointings)
            .collect();
        Ok(UserDetail {
            user,
            rows,
            monthly_time,
        })
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, GET, POST};
    use crate::state::session;
    use crate::test_support::helpers::date;

    #[tokio::test]
    async fn snapshot_combines_the_three_calls() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/alluseretatwithdate");
            then.status(200).json_body(serde_json::json!({
                "user_statuses": [
                    {"user_id": 1, "firstname": "Ali", "lastname": "Saidi",
                     "status": "present", "availability": "available", "time_worked": "06:45"},
                    {"user_id": 2, "firstname": "Mouna", "lastname": "Khelifi",
                     "status": "absent", "availability": "unavailable", "time_worked": "00:00"}
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/countUsers");
            then.status(200).json_body(serde_json::json!({"usercount": 2}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/alluserpresent");
            then.status(200)
                .json_body(serde_json::json!({"present_users_count": 1}));
        });

        let repo = DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let snapshot = repo.fetch_snapshot(date(2024, 6, 10)).await.unwrap();
        assert_eq!(snapshot.per_user.len(), 2);
        assert_eq!(snapshot.total_users, 2);
        assert_eq!(snapshot.present_percentage(), 50.0);
        session::clear();
    }

    #[tokio::test]
    async fn user_detail_pairs_pointings_and_carries_the_monthly_total() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/alluserpointage");
            then.status(200).json_body(serde_json::json!({
                "user_pointings": [{
                    "user_id": 1,
                    "entre": ["2024-06-10T08:00:00Z", "2024-06-10T13:00:00Z"],
                    "sortie": ["2024-06-10T12:00:00Z"]
                }]
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/userworktime");
            then.status(200)
                .json_body(serde_json::json!({"time_worked": "92:15"}));
        });

        let repo = DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let user = crate::api::UserDayStatus {
            user_id: 1,
            firstname: "Ali".into(),
            lastname: "Saidi".into(),
            status: "present".into(),
            availability: "available".into(),
            time_worked: "06:45".into(),
        };
        let detail = repo.fetch_user_detail(user, date(2024, 6, 10)).await.unwrap();
        assert_eq!(detail.rows.len(), 2);
        assert!(detail.rows[1].sortie.is_none());
        assert_eq!(detail.monthly_time, "92:15");
        session::clear();
    }
}
