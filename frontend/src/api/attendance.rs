use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{
    client::ApiClient,
    types::{ApiError, UserDayStatus, UserPointings},
};

#[derive(Serialize)]
struct DatePayload {
    date: NaiveDate,
}

#[derive(Deserialize)]
struct UserStatusesEnvelope {
    user_statuses: Vec<UserDayStatus>,
}

#[derive(Deserialize)]
struct UserCountEnvelope {
    usercount: u32,
}

#[derive(Deserialize)]
struct PresentCountEnvelope {
    present_users_count: u32,
}

#[derive(Deserialize)]
struct PointingsEnvelope {
    user_pointings: Vec<UserPointings>,
}

#[derive(Deserialize)]
struct WorkTimeEnvelope {
    time_worked: String,
}

impl ApiClient {
    pub async fn daily_user_statuses(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<UserDayStatus>, ApiError> {
        let builder = self
            .authorized_request(Method::POST, "/api/admin/alluseretatwithdate")
            .await?
            .json(&DatePayload { date });
        let response = self.execute(builder).await?;
        let envelope: UserStatusesEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.user_statuses)
    }

    pub async fn count_users(&self) -> Result<u32, ApiError> {
        let builder = self
            .authorized_request(Method::GET, "/api/admin/countUsers")
            .await?;
        let response = self.execute(builder).await?;
        let envelope: UserCountEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.usercount)
    }

    pub async fn present_users_count(&self) -> Result<u32, ApiError> {
        let builder = self
            .authorized_request(Method::GET, "/api/admin/alluserpresent")
            .await?;
        let response = self.execute(builder).await?;
        let envelope: PresentCountEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.present_users_count)
    }

    pub async fn user_pointings(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<UserPointings>, ApiError> {
        let body = json!({ "date": date, "userId": user_id });
        let builder = self
            .authorized_request(Method::POST, "/api/admin/alluserpointage")
            .await?
            .json(&body);
        let response = self.execute(builder).await?;
        let envelope: PointingsEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.user_pointings)
    }

    /// Total time worked by one user over a month, preformatted by the
    /// gateway.
    pub async fn monthly_work_time(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> Result<String, ApiError> {
        let body = json!({ "userId": user_id, "month": month, "year": year });
        let builder = self
            .authorized_request(Method::POST, "/api/admin/userworktime")
            .await?
            .json(&body);
        let response = self.execute(builder).await?;
        let envelope: WorkTimeEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.time_worked)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use chrono::NaiveDate;

    use crate::api::test_support::mock::{MockServer, GET, POST};
    use crate::api::ApiClient;
    use crate::state::session;

    #[tokio::test]
    async fn snapshot_endpoints_parse_their_envelopes() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/alluseretatwithdate");
            then.status(200).json_body(serde_json::json!({
                "user_statuses": [{
                    "user_id": 1,
                    "firstname": "Ali",
                    "lastname": "Saidi",
                    "status": "present",
                    "availability": "available",
                    "time_worked": "06:45"
                }]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/countUsers");
            then.status(200).json_body(serde_json::json!({"usercount": 14}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/alluserpresent");
            then.status(200)
                .json_body(serde_json::json!({"present_users_count": 9}));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let statuses = client.daily_user_statuses(date).await.unwrap();
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].is_present());
        assert_eq!(client.count_users().await.unwrap(), 14);
        assert_eq!(client.present_users_count().await.unwrap(), 9);
        session::clear();
    }

    #[tokio::test]
    async fn pointings_parse_timestamp_lists() {
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

        let client = ApiClient::new_with_base_url(server.base_url());
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let pointings = client.user_pointings(1, date).await.unwrap();
        assert_eq!(pointings[0].entre.len(), 2);
        assert_eq!(pointings[0].sortie.len(), 1);
        session::clear();
    }
}
