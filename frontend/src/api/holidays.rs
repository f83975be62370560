use reqwest::Method;
use serde::Deserialize;

use crate::api::{
    client::ApiClient,
    types::{ApiError, Holiday, HolidayPayload},
};

#[derive(Deserialize)]
struct HolidayEnvelope {
    holiday: Holiday,
}

impl ApiClient {
    /// Unlike the other list endpoints, holidays come back as a bare
    /// array.
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        let builder = self
            .authorized_request(Method::GET, "/api/admin/holidays")
            .await?;
        let response = self.execute(builder).await?;
        Self::map_json_response(response).await
    }

    pub async fn create_holiday(&self, payload: &HolidayPayload) -> Result<Holiday, ApiError> {
        let builder = self
            .authorized_request(Method::POST, "/api/admin/addholiday")
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        let envelope: HolidayEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.holiday)
    }

    pub async fn update_holiday(&self, id: i64, payload: &HolidayPayload) -> Result<(), ApiError> {
        let builder = self
            .authorized_request(Method::PUT, &format!("/api/admin/updateholiday/{id}"))
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }

    pub async fn delete_holiday(&self, id: i64) -> Result<(), ApiError> {
        let builder = self
            .authorized_request(Method::DELETE, &format!("/api/admin/deleteholiday/{id}"))
            .await?;
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use chrono::NaiveDate;

    use crate::api::test_support::mock::{MockServer, GET, POST};
    use crate::api::{ApiClient, HolidayPayload};
    use crate::state::session;

    #[tokio::test]
    async fn holiday_list_is_a_bare_array() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/holidays");
            then.status(200).json_body(serde_json::json!([
                {"id": 1, "holiday_date": "2024-03-20", "holiday_name": "Fête de l'indépendance"}
            ]));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let holidays = client.list_holidays().await.unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].holiday_name, "Fête de l'indépendance");
        session::clear();
    }

    #[tokio::test]
    async fn create_holiday_unwraps_the_envelope() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/addholiday");
            then.status(201).json_body(serde_json::json!({
                "holiday": {"id": 5, "holiday_date": "2024-07-25", "holiday_name": "Fête de la République"}
            }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let created = client
            .create_holiday(&HolidayPayload {
                holiday_date: NaiveDate::from_ymd_opt(2024, 7, 25).unwrap(),
                holiday_name: "Fête de la République".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 5);
        session::clear();
    }
}
