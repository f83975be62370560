use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Holiday, HolidayPayload};

#[derive(Clone)]
pub struct HolidaysRepository {
    client: Rc<ApiClient>,
}

impl HolidaysRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Holiday>, ApiError> {
        self.client.list_holidays().await
    }

    pub async fn create(&self, payload: &HolidayPayload) -> Result<Holiday, ApiError> {
        self.client.create_holiday(payload).await
    }

    pub async fn update(&self, id: i64, payload: &HolidayPayload) -> Result<(), ApiError> {
        self.client.update_holiday(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_holiday(id).await
    }
}

impl Default for HolidaysRepository {
    fn default() -> Self {
        Self::new()
    }
}
