use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Motif, MotifPayload};

#[derive(Clone)]
pub struct MotifsRepository {
    client: Rc<ApiClient>,
}

impl MotifsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Motif>, ApiError> {
        self.client.list_motifs().await
    }

    pub async fn create(&self, payload: &MotifPayload) -> Result<Motif, ApiError> {
        self.client.create_motif(payload).await
    }

    /// The gateway confirms updates without echoing the entity; callers
    /// reconcile from the submitted fields.
    pub async fn rename(&self, id: i64, payload: &MotifPayload) -> Result<(), ApiError> {
        self.client.update_motif(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_motif(id).await
    }
}

impl Default for MotifsRepository {
    fn default() -> Self {
        Self::new()
    }
}
