use reqwest::Method;
use serde::Deserialize;

use crate::api::{
    client::ApiClient,
    types::{ApiError, Motif, MotifPayload},
};

#[derive(Deserialize)]
struct MotifsEnvelope {
    motifs: Vec<Motif>,
}

#[derive(Deserialize)]
struct MotifEnvelope {
    motif: Motif,
}

impl ApiClient {
    pub async fn list_motifs(&self) -> Result<Vec<Motif>, ApiError> {
        let builder = self
            .authorized_request(Method::GET, "/api/admin/allmotifs")
            .await?;
        let response = self.execute(builder).await?;
        let envelope: MotifsEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.motifs)
    }

    pub async fn create_motif(&self, payload: &MotifPayload) -> Result<Motif, ApiError> {
        let builder = self
            .authorized_request(Method::POST, "/api/admin/addmotif")
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        let envelope: MotifEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.motif)
    }

    /// The update endpoint confirms without echoing the entity; callers
    /// reconcile from the submitted fields.
    pub async fn update_motif(&self, id: i64, payload: &MotifPayload) -> Result<(), ApiError> {
        let builder = self
            .authorized_request(Method::PUT, &format!("/api/admin/updatemotif/{id}"))
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }

    pub async fn delete_motif(&self, id: i64) -> Result<(), ApiError> {
        let builder = self
            .authorized_request(Method::DELETE, &format!("/api/admin/deletemotif/{id}"))
            .await?;
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }
}
