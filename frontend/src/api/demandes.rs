use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::api::{
    client::ApiClient,
    types::{ApiError, CongeDemande, RemoteDemande},
};

/// The two demande families the gateway serves through parallel
/// endpoint sets. Endpoint paths and outbound status strings are
/// centralised here so the screens stay identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandeKind {
    Conge,
    Remote,
}

impl DemandeKind {
    pub fn list_path(self) -> &'static str {
        match self {
            DemandeKind::Conge => "/api/admin/alldemande",
            DemandeKind::Remote => "/api/admin/allonlinework",
        }
    }

    pub fn update_path(self, id: i64) -> String {
        match self {
            DemandeKind::Conge => format!("/api/admin/updatedemande/{id}"),
            DemandeKind::Remote => format!("/api/admin/updateonline/{id}"),
        }
    }

    pub fn accept_status(self) -> &'static str {
        match self {
            DemandeKind::Conge => "accepter",
            DemandeKind::Remote => "accepted",
        }
    }

    pub fn refuse_status(self) -> &'static str {
        match self {
            DemandeKind::Conge => "refuser",
            DemandeKind::Remote => "refused",
        }
    }
}

#[derive(Deserialize)]
struct CongeListEnvelope {
    demandes: Vec<CongeDemande>,
}

#[derive(Deserialize)]
struct RemoteListEnvelope {
    workonline: Vec<RemoteDemande>,
}

impl ApiClient {
    pub async fn list_conge_demandes(&self) -> Result<Vec<CongeDemande>, ApiError> {
        let builder = self
            .authorized_request(Method::GET, DemandeKind::Conge.list_path())
            .await?;
        let response = self.execute(builder).await?;
        let envelope: CongeListEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.demandes)
    }

    pub async fn list_remote_demandes(&self) -> Result<Vec<RemoteDemande>, ApiError> {
        let builder = self
            .authorized_request(Method::GET, DemandeKind::Remote.list_path())
            .await?;
        let response = self.execute(builder).await?;
        let envelope: RemoteListEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.workonline)
    }

    pub async fn accept_demande(&self, kind: DemandeKind, id: i64) -> Result<(), ApiError> {
        let body = json!({ "status": kind.accept_status() });
        let builder = self
            .authorized_request(Method::PUT, &kind.update_path(id))
            .await?
            .json(&body);
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }

    pub async fn refuse_demande(
        &self,
        kind: DemandeKind,
        id: i64,
        reason: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "status": kind.refuse_status(),
            "refuse_reason": reason,
        });
        let builder = self
            .authorized_request(Method::PUT, &kind.update_path(id))
            .await?
            .json(&body);
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }
}
