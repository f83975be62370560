use std::rc::Rc;

use super::types::DemandeRow;
use crate::api::{ApiClient, ApiError, DemandeKind};

/// Gateway access for one demande family. Rows come back flattened and
/// in fetch order; display-order reversal is a pagination concern.
#[derive(Clone)]
pub struct DemandesRepository {
    client: Rc<ApiClient>,
    kind: DemandeKind,
}

impl DemandesRepository {
    pub fn new(kind: DemandeKind) -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()), kind)
    }

    pub fn new_with_client(client: Rc<ApiClient>, kind: DemandeKind) -> Self {
        Self { client, kind }
    }

    pub async fn fetch_rows(&self) -> Result<Vec<DemandeRow>, ApiError> {
        match self.kind {
            DemandeKind::Conge => Ok(self
                .client
                .list_conge_demandes()
                .await?
                .into_iter()
                .map(DemandeRow::from_conge)
                .collect()),
            DemandeKind::Remote => Ok(self
                .client
                .list_remote_demandes()
                .await?
                .into_iter()
                .map(DemandeRow::from_remote)
                .collect()),
        }
    }

    pub async fn accept(&self, id: i64) -> Result<(), ApiError> {
        self.client.accept_demande(self.kind, id).await
    }

    pub async fn refuse(&self, id: i64, reason: &str) -> Result<(), ApiError> {
        self.client.refuse_demande(self.kind, id, reason).await
    }
}
