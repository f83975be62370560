use chrono::NaiveDate;

use crate::api::{CongeDemande, DemandeKind, DemandeStatus, RemoteDemande};

/// Per-screen wiring for the two demande families. The congé and
/// télétravail screens render the same panel; only the kind, heading
/// and page size differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandesScreenConfig {
    pub kind: DemandeKind,
    pub title: &'static str,
    pub page_size: usize,
}

impl DemandesScreenConfig {
    pub fn conges() -> Self {
        Self {
            kind: DemandeKind::Conge,
            title: "Demandes de congé",
            page_size: 4,
        }
    }

    pub fn teletravail() -> Self {
        Self {
            kind: DemandeKind::Remote,
            title: "Demandes de télétravail",
            page_size: 5,
        }
    }
}

/// A demande of either family flattened for the table. `date` is the
/// field the date filter matches against (start date for congés, the
/// requested day for télétravail).
#[derive(Debug, Clone, PartialEq)]
pub struct DemandeRow {
    pub id: i64,
    pub kind: DemandeKind,
    pub requester: String,
    pub cin: String,
    pub period: String,
    pub category: String,
    pub description: String,
    pub solde: Option<f64>,
    pub balance: Option<f64>,
    pub date: NaiveDate,
    pub status: DemandeStatus,
    pub refuse_reason: Option<String>,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

impl DemandeRow {
    pub fn from_conge(demande: CongeDemande) -> Self {
        Self {
            id: demande.id,
            kind: DemandeKind::Conge,
            requester: demande.user.full_name(),
            cin: demande.user.cin.clone(),
            period: format!(
                "Du {} au {}",
                format_date(demande.date_d),
                format_date(demande.date_f)
            ),
            category: demande.motif.motif_name,
            description: demande.description,
            solde: Some(demande.solde),
            balance: demande.user.solde_congee,
            date: demande.date_d,
            status: demande.status,
            refuse_reason: demande.refuse_reason,
        }
    }

    pub fn from_remote(demande: RemoteDemande) -> Self {
        Self {
            id: demande.id,
            kind: DemandeKind::Remote,
            requester: demande.user.full_name(),
            cin: demande.user.cin.clone(),
            period: format_date(demande.date),
            category: "Télétravail".to_string(),
            description: demande.reason,
            solde: None,
            balance: None,
            date: demande.date,
            status: demande.status,
            refuse_reason: demande.refuse_reason,
        }
    }
}

/// Applies both filters in fetch order; pagination happens afterwards
/// on the filtered list.
pub fn filter_rows(
    rows: &[DemandeRow],
    status: Option<DemandeStatus>,
    date: Option<NaiveDate>,
) -> Vec<DemandeRow> {
    rows.iter()
        .filter(|row| status.map_or(true, |wanted| row.status == wanted))
        .filter(|row| date.map_or(true, |wanted| row.date == wanted))
        .cloned()
        .collect()
}
