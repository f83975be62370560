use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error shape shared by every gateway call. Non-success responses are
/// parsed into this when the body allows it; client-side failures use
/// the constructor helpers below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn missing_session() -> Self {
        Self {
            error: "Session expirée. Veuillez vous reconnecter.".to_string(),
            code: "MISSING_SESSION".to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    #[default]
    #[serde(alias = "on-site", alias = "on_site")]
    Onsite,
    #[serde(alias = "télétravail")]
    Remote,
}

impl WorkMode {
    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Onsite => "Sur site",
            WorkMode::Remote => "À distance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub cin: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub adresse: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub workmode: WorkMode,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Fields sent on both user creation and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub cin: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub tel: String,
    pub adresse: String,
    pub genre: String,
    pub workmode: WorkMode,
}

/// Employee reference embedded in demande rows. The gateway inlines a
/// partial user record, including the remaining leave balance under
/// its historical accented key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub cin: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default, rename = "soldecongée")]
    pub solde_congee: Option<f64>,
}

impl UserRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Unified demande status. The gateway uses two wire vocabularies
/// (French verbs on the congé endpoints, English adjectives on the
/// remote-work ones); deserialization accepts both, outbound updates
/// pick the right one per endpoint (see `DemandeKind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandeStatus {
    #[serde(rename = "en_cours", alias = "pending", alias = "en cours")]
    Pending,
    #[serde(rename = "accepter", alias = "accepted")]
    Accepted,
    #[serde(rename = "refuser", alias = "refused")]
    Refused,
}

impl DemandeStatus {
    pub fn is_pending(self) -> bool {
        self == DemandeStatus::Pending
    }

    pub fn is_refused(self) -> bool {
        self == DemandeStatus::Refused
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandeStatus::Pending => "En cours",
            DemandeStatus::Accepted => "Acceptée",
            DemandeStatus::Refused => "Refusée",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotifRef {
    #[serde(default)]
    pub motif_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongeDemande {
    pub id: i64,
    #[serde(default)]
    pub user: UserRef,
    pub date_d: NaiveDate,
    pub date_f: NaiveDate,
    #[serde(default)]
    pub motif: MotifRef,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub solde: f64,
    pub status: DemandeStatus,
    #[serde(default)]
    pub refuse_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDemande {
    pub id: i64,
    #[serde(default)]
    pub user: UserRef,
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    pub status: DemandeStatus,
    #[serde(default)]
    pub refuse_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motif {
    pub id: i64,
    pub motif_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifPayload {
    pub motif_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub holiday_date: NaiveDate,
    pub holiday_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPayload {
    pub holiday_date: NaiveDate,
    pub holiday_name: String,
}

/// One row of the daily attendance snapshot. `status` and
/// `availability` come over the wire as strings; the predicates give
/// the boolean reading the dashboard works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDayStatus {
    pub user_id: i64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub time_worked: String,
}

impl UserDayStatus {
    pub fn is_present(&self) -> bool {
        self.status == "present"
    }

    pub fn is_available(&self) -> bool {
        self.availability == "available"
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPointings {
    pub user_id: i64,
    #[serde(default)]
    pub entre: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub sortie: Vec<DateTime<Utc>>,
}
