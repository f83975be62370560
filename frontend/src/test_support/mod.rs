#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use chrono::NaiveDate;
    use leptos::*;

    use crate::api::{
        CongeDemande, DemandeStatus, MotifRef, RemoteDemande, User, UserRef, WorkMode,
    };
    use crate::state::auth::AuthState;

    pub fn provide_auth(is_authenticated: bool) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub fn sample_user(id: i64) -> User {
        User {
            id,
            cin: format!("{:08}", id),
            firstname: "Ali".into(),
            lastname: format!("Saidi-{id}"),
            email: format!("ali{id}@rh.tn"),
            tel: "98123456".into(),
            adresse: "Tunis".into(),
            genre: "men".into(),
            workmode: WorkMode::Onsite,
        }
    }

    pub fn conge_demande(id: i64, status: DemandeStatus) -> CongeDemande {
        CongeDemande {
            id,
            user: UserRef {
                id: Some(id),
                cin: format!("{:08}", id),
                firstname: "Ali".into(),
                lastname: "Saidi".into(),
                solde_congee: Some(10.0),
            },
            date_d: date(2024, 5, 1),
            date_f: date(2024, 5, 3),
            motif: MotifRef {
                motif_name: "Congé annuel".into(),
            },
            description: "Vacances".into(),
            solde: 3.0,
            status,
            refuse_reason: if status.is_refused() {
                Some("Effectif insuffisant".into())
            } else {
                None
            },
        }
    }

    pub fn remote_demande(id: i64, status: DemandeStatus) -> RemoteDemande {
        RemoteDemande {
            id,
            user: UserRef {
                id: Some(id),
                cin: format!("{:08}", id),
                firstname: "Mouna".into(),
                lastname: "Khelifi".into(),
                solde_congee: None,
            },
            date: date(2024, 6, 10),
            reason: "Travaux à domicile".into(),
            status,
            refuse_reason: if status.is_refused() {
                Some("Présence requise".into())
            } else {
                None
            },
        }
    }
}
