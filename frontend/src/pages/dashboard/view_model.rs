use super::repository::DashboardRepository;
use super::types::{DailySnapshot, UserDetail};
use crate::api::{ApiClient, ApiError, UserDayStatus};
use crate::components::messages::MessageState;
use chrono::{NaiveDate, Utc};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub selected_date: RwSignal<NaiveDate>,
    pub snapshot: Resource<NaiveDate, Result<DailySnapshot, ApiError>>,
    pub detail: RwSignal<Option<UserDetail>>,
    pub detail_action: Action<UserDayStatus, Result<UserDetail, ApiError>>,
    pub message: RwSignal<MessageState>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let client = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repo = DashboardRepository::new_with_client(client);

    let selected_date = create_rw_signal(Utc::now().date_naive());
    let snapshot = create_local_resource(move || selected_date.get(), {
        let repo = repo.clone();
        move |date| {
            let repo = repo.clone();
            async move { repo.fetch_snapshot(date).await }
        }
    });

    let detail = create_rw_signal(None::<UserDetail>);
    let message = create_rw_signal(MessageState::default());

    let detail_action = create_action(move |user: &UserDayStatus| {
        let repo = repo.clone();
        let user = user.clone();
        let date = selected_date.get_untracked();
        async move { repo.fetch_user_detail(user, date).await }
    });

    create_effect(move |_| {
        if let Some(result) = detail_action.value().get() {
            match result {
                Ok(loaded) => detail.set(Some(loaded)),
                Err(err) => message.update(|m| m.set_error(err)),
            }
        }
    });

    DashboardViewModel {
        selected_date,
        snapshot,
        detail,
        detail_action,
        message,
    }
}

impl DashboardViewModel {
    pub fn snapshot_or_default(&self) -> Signal<DailySnapshot> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot.get().and_then(Result::ok).unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().and_then(Result::err))
    }

    pub fn open_detail(&self, user: UserDayStatus) {
        if self.detail_action.pending().get_untracked() {
            return;
        }
        self.detail_action.dispatch(user);
    }

    pub fn close_detail(&self) {
        self.detail.set(None);
    }

    pub fn set_date(&self, raw: &str) {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            self.selected_date.set(date);
            self.detail.set(None);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::date;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn dashboard_defaults_to_today_with_no_detail_open() {
        with_runtime(|| {
            let vm = use_dashboard_view_model();
            assert_eq!(vm.selected_date.get(), Utc::now().date_naive());
            assert!(vm.detail.get().is_none());
            assert_eq!(vm.snapshot_or_default().get(), DailySnapshot::default());
        });
    }

    #[test]
    fn picking_a_date_closes_the_open_detail() {
        with_runtime(|| {
            let vm = use_dashboard_view_model();
            vm.detail.set(Some(UserDetail {
                user: UserDayStatus {
                    user_id: 1,
                    firstname: "Ali".into(),
                    lastname: "Saidi".into(),
                    status: "present".into(),
                    availability: "available".into(),
                    time_worked: "06:45".into(),
                },
                rows: Vec::new(),
                monthly_time: "90:00".into(),
            }));

            vm.set_date("2024-06-10");
            assert_eq!(vm.selected_date.get(), date(2024, 6, 10));
            assert!(vm.detail.get().is_none());

            vm.set_date("pas-une-date");
            assert_eq!(vm.selected_date.get(), date(2024, 6, 10));
        });
    }
}
