use super::repository::DemandesRepository;
use super::types::{filter_rows, DemandeRow, DemandesScreenConfig};
use crate::api::{ApiClient, ApiError};
use crate::components::messages::MessageState;
use crate::utils::pagination;
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DemandesViewModel {
    pub config: DemandesScreenConfig,
    pub rows: Resource<u32, Result<Vec<DemandeRow>, ApiError>>,
    pub status_filter: RwSignal<Option<crate::api::DemandeStatus>>,
    pub date_filter: RwSignal<Option<NaiveDate>>,
    pub page: RwSignal<usize>,
    pub message: RwSignal<MessageState>,
    pub refuse_target: RwSignal<Option<DemandeRow>>,
    pub refuse_reason: RwSignal<String>,
    pub reason_view: RwSignal<Option<DemandeRow>>,
    pub accept_action: Action<DemandeRow, Result<(), ApiError>>,
    pub refuse_action: Action<(DemandeRow, String), Result<(), ApiError>>,
}

fn apply_decision(
    result: Result<(), ApiError>,
    success: &str,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            message.update(|m| m.set_success(success));
            reload.update(|n| *n += 1);
        }
        Err(err) => message.update(|m| m.set_error(err)),
    }
}

pub fn use_demandes_view_model(config: DemandesScreenConfig) -> DemandesViewModel {
    let client = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repo = DemandesRepository::new_with_client(client, config.kind);

    let reload = create_rw_signal(0u32);
    let rows = create_local_resource(move || reload.get(), {
        let repo = repo.clone();
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_rows().await }
        }
    });

    let status_filter = create_rw_signal(None::<crate::api::DemandeStatus>);
    let date_filter = create_rw_signal(None::<NaiveDate>);
    let page = create_rw_signal(1usize);
    let message = create_rw_signal(MessageState::default());
    let refuse_target = create_rw_signal(None::<DemandeRow>);
    let refuse_reason = create_rw_signal(String::new());
    let reason_view = create_rw_signal(None::<DemandeRow>);

    let accept_action = create_action({
        let repo = repo.clone();
        move |row: &DemandeRow| {
            let repo = repo.clone();
            let id = row.id;
            async move { repo.accept(id).await }
        }
    });

    let refuse_action = create_action(move |input: &(DemandeRow, String)| {
        let repo = repo.clone();
        let (row, reason) = input.clone();
        async move { repo.refuse(row.id, &reason).await }
    });

    // changing a filter always lands the user back on page 1
    create_effect(move |_| {
        let _ = status_filter.get();
        let _ = date_filter.get();
        page.set(1);
    });

    create_effect(move |_| {
        if let Some(result) = accept_action.value().get() {
            apply_decision(result, "Demande acceptée.", message, reload);
        }
    });

    create_effect(move |_| {
        if let Some(result) = refuse_action.value().get() {
            if result.is_ok() {
                refuse_target.set(None);
                refuse_reason.set(String::new());
            }
            apply_decision(result, "Demande refusée.", message, reload);
        }
    });

    DemandesViewModel {
        config,
        rows,
        status_filter,
        date_filter,
        page,
        message,
        refuse_target,
        refuse_reason,
        reason_view,
        accept_action,
        refuse_action,
    }
}

impl DemandesViewModel {
    pub fn filtered_rows(&self) -> Signal<Vec<DemandeRow>> {
        let vm = *self;
        Signal::derive(move || {
            let rows = vm.rows.get().and_then(Result::ok).unwrap_or_default();
            filter_rows(&rows, vm.status_filter.get(), vm.date_filter.get())
        })
    }

    pub fn page_count(&self) -> Signal<usize> {
        let filtered = self.filtered_rows();
        let page_size = self.config.page_size;
        Signal::derive(move || pagination::page_count(filtered.get().len(), page_size))
    }

    pub fn visible_rows(&self) -> Signal<Vec<DemandeRow>> {
        let filtered = self.filtered_rows();
        let page = self.page;
        let page_size = self.config.page_size;
        Signal::derive(move || pagination::visible_page(&filtered.get(), page_size, page.get()))
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let rows = self.rows;
        Signal::derive(move || rows.get().and_then(Result::err))
    }

    pub fn busy(&self) -> Signal<bool> {
        let accept = self.accept_action.pending();
        let refuse = self.refuse_action.pending();
        Signal::derive(move || accept.get() || refuse.get())
    }

    fn is_busy(&self) -> bool {
        self.accept_action.pending().get_untracked()
            || self.refuse_action.pending().get_untracked()
    }

    fn reject_settled(&self) {
        self.message.update(|m| {
            m.set_error(ApiError::validation("Cette demande a déjà été traitée."))
        });
    }

    pub fn on_accept(&self, row: DemandeRow) {
        if self.is_busy() {
            return;
        }
        if !row.status.is_pending() {
            self.reject_settled();
            return;
        }
        self.accept_action.dispatch(row);
    }

    pub fn open_refuse(&self, row: DemandeRow) {
        if !row.status.is_pending() {
            self.reject_settled();
            return;
        }
        self.refuse_reason.set(String::new());
        self.refuse_target.set(Some(row));
    }

    pub fn close_refuse(&self) {
        self.refuse_target.set(None);
        self.refuse_reason.set(String::new());
    }

    pub fn submit_refuse(&self) {
        if self.is_busy() {
            return;
        }
        let Some(row) = self.refuse_target.get_untracked() else {
            return;
        };
        let reason = self.refuse_reason.get_untracked();
        if reason.trim().is_empty() {
            self.message.update(|m| {
                m.set_error(ApiError::validation("Le motif de refus est obligatoire."))
            });
            return;
        }
        self.refuse_action.dispatch((row, reason));
    }

    pub fn open_reason(&self, row: DemandeRow) {
        self.reason_view.set(Some(row));
    }

    pub fn close_reason(&self) {
        self.reason_view.set(None);
    }
}
