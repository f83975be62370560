use super::types::PointingRow;
use super::view_model::{use_dashboard_view_model, DashboardViewModel};
use crate::api::UserDayStatus;
use crate::components::messages::{LoadingSpinner, MessageBanner};
use chrono::{DateTime, Utc};
use leptos::*;

fn format_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="col">
            <div class="card text-center">
                <div class="card-body">
                    <h6 class="card-subtitle text-muted">{label}</h6>
                    <p class="card-text fs-3">{move || value.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatusRow(vm: DashboardViewModel, row: UserDayStatus) -> impl IntoView {
    let row = store_value(row);
    let presence = row.with_value(|r| {
        if r.is_present() {
            ("Présent", "badge bg-success")
        } else {
            ("Absent", "badge bg-secondary")
        }
    });
    let availability = row.with_value(|r| {
        if r.is_available() {
            "Disponible"
        } else {
            "Indisponible"
        }
    });

    view! {
        <tr>
            <td>{row.with_value(|r| r.full_name())}</td>
            <td>
                <span class=presence.1>{presence.0}</span>
            </td>
            <td>{availability}</td>
            <td>{row.with_value(|r| r.time_worked.clone())}</td>
            <td>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| vm.open_detail(row.get_value())
                >
                    "Détails"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn DetailModal(vm: DashboardViewModel) -> impl IntoView {
    let open = Signal::derive(move || vm.detail.get().is_some());
    let rows = Signal::derive(move || {
        vm.detail
            .get()
            .map(|detail| detail.rows)
            .unwrap_or_default()
    });

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-lg">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">
                                {move || {
                                    vm.detail
                                        .get()
                                        .map(|detail| detail.user.full_name())
                                        .unwrap_or_default()
                                }}
                            </h5>
                        </div>
                        <div class="modal-body">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>"Entrée"</th>
                                        <th>"Sortie"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        rows.get()
                                            .into_iter()
                                            .map(|row: PointingRow| {
                                                view! {
                                                    <tr>
                                                        <td>{format_time(row.entre)}</td>
                                                        <td>{format_time(row.sortie)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                            <p class="mb-0">
                                <strong>"Total du mois : "</strong>
                                {move || {
                                    vm.detail
                                        .get()
                                        .map(|detail| detail.monthly_time)
                                        .unwrap_or_default()
                                }}
                            </p>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| vm.close_detail()
                            >
                                "Fermer"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let snapshot = vm.snapshot_or_default();
    let load_error = vm.load_error();
    let loading = vm.snapshot.loading();

    let total = Signal::derive(move || snapshot.get().total_users.to_string());
    let present = Signal::derive(move || snapshot.get().present_count.to_string());
    let absent = Signal::derive(move || snapshot.get().absent_count().to_string());
    let rate = Signal::derive(move || format!("{:.0}%", snapshot.get().present_percentage()));

    view! {
        <div>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="mb-0">"Tableau de bord"</h2>
                <input
                    type="date"
                    class="form-control w-auto"
                    prop:value=move || vm.selected_date.get().format("%Y-%m-%d").to_string()
                    on:change=move |ev| vm.set_date(&event_target_value(&ev))
                />
            </div>
            <MessageBanner state=vm.message/>
            <Show when=move || load_error.get().is_some() fallback=|| ()>
                <div class="alert alert-danger" role="alert">
                    {move || load_error.get().map(|e| e.error).unwrap_or_default()}
                </div>
            </Show>
            <div class="row row-cols-4 g-3 mb-4">
                <StatCard label="Total employés" value=total/>
                <StatCard label="Présents" value=present/>
                <StatCard label="Absents" value=absent/>
                <StatCard label="Taux de présence" value=rate/>
            </div>
            <Show when=move || loading.get() fallback=|| ()>
                <LoadingSpinner/>
            </Show>
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Employé"</th>
                        <th>"Présence"</th>
                        <th>"Disponibilité"</th>
                        <th>"Temps travaillé"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        snapshot
                            .get()
                            .per_user
                            .into_iter()
                            .map(|row| view! { <StatusRow vm=vm row=row/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <DetailModal vm=vm/>
        </div>
    }
}
