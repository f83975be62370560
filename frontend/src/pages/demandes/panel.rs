use super::types::{DemandeRow, DemandesScreenConfig};
use super::view_model::{use_demandes_view_model, DemandesViewModel};
use crate::api::{DemandeKind, DemandeStatus};
use crate::components::messages::{LoadingSpinner, MessageBanner};
use crate::components::pagination::PageControls;
use chrono::NaiveDate;
use leptos::*;

fn status_from_select(value: &str) -> Option<DemandeStatus> {
    match value {
        "en_cours" => Some(DemandeStatus::Pending),
        "accepter" => Some(DemandeStatus::Accepted),
        "refuser" => Some(DemandeStatus::Refused),
        _ => None,
    }
}

#[component]
fn FilterBar(vm: DemandesViewModel) -> impl IntoView {
    view! {
        <div class="row g-2 mb-3">
            <div class="col-auto">
                <select
                    class="form-select"
                    on:change=move |ev| {
                        vm.status_filter.set(status_from_select(&event_target_value(&ev)))
                    }
                >
                    <option value="">"Tous les statuts"</option>
                    <option value="en_cours">"En cours"</option>
                    <option value="accepter">"Acceptée"</option>
                    <option value="refuser">"Refusée"</option>
                </select>
            </div>
            <div class="col-auto">
                <input
                    type="date"
                    class="form-control"
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        vm.date_filter
                            .set(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok());
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn DemandeTableRow(vm: DemandesViewModel, row: DemandeRow) -> impl IntoView {
    let row = store_value(row);
    let busy = vm.busy();
    let status = row.with_value(|r| r.status);
    let kind = row.with_value(|r| r.kind);

    let actions = move || {
        if status.is_pending() {
            view! {
                <button
                    type="button"
                    class="btn btn-sm btn-success me-1"
                    disabled=move || busy.get()
                    on:click=move |_| vm.on_accept(row.get_value())
                >
                    "Accepter"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-danger"
                    disabled=move || busy.get()
                    on:click=move |_| vm.open_refuse(row.get_value())
                >
                    "Refuser"
                </button>
            }
            .into_view()
        } else if status.is_refused() {
            view! {
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| vm.open_reason(row.get_value())
                >
                    "Voir motif"
                </button>
            }
            .into_view()
        } else {
            ().into_view()
        }
    };

    view! {
        <tr>
            <td>{row.with_value(|r| r.requester.clone())}</td>
            <td>{row.with_value(|r| r.cin.clone())}</td>
            {(kind == DemandeKind::Conge)
                .then(|| {
                    view! {
                        <td>
                            {row.with_value(|r| {
                                r.balance.map(|b| b.to_string()).unwrap_or_else(|| "-".into())
                            })}
                        </td>
                    }
                })}
            <td>{row.with_value(|r| r.period.clone())}</td>
            <td>{row.with_value(|r| r.category.clone())}</td>
            <td>{row.with_value(|r| r.description.clone())}</td>
            <td>
                {row.with_value(|r| r.solde.map(|s| s.to_string()).unwrap_or_else(|| "-".into()))}
            </td>
            <td>{status.label()}</td>
            <td>{actions}</td>
        </tr>
    }
}

#[component]
fn RefuseModal(vm: DemandesViewModel) -> impl IntoView {
    let open = Signal::derive(move || vm.refuse_target.get().is_some());
    let busy = vm.busy();

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Refuser la demande"</h5>
                        </div>
                        <div class="modal-body">
                            <label class="form-label" for="refuse-reason">
                                "Motif de refus"
                            </label>
                            <textarea
                                id="refuse-reason"
                                class="form-control"
                                rows="3"
                                prop:value=move || vm.refuse_reason.get()
                                on:input=move |ev| vm.refuse_reason.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| vm.close_refuse()
                            >
                                "Fermer"
                            </button>
                            <button
                                type="button"
                                class="btn btn-danger"
                                disabled=move || busy.get()
                                on:click=move |_| vm.submit_refuse()
                            >
                                "Enregistrer"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ReasonModal(vm: DemandesViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.reason_view.get().is_some() fallback=|| ()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Motif du refus"</h5>
                        </div>
                        <div class="modal-body">
                            <p>
                                {move || {
                                    vm.reason_view
                                        .get()
                                        .and_then(|row| row.refuse_reason)
                                        .unwrap_or_default()
                                }}
                            </p>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| vm.close_reason()
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
pub fn DemandesPanel(config: DemandesScreenConfig) -> impl IntoView {
    let vm = use_demandes_view_model(config);
    let visible = vm.visible_rows();
    let page_count = vm.page_count();
    let load_error = vm.load_error();
    let loading = vm.rows.loading();

    view! {
        <div>
            <h2 class="mb-3">{config.title}</h2>
            <MessageBanner state=vm.message/>
            <Show when=move || load_error.get().is_some() fallback=|| ()>
                <div class="alert alert-danger" role="alert">
                    {move || load_error.get().map(|e| e.error).unwrap_or_default()}
                </div>
            </Show>
            <FilterBar vm=vm/>
            <Show when=move || loading.get() fallback=|| ()>
                <LoadingSpinner/>
            </Show>
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Employé"</th>
                        <th>"CIN"</th>
                        {(config.kind == DemandeKind::Conge)
                            .then(|| view! { <th>"Solde congé"</th> })}
                        <th>"Dates"</th>
                        <th>"Motif"</th>
                        <th>"Description"</th>
                        <th>"Solde"</th>
                        <th>"Statut"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|row| view! { <DemandeTableRow vm=vm row=row/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <PageControls
                page_count=page_count
                current_page=vm.page
                on_select=Callback::new(move |number| vm.page.set(number))
            />
            <RefuseModal vm=vm/>
            <ReasonModal vm=vm/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn conge_panel_renders_heading_filters_and_columns() {
        let html =
            render_to_string(|| view! { <DemandesPanel config=DemandesScreenConfig::conges()/> });
        assert!(html.contains("Demandes de congé"));
        assert!(html.contains("Tous les statuts"));
        assert!(html.contains("Employé"));
        assert!(html.contains("Solde congé"));
        assert!(html.contains("Statut"));
    }

    #[test]
    fn teletravail_panel_uses_its_own_heading() {
        let html = render_to_string(
            || view! { <DemandesPanel config=DemandesScreenConfig::teletravail()/> },
        );
        assert!(html.contains("Demandes de télétravail"));
        assert!(!html.contains("Solde congé"));
    }

    #[test]
    fn conge_rows_carry_the_remaining_balance_cell() {
        use crate::test_support::helpers::{conge_demande, remote_demande};

        let conge_html = render_to_string(|| {
            let vm = use_demandes_view_model(DemandesScreenConfig::conges());
            let mut row = DemandeRow::from_conge(conge_demande(1, DemandeStatus::Pending));
            row.balance = Some(42.5);
            view! {
                <table>
                    <tbody>
                        <DemandeTableRow vm=vm row=row/>
                    </tbody>
                </table>
            }
        });
        assert!(conge_html.contains("42.5"));

        let remote_html = render_to_string(|| {
            let vm = use_demandes_view_model(DemandesScreenConfig::teletravail());
            let row = DemandeRow::from_remote(remote_demande(1, DemandeStatus::Pending));
            view! {
                <table>
                    <tbody>
                        <DemandeTableRow vm=vm row=row/>
                    </tbody>
                </table>
            }
        });
        assert_eq!(remote_html.matches("<td").count(), 8);
    }

    #[test]
    fn settled_rows_expose_no_decision_controls() {
        use crate::test_support::helpers::{conge_demande, remote_demande};

        let html = render_to_string(|| {
            let vm = use_demandes_view_model(DemandesScreenConfig::conges());
            let accepted = DemandeRow::from_conge(conge_demande(1, DemandeStatus::Accepted));
            let refused = DemandeRow::from_remote(remote_demande(2, DemandeStatus::Refused));
            view! {
                <table>
                    <tbody>
                        <DemandeTableRow vm=vm row=accepted/>
                        <DemandeTableRow vm=vm row=refused/>
                    </tbody>
                </table>
            }
        });
        assert!(!html.contains("Accepter"));
        assert!(!html.contains("Refuser"));
        assert!(html.contains("Voir motif"));
    }

    #[test]
    fn pending_rows_offer_accept_and_refuse() {
        use crate::test_support::helpers::conge_demande;

        let html = render_to_string(|| {
            let vm = use_demandes_view_model(DemandesScreenConfig::conges());
            let pending = DemandeRow::from_conge(conge_demande(1, DemandeStatus::Pending));
            view! {
                <table>
                    <tbody>
                        <DemandeTableRow vm=vm row=pending/>
                    </tbody>
                </table>
            }
        });
        assert!(html.contains("Accepter"));
        assert!(html.contains("Refuser"));
        assert!(!html.contains("Voir motif"));
    }

    #[test]
    fn status_select_values_map_to_wire_statuses() {
        assert_eq!(status_from_select("en_cours"), Some(DemandeStatus::Pending));
        assert_eq!(
            status_from_select("accepter"),
            Some(DemandeStatus::Accepted)
        );
        assert_eq!(status_from_select("refuser"), Some(DemandeStatus::Refused));
        assert_eq!(status_from_select(""), None);
    }
}
