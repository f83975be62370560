use super::view_model::{use_motifs_view_model, MotifModal, MotifsViewModel};
use crate::api::Motif;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::messages::{LoadingSpinner, MessageBanner};
use leptos::*;

#[component]
fn MotifFormModal(vm: MotifsViewModel) -> impl IntoView {
    let open = Signal::derive(move || vm.modal.get().is_some());
    let busy = vm.busy();
    let title = move || match vm.modal.get() {
        Some(MotifModal::Edit(_)) => "Modifier le motif",
        _ => "Ajouter un motif",
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title}</h5>
                        </div>
                        <div class="modal-body">
                            <label class="form-label" for="motif-name">"Nom du motif"</label>
                            <input
                                id="motif-name"
                                type="text"
                                class="form-control"
                                prop:value=move || vm.name.get()
                                on:input=move |ev| vm.name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| vm.close_modal()
                            >
                                "Fermer"
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=move || busy.get()
                                on:click=move |_| vm.submit()
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
fn MotifTableRow(vm: MotifsViewModel, motif: Motif) -> impl IntoView {
    let motif = store_value(motif);
    view! {
        <tr>
            <td>{motif.with_value(|m| m.motif_name.clone())}</td>
            <td>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary me-1"
                    on:click=move |_| motif.with_value(|m| vm.open_edit(m))
                >
                    "Modifier"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger"
                    on:click=move |_| vm.request_delete(motif.get_value())
                >
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn MotifsPanel() -> impl IntoView {
    let vm = use_motifs_view_model();
    let load_error = vm.load_error();
    let loading = vm.loading();
    let delete_open = Signal::derive(move || vm.delete_target.get().is_some());

    view! {
        <div>
            <h2 class="mb-3">"Motifs de congé"</h2>
            <MessageBanner state=vm.message/>
            <Show when=move || load_error.get().is_some() fallback=|| ()>
                <div class="alert alert-danger" role="alert">
                    {move || load_error.get().map(|e| e.error).unwrap_or_default()}
                </div>
            </Show>
            <div class="d-flex justify-content-end mb-3">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| vm.open_create()
                >
                    "Ajouter"
                </button>
            </div>
            <Show when=move || loading.get() fallback=|| ()>
                <LoadingSpinner/>
            </Show>
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Motif"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        vm.motifs
                            .get()
                            .into_iter()
                            .map(|motif| view! { <MotifTableRow vm=vm motif=motif/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <MotifFormModal vm=vm/>
            <ConfirmDialog
                open=delete_open
                title="Êtes-vous sûr(e) ?".to_string()
                message="Vous ne pourrez pas récupérer ce motif !".to_string()
                confirm_label="Oui, supprimer"
                cancel_label="Non, annuler"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
