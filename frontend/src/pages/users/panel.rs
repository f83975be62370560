use super::utils::ValidationPolicy;
use super::view_model::{use_users_view_model, UserModal, UsersViewModel};
use crate::api::{User, WorkMode};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::messages::{LoadingSpinner, MessageBanner};
use crate::components::pagination::PageControls;
use leptos::*;

#[component]
fn UserFormModal(vm: UsersViewModel) -> impl IntoView {
    let open = Signal::derive(move || vm.modal.get().is_some());
    let busy = vm.busy();
    let title = move || match vm.modal.get() {
        Some(UserModal::Edit(_)) => "Modifier l'utilisateur",
        _ => "Ajouter un utilisateur",
    };

    let text_field = move |label: &'static str,
                           id: &'static str,
                           value: Signal<String>,
                           on_input: Callback<String>| {
        view! {
            <div class="mb-2">
                <label class="form-label" for=id>{label}</label>
                <input
                    id=id
                    type="text"
                    class="form-control"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
            </div>
        }
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
                            {text_field(
                                "CIN",
                                "user-cin",
                                Signal::derive(move || vm.form.get().cin),
                                Callback::new(move |v| vm.form.update(|f| f.cin = v)),
                            )}
                            {text_field(
                                "Prénom",
                                "user-firstname",
                                Signal::derive(move || vm.form.get().firstname),
                                Callback::new(move |v| vm.form.update(|f| f.firstname = v)),
                            )}
                            {text_field(
                                "Nom",
                                "user-lastname",
                                Signal::derive(move || vm.form.get().lastname),
                                Callback::new(move |v| vm.form.update(|f| f.lastname = v)),
                            )}
                            {text_field(
                                "Email",
                                "user-email",
                                Signal::derive(move || vm.form.get().email),
                                Callback::new(move |v| vm.form.update(|f| f.email = v)),
                            )}
                            {text_field(
                                "Téléphone",
                                "user-tel",
                                Signal::derive(move || vm.form.get().tel),
                                Callback::new(move |v| vm.form.update(|f| f.tel = v)),
                            )}
                            {text_field(
                                "Adresse",
                                "user-adresse",
                                Signal::derive(move || vm.form.get().adresse),
                                Callback::new(move |v| vm.form.update(|f| f.adresse = v)),
                            )}
                            <div class="mb-2">
                                <label class="form-label" for="user-genre">"Genre"</label>
                                <select
                                    id="user-genre"
                                    class="form-select"
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.genre = event_target_value(&ev))
                                    }
                                >
                                    <option
                                        value="men"
                                        selected=move || vm.form.get().genre == "men"
                                    >
                                        "Homme"
                                    </option>
                                    <option
                                        value="women"
                                        selected=move || vm.form.get().genre == "women"
                                    >
                                        "Femme"
                                    </option>
                                </select>
                            </div>
                            <div class="mb-2">
                                <label class="form-label" for="user-workmode">
                                    "Mode de travail"
                                </label>
                                <select
                                    id="user-workmode"
                                    class="form-select"
                                    on:change=move |ev| {
                                        let mode = if event_target_value(&ev) == "remote" {
                                            WorkMode::Remote
                                        } else {
                                            WorkMode::Onsite
                                        };
                                        vm.form.update(|f| f.workmode = mode);
                                    }
                                >
                                    <option
                                        value="onsite"
                                        selected=move || vm.form.get().workmode == WorkMode::Onsite
                                    >
                                        "Sur site"
                                    </option>
                                    <option
                                        value="remote"
                                        selected=move || vm.form.get().workmode == WorkMode::Remote
                                    >
                                        "À distance"
                                    </option>
                                </select>
                            </div>
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
fn UserTableRow(vm: UsersViewModel, user: User) -> impl IntoView {
    let user = store_value(user);
    view! {
        <tr>
            <td>{user.with_value(|u| u.cin.clone())}</td>
            <td>{user.with_value(|u| u.full_name())}</td>
            <td>{user.with_value(|u| u.email.clone())}</td>
            <td>{user.with_value(|u| u.tel.clone())}</td>
            <td>{user.with_value(|u| u.adresse.clone())}</td>
            <td>{user.with_value(|u| u.workmode.label())}</td>
            <td>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary me-1"
                    on:click=move |_| user.with_value(|u| vm.open_edit(u))
                >
                    "Modifier"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger"
                    on:click=move |_| vm.request_delete(user.get_value())
                >
                    "Supprimer"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn UsersPanel(policy: ValidationPolicy) -> impl IntoView {
    let vm = use_users_view_model(policy);
    let visible = vm.visible_users();
    let page_count = vm.page_count();
    let load_error = vm.load_error();
    let loading = vm.loading();
    let delete_open = Signal::derive(move || vm.delete_target.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|user| format!("Supprimer {} ?", user.full_name()))
            .unwrap_or_default()
    });

    view! {
        <div>
            <h2 class="mb-3">"Utilisateurs"</h2>
            <MessageBanner state=vm.message/>
            <Show when=move || load_error.get().is_some() fallback=|| ()>
                <div class="alert alert-danger" role="alert">
                    {move || load_error.get().map(|e| e.error).unwrap_or_default()}
                </div>
            </Show>
            <div class="d-flex justify-content-between mb-3">
                <input
                    type="search"
                    class="form-control w-auto"
                    placeholder="Rechercher..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
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
                        <th>"CIN"</th>
                        <th>"Nom"</th>
                        <th>"Email"</th>
                        <th>"Téléphone"</th>
                        <th>"Adresse"</th>
                        <th>"Mode de travail"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|user| view! { <UserTableRow vm=vm user=user/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <PageControls
                page_count=page_count
                current_page=vm.page
                on_select=Callback::new(move |number| vm.page.set(number))
            />
            <UserFormModal vm=vm/>
            <ConfirmDialog
                open=delete_open
                title="Êtes-vous sûr(e) ?".to_string()
                message=delete_message
                confirm_label="Oui, supprimer"
                cancel_label="Non, annuler"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn users_panel_renders_search_add_and_columns() {
        let html =
            render_to_string(|| view! { <UsersPanel policy=ValidationPolicy::Enforced/> });
        assert!(html.contains("Utilisateurs"));
        assert!(html.contains("Rechercher..."));
        assert!(html.contains("Ajouter"));
        assert!(html.contains("Mode de travail"));
    }
}
