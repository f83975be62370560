use super::view_model::use_login_view_model;
use crate::components::messages::ErrorMessage;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let error_text = Signal::derive(move || vm.error.get().map(|err| err.error));

    view! {
        <div class="row justify-content-center mt-5">
            <div class="col-md-4">
                <div class="card shadow">
                    <div class="card-body">
                        <h4 class="card-title text-center mb-4">"Connexion"</h4>
                        <ErrorMessage message=error_text/>
                        <form on:submit=move |ev| {
                            ev.prevent_default();
                            vm.submit();
                        }>
                            <div class="mb-3">
                                <label class="form-label" for="login-email">"Email"</label>
                                <input
                                    id="login-email"
                                    type="email"
                                    class="form-control"
                                    prop:value=move || vm.email.get()
                                    on:input=move |ev| vm.email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="login-password">"Mot de passe"</label>
                                <input
                                    id="login-password"
                                    type="password"
                                    class="form-control"
                                    prop:value=move || vm.password.get()
                                    on:input=move |ev| vm.password.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="submit"
                                class="btn btn-primary w-100"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
