use leptos::*;

/// Blocking confirmation step used before every delete. Nothing fires
/// until the user picks a side.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional)] destructive: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = store_value(title);
    let message = store_value(message);
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "Confirmer".to_string()));
    let cancel_label = store_value(cancel_label.unwrap_or_else(|| "Annuler".to_string()));
    let confirm_class = if destructive {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="modal d-block" role="dialog" aria-modal="true">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || title.get_value().get()}</h5>
                        </div>
                        <div class="modal-body">
                            <p>{move || message.get_value().get()}</p>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| on_cancel.call(())
                            >
                                {move || cancel_label.get_value()}
                            </button>
                            <button
                                type="button"
                                class=confirm_class
                                on:click=move |_| on_confirm.call(())
                            >
                                {move || confirm_label.get_value()}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_renders_title_and_labels_when_open() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    open=Signal::derive(|| true)
                    title="Êtes-vous sûr(e) ?".to_string()
                    message="Vous ne pourrez pas récupérer ce motif !".to_string()
                    confirm_label="Oui, supprimez-le !"
                    cancel_label="Non, annuler"
                    destructive=true
                    on_confirm=Callback::new(|_| ())
                    on_cancel=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Êtes-vous sûr(e) ?"));
        assert!(html.contains("Oui, supprimez-le !"));
        assert!(html.contains("btn-danger"));
    }

    #[test]
    fn dialog_renders_nothing_when_closed() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    open=Signal::derive(|| false)
                    title="Titre".to_string()
                    message="Message".to_string()
                    on_confirm=Callback::new(|_| ())
                    on_cancel=Callback::new(|_| ())
                />
            }
        });
        assert!(!html.contains("Titre"));
    }
}
