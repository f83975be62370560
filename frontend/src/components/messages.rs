use crate::api::ApiError;
use leptos::*;

/// Per-screen feedback slot: at most one success or one error message
/// at a time, replaced on every action outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}

#[component]
pub fn MessageBanner(#[prop(into)] state: Signal<MessageState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().success.is_some() fallback=|| ()>
            <div class="alert alert-success" role="status">
                {move || state.get().success.unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || state.get().error.is_some() fallback=|| ()>
            <div class="alert alert-danger" role="alert">
                {move || state.get().error.map(|e| e.error).unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="alert alert-danger" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center my-4">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Chargement..."</span>
            </div>
        </div>
    }
}
