use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository as login_repository,
    state::session,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Process-wide session state, provided once at the composition root.
/// The token itself lives in the session store; this mirrors its
/// presence for reactive consumers (guards, header).
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    create_signal(AuthState {
        is_authenticated: session::is_authenticated(),
        loading: false,
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&request).await {
        Ok(_) => {
            set_auth_state.update(|state| {
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            log::error!("login failed: {}", error.error);
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Logout is purely local: drop the token, flip the state. The gateway
/// keeps no server-side session to end.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    session::clear();
    set_auth_state.update(|state| {
        state.is_authenticated = false;
        state.loading = false;
    });
    redirect_to_login();
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    Callback::new(move |_| logout(set_auth))
}
