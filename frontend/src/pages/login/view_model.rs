use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

/// Client-side gate before the gateway is ever contacted.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation(
            "L'email et le mot de passe sont obligatoires.",
        ));
    }
    Ok(())
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    password.set(String::new());
                    #[cfg(target_arch = "wasm32")]
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest { email, password });
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_empty_and_idle() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.email.get().is_empty());
            assert!(vm.error.get().is_none());
            assert!(!vm.login_action.pending().get());
        });
    }

    #[test]
    fn submit_with_blank_form_surfaces_a_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let error = vm.error.get().unwrap();
            assert_eq!(error.code, "VALIDATION_ERROR");
        });
    }
}
