use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session};

/// Thin authenticated wrapper over the REST gateway. Every data
/// operation in the app goes through here; the client itself holds no
/// state beyond the base URL override used by tests.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn bearer_token() -> Result<String, ApiError> {
        session::token().ok_or_else(ApiError::missing_session)
    }

    /// Unauthenticated request builder (login only).
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client.request(method, format!("{}{}", base_url, path))
    }

    /// Builder with the bearer header attached. Fails before any
    /// network traffic when no session token is stored.
    pub(crate) async fn authorized_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let token = Self::bearer_token()?;
        Ok(self.request(method, path).await.bearer_auth(token))
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {e}")))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock::find_responder(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("gateway request failed: {e}");
            ApiError::request_failed(format!("Request failed: {e}"))
        })
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            session::clear();
            redirect_to_login_if_needed();
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {e}")))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {status}")),
        }
    }
}

fn redirect_to_login_if_needed() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" || pathname == "/" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock::{register_mock, MockResponse, TestResponder};
