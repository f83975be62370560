use reqwest::Method;

use crate::{
    api::{
        client::ApiClient,
        types::{ApiError, LoginRequest, LoginResponse},
    },
    state::session,
};

impl ApiClient {
    /// Authenticates the administrator and stores the returned bearer
    /// token as the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/api/admin/login")
            .await
            .json(request);
        let response = self.execute(builder).await?;
        let login: LoginResponse = Self::map_json_response(response).await?;
        session::store_token(&login.access_token).map_err(ApiError::unknown)?;
        Ok(login)
    }
}
