use reqwest::Method;
use serde::Deserialize;

use crate::api::{
    client::ApiClient,
    types::{ApiError, User, UserPayload},
};

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let builder = self
            .authorized_request(Method::GET, "/api/admin/users")
            .await?;
        let response = self.execute(builder).await?;
        let envelope: UsersEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.users)
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        let builder = self
            .authorized_request(Method::POST, "/api/admin/adduser")
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        let envelope: UserEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.user)
    }

    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<User, ApiError> {
        let builder = self
            .authorized_request(Method::PUT, &format!("/api/admin/updateuser/{id}"))
            .await?
            .json(payload);
        let response = self.execute(builder).await?;
        let envelope: UserEnvelope = Self::map_json_response(response).await?;
        Ok(envelope.user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let builder = self
            .authorized_request(Method::DELETE, &format!("/api/admin/deleteuser/{id}"))
            .await?;
        let response = self.execute(builder).await?;
        Self::map_empty_response(response).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use crate::api::test_support::mock::{MockServer, GET, POST};
    use crate::api::{ApiClient, UserPayload, WorkMode};
    use crate::state::session;

    fn payload() -> UserPayload {
        UserPayload {
            cin: "12345678".into(),
            firstname: "Sana".into(),
            lastname: "Gharbi".into(),
            email: "sana@rh.tn".into(),
            tel: "98765432".into(),
            adresse: "Tunis".into(),
            genre: "women".into(),
            workmode: WorkMode::Onsite,
        }
    }

    #[tokio::test]
    async fn list_users_unwraps_the_envelope() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/users");
            then.status(200).json_body(serde_json::json!({
                "users": [
                    {"id": 1, "cin": "11111111", "firstname": "Ali", "lastname": "Saidi"},
                    {"id": 2, "cin": "22222222", "firstname": "Mouna", "lastname": "Khelifi"}
                ]
            }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].full_name(), "Mouna Khelifi");
        session::clear();
    }

    #[tokio::test]
    async fn list_users_without_session_never_hits_the_network() {
        session::clear();
        let server = MockServer::start();
        let client = ApiClient::new_with_base_url(server.base_url());
        let error = client.list_users().await.unwrap_err();
        assert_eq!(error.code, "MISSING_SESSION");
    }

    #[tokio::test]
    async fn create_user_returns_the_confirmed_entity() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/adduser");
            then.status(201).json_body(serde_json::json!({
                "user": {"id": 9, "cin": "12345678", "firstname": "Sana", "lastname": "Gharbi"}
            }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let user = client.create_user(&payload()).await.unwrap();
        assert_eq!(user.id, 9);
        session::clear();
    }
}
