use std::rc::Rc;

use crate::api::{ApiClient, ApiError, User, UserPayload};

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_users().await
    }

    pub async fn create(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.client.create_user(payload).await
    }

    pub async fn update(&self, id: i64, payload: &UserPayload) -> Result<User, ApiError> {
        self.client.update_user(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}

impl Default for UsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, DELETE, PUT};
    use crate::api::WorkMode;
    use crate::state::session;

    #[tokio::test]
    async fn update_then_delete_round_trip() {
        session::store_token("t").unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/api/admin/updateuser/4");
            then.status(200).json_body(serde_json::json!({
                "user": {"id": 4, "cin": "12345678", "firstname": "Sana", "lastname": "Gharbi"}
            }));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/admin/deleteuser/4");
            then.status(200).json_body(serde_json::json!({}));
        });

        let repo = UsersRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let payload = UserPayload {
            cin: "12345678".into(),
            firstname: "Sana".into(),
            lastname: "Gharbi".into(),
            email: "sana@rh.tn".into(),
            tel: "98765432".into(),
            adresse: "Tunis".into(),
            genre: "women".into(),
            workmode: WorkMode::Remote,
        };
        let user = repo.update(4, &payload).await.unwrap();
        assert_eq!(user.id, 4);
        repo.delete(4).await.unwrap();
        session::clear();
    }
}
