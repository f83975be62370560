//! The one piece of durable client state: the bearer token.

use crate::utils::storage;

pub const TOKEN_KEY: &str = "auth_token";

pub fn token() -> Option<String> {
    storage::get_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) -> Result<(), String> {
    storage::set_item(TOKEN_KEY, token)
}

pub fn clear() {
    storage::remove_item(TOKEN_KEY);
}

pub fn is_authenticated() -> bool {
    token().is_some()
}
