mod attendance;
mod auth;
mod client;
mod demandes;
mod holidays;
mod motifs;
pub mod test_support;
mod types;
mod users;


pub use client::ApiClient;
pub use demandes::DemandeKind;
pub use types::*;
