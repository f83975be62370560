pub mod dashboard;
pub mod demandes;
pub mod holidays;
pub mod login;
pub mod motifs;
pub mod users;
