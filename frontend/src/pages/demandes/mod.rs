use leptos::*;

pub mod repository;
pub mod types;
pub mod view_model;

mod panel;

pub use panel::DemandesPanel;
pub use types::{DemandeRow, DemandesScreenConfig};

use crate::components::layout::Layout;

#[component]
pub fn CongesPage() -> impl IntoView {
    view! {
        <Layout>
            <DemandesPanel config=DemandesScreenConfig::conges()/>
        </Layout>
    }
}

#[component]
pub fn TeletravailPage() -> impl IntoView {
    view! {
        <Layout>
            <DemandesPanel config=DemandesScreenConfig::teletravail()/>
        </Layout>
    }
}
