use leptos::*;

pub mod repository;
pub mod types;
pub mod view_model;

mod panel;

pub use panel::DashboardPanel;

use crate::components::layout::Layout;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <DashboardPanel/>
        </Layout>
    }
}
