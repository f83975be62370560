use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::MotifsPanel;

use crate::components::layout::Layout;

#[component]
pub fn MotifsPage() -> impl IntoView {
    view! {
        <Layout>
            <MotifsPanel/>
        </Layout>
    }
}
