use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::UsersPanel;
pub use utils::ValidationPolicy;

use crate::components::layout::Layout;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <Layout>
            <UsersPanel policy=ValidationPolicy::Enforced/>
        </Layout>
    }
}
