use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::HolidaysPanel;

use crate::components::layout::Layout;

#[component]
pub fn HolidaysPage() -> impl IntoView {
    view! {
        <Layout>
            <HolidaysPanel/>
        </Layout>
    }
}
