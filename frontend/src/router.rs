use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::guard::RequireAuth;
use crate::pages::dashboard::DashboardPage;
use crate::pages::demandes::{CongesPage, TeletravailPage};
use crate::pages::holidays::HolidaysPage;
use crate::pages::login::LoginPage;
use crate::pages::motifs::MotifsPage;
use crate::pages::users::UsersPage;
use crate::state::auth::AuthProvider;

pub const ROUTE_PATHS: [&str; 8] = [
    "/",
    "/login",
    "/dashboard",
    "/users",
    "/conges",
    "/teletravail",
    "/motifs",
    "/holidays",
];

pub const PROTECTED_ROUTE_PATHS: [&str; 6] = [
    "/dashboard",
    "/users",
    "/conges",
    "/teletravail",
    "/motifs",
    "/holidays",
];

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <DashboardPage/> }}</RequireAuth> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <UsersPage/> }}</RequireAuth> }
}

#[component]
fn ProtectedConges() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <CongesPage/> }}</RequireAuth> }
}

#[component]
fn ProtectedTeletravail() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <TeletravailPage/> }}</RequireAuth> }
}

#[component]
fn ProtectedMotifs() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <MotifsPage/> }}</RequireAuth> }
}

#[component]
fn ProtectedHolidays() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <HolidaysPage/> }}</RequireAuth> }
}

/// Composition root: the gateway client and the session context wrap
/// every route.
#[component]
pub fn AppRoot() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());

    view! {
        <Title text="RH_web"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/users" view=ProtectedUsers/>
                    <Route path="/conges" view=ProtectedConges/>
                    <Route path="/teletravail" view=ProtectedTeletravail/>
                    <Route path="/motifs" view=ProtectedMotifs/>
                    <Route path="/holidays" view=ProtectedHolidays/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    leptos::mount_to_body(|| view! { <AppRoot/> });
}
