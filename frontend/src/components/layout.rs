use crate::state::auth::{use_auth, use_logout};
use leptos::*;

/// Shared chrome: brand, section nav, logout. The nav only shows once
/// a session exists.
#[component]
pub fn Header() -> impl IntoView {
    let (auth, _) = use_auth();
    let on_logout = use_logout();

    view! {
        <header class="navbar navbar-expand navbar-dark bg-dark px-3">
            <a class="navbar-brand" href="/dashboard">"RH_web"</a>
            <Show when=move || auth.get().is_authenticated fallback=|| ()>
                <nav class="navbar-nav me-auto">
                    <a class="nav-link" href="/dashboard">"Acceuil"</a>
                    <a class="nav-link" href="/users">"Utilisateurs"</a>
                    <a class="nav-link" href="/conges">"Congés"</a>
                    <a class="nav-link" href="/teletravail">"Télétravail"</a>
                    <a class="nav-link" href="/motifs">"Motifs"</a>
                    <a class="nav-link" href="/holidays">"Jours fériés"</a>
                </nav>
                <button
                    type="button"
                    class="btn btn-outline-light"
                    on:click=move |_| on_logout.call(())
                >
                    "Déconnecter"
                </button>
            </Show>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <Header/>
        <main class="container py-4">{children()}</main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_nav_for_an_authenticated_session() {
        let html = render_to_string(move || {
            provide_auth(true);
            view! { <Header/> }
        });
        assert!(html.contains("RH_web"));
        assert!(html.contains("Utilisateurs"));
        assert!(html.contains("Déconnecter"));
    }

    #[test]
    fn header_hides_nav_without_a_session() {
        let html = render_to_string(move || {
            provide_auth(false);
            view! { <Header/> }
        });
        assert!(html.contains("RH_web"));
        assert!(!html.contains("Déconnecter"));
    }

    #[test]
    fn layout_wraps_children_in_main() {
        let html = render_to_string(move || {
            provide_auth(true);
            view! { <Layout><p>"page-body"</p></Layout> }
        });
        assert!(html.contains("<main"));
        assert!(html.contains("page-body"));
    }
}
