use leptos::*;

/// Numbered pager, 1-based. Renders nothing at all for an empty
/// collection (zero pages).
#[component]
pub fn PageControls(
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] current_page: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let has_pages = move || page_count.get() > 0;
    view! {
        <Show when=has_pages fallback=|| ()>
            <nav aria-label="pagination">
                <ul class="pagination">
                    {move || {
                        (1..=page_count.get())
                            .map(|number| {
                                let class = if number == current_page.get() {
                                    "page-item active"
                                } else {
                                    "page-item"
                                };
                                view! {
                                    <li class=class>
                                        <button
                                            type="button"
                                            class="page-link"
                                            on:click=move |_| on_select.call(number)
                                        >
                                            {number}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </nav>
        </Show>
    }
}
