//! Previous/next pagination controls for post lists.

use leptos::prelude::*;

use crate::state::blogs::BlogListState;

/// Shown only when the list spans more than one page.
#[component]
pub fn Pager(list: RwSignal<BlogListState>, on_page: Callback<u32>) -> impl IntoView {
    let go_prev = move |_| {
        if let Some(page) = list.get_untracked().prev_page() {
            on_page.run(page);
        }
    };
    let go_next = move |_| {
        if let Some(page) = list.get_untracked().next_page() {
            on_page.run(page);
        }
    };

    view! {
        <Show when=move || list.with(BlogListState::show_pager)>
            <div class="pager">
                <button
                    class="btn pager__prev"
                    on:click=go_prev
                    disabled=move || list.with(|l| !l.pagination.has_prev)
                >
                    "Previous"
                </button>
                <span class="pager__status">
                    {move || list.with(|l| format!("Page {} of {}", l.pagination.page, l.pagination.pages))}
                </span>
                <button
                    class="btn pager__next"
                    on:click=go_next
                    disabled=move || list.with(|l| !l.pagination.has_next)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
