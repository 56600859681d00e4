//! The signed-in user's own posts, with per-row edit and delete.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::blog_card::BlogCard;
use crate::components::pager::Pager;
use crate::config::ClientConfig;
use crate::net::types::Blog;
use crate::pages::{Banner, confirm};
use crate::state::blogs::{BlogListState, load_my_blogs};
use crate::state::editor::submit_delete;
use crate::util::format::MY_BLOGS_EXCERPT_CHARS;

#[component]
pub fn MyBlogsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let per_page = expect_context::<ClientConfig>().page_size;
    let list = RwSignal::new(BlogListState::default());
    let page = RwSignal::new(1_u32);
    let reload = RwSignal::new(0_u32);
    let action_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        reload.track();
        let requested = page.get();
        let Some(ticket) = list.try_update(|s| s.begin(requested)) else {
            return;
        };
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            let result = load_my_blogs(&controller, requested, per_page).await;
            if let Err(err) = &result {
                leptos::logging::warn!("my blogs load failed: {err}");
            }
            list.update(|s| {
                s.apply(ticket, result);
            });
        });
    });

    let on_page = Callback::new(move |next: u32| page.set(next));
    let on_delete = Callback::new(move |blog: Blog| {
        if !confirm(&format!("Are you sure you want to delete \"{}\"?", blog.title)) {
            return;
        }
        action_error.set(None);
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            match submit_delete(&controller, &blog).await {
                Ok(()) => {
                    if let Some(target) = list.try_update(|s| s.remove(blog.id)) {
                        page.set(target);
                        reload.update(|n| *n = n.wrapping_add(1));
                    }
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
        });
    });

    let load_error = Signal::derive(move || list.with(|s| s.error.clone()));
    let is_empty = move || list.with(|s| !s.loading && s.error.is_none() && s.blogs.is_empty());

    view! {
        <div class="page my-blogs-page">
            <header class="page__header">
                <h1>"My Blog Posts"</h1>
                <a class="btn btn--primary" href="/create">"Create New Blog"</a>
            </header>
            <Banner message=load_error/>
            <Banner message=action_error/>
            <Show when=move || list.with(|s| s.loading)>
                <p class="page__loading">"Loading..."</p>
            </Show>
            <Show when=is_empty>
                <div class="page__empty">
                    <p>"You haven't written any blog posts yet."</p>
                    <a class="btn btn--primary" href="/create">"Write Your First Blog"</a>
                </div>
            </Show>
            <div class="blog-list">
                <For
                    each=move || list.with(|s| s.blogs.clone())
                    key=|blog| blog.id
                    children=move |blog| {
                        view! { <BlogCard blog excerpt_chars=MY_BLOGS_EXCERPT_CHARS on_delete/> }
                    }
                />
            </div>
            <Pager list on_page/>
        </div>
    }
}
