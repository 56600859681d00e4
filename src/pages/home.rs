//! Public landing page: every post, newest first, ten per page.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::blog_card::BlogCard;
use crate::components::pager::Pager;
use crate::config::ClientConfig;
use crate::net::api::BlogApi;
use crate::pages::Banner;
use crate::state::blogs::BlogListState;
use crate::util::format::HOME_EXCERPT_CHARS;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let per_page = expect_context::<ClientConfig>().page_size;
    let list = RwSignal::new(BlogListState::default());
    let page = RwSignal::new(1_u32);

    Effect::new(move || {
        let requested = page.get();
        let Some(ticket) = list.try_update(|s| s.begin(requested)) else {
            return;
        };
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            let result = controller.api().list_blogs(requested, per_page).await;
            if let Err(err) = &result {
                leptos::logging::warn!("blog list load failed: {err}");
            }
            list.update(|s| {
                s.apply(ticket, result);
            });
        });
    });

    let on_page = Callback::new(move |next: u32| page.set(next));
    let error = Signal::derive(move || list.with(|s| s.error.clone()));
    let is_empty = move || list.with(|s| !s.loading && s.error.is_none() && s.blogs.is_empty());

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Welcome to the Blog"</h1>
                <p>"Read what people are writing, or share your own thoughts."</p>
                <Show when=move || auth.session().is_authenticated()>
                    <a class="btn btn--primary" href="/create">"Write a post"</a>
                </Show>
            </section>
            <h2>"Latest Blog Posts"</h2>
            <Banner message=error/>
            <Show when=move || list.with(|s| s.loading)>
                <p class="page__loading">"Loading..."</p>
            </Show>
            <Show when=is_empty>
                <p class="page__empty">"No blog posts yet. Be the first to write one!"</p>
            </Show>
            <div class="blog-list">
                <For
                    each=move || list.with(|s| s.blogs.clone())
                    key=|blog| blog.id
                    children=move |blog| view! { <BlogCard blog excerpt_chars=HOME_EXCERPT_CHARS/> }
                />
            </div>
            <Pager list on_page/>
        </div>
    }
}
