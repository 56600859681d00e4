//! Single post view with owner-only edit and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AuthContext;
use crate::components::redirect::use_redirect;
use crate::error::ApiError;
use crate::net::api::BlogApi;
use crate::pages::{Banner, confirm, parse_id};
use crate::session::guard::can_modify;
use crate::state::blogs::BlogDetailState;
use crate::state::editor::submit_delete;
use crate::util::format::format_date;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let redirect = use_redirect();
    let detail = RwSignal::new(BlogDetailState::default());
    let deleting = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = parse_id(params.with(|p| p.get("id")).as_deref());
        let Some(ticket) = detail.try_update(BlogDetailState::begin) else {
            return;
        };
        let Some(id) = id else {
            detail.update(|d| {
                d.apply(ticket, Err(ApiError::NotFound(String::new())));
            });
            return;
        };
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            let result = controller.api().get_blog(id).await;
            detail.update(|d| {
                d.apply(ticket, result);
            });
        });
    });
    on_cleanup(move || detail.update(BlogDetailState::abandon));

    let is_owner = move || {
        let session = auth.session();
        detail.with(|d| d.blog.as_ref().is_some_and(|b| can_modify(&session, b)))
    };

    let on_delete = move |_| {
        if deleting.get() {
            return;
        }
        let Some(blog) = detail.get_untracked().blog else {
            return;
        };
        if !confirm("Are you sure you want to delete this blog post?") {
            return;
        }
        deleting.set(true);
        delete_error.set(None);
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            match submit_delete(&controller, &blog).await {
                Ok(()) => redirect.set(Some("/my-blogs".to_owned())),
                Err(err) => {
                    leptos::logging::warn!("delete failed: {err}");
                    delete_error.set(Some(err.to_string()));
                }
            }
            deleting.set(false);
        });
    };

    let load_error = Signal::derive(move || detail.with(|d| d.error.clone()));

    view! {
        <div class="page blog-detail">
            <Show when=move || detail.with(|d| d.loading)>
                <p class="page__loading">"Loading..."</p>
            </Show>
            <Banner message=load_error/>
            {move || {
                detail
                    .get()
                    .blog
                    .map(|blog| {
                        let edit_href = format!("/edit/{}", blog.id);
                        let created = format_date(&blog.created_at);
                        let updated = blog.was_updated().then(|| format_date(&blog.updated_at));
                        let author = blog.author.map(|name| view! { <span class="blog-detail__author">{name}</span> });
                        view! {
                            <article class="blog-detail__post">
                                <header class="blog-detail__header">
                                    <a class="blog-detail__back" href="/">"← Back to Home"</a>
                                    <Show when=is_owner>
                                        <div class="blog-detail__actions">
                                            <a class="btn" href=edit_href.clone()>"Edit"</a>
                                            <button
                                                class="btn btn--danger"
                                                on:click=on_delete
                                                disabled=move || deleting.get()
                                            >
                                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                            </button>
                                        </div>
                                    </Show>
                                </header>
                                <Banner message=delete_error/>
                                <h1 class="blog-detail__title">{blog.title}</h1>
                                <div class="blog-detail__meta">
                                    {author}
                                    <span>{created}</span>
                                    {updated.map(|date| view! { <span>{format!("Updated {date}")}</span> })}
                                </div>
                                <div class="blog-detail__content">{blog.content}</div>
                            </article>
                        }
                    })
            }}
        </div>
    }
}
