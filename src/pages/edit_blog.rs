//! Edit form for one of the viewer's own posts.
//!
//! Loads the post, then checks ownership before showing the form. A foreign
//! post sends the viewer home without ever offering the form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AuthContext;
use crate::components::blog_form::BlogForm;
use crate::components::redirect::use_redirect;
use crate::error::ApiError;
use crate::pages::{Banner, parse_id};
use crate::session::guard::HOME_PATH;
use crate::state::blogs::BlogDetailState;
use crate::state::editor::{EditorState, load_for_edit, submit_update};

#[component]
pub fn EditBlogPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let redirect = use_redirect();
    let detail = RwSignal::new(BlogDetailState::default());
    let editor = RwSignal::new(EditorState::default());

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
            let result = load_for_edit(&controller, id).await;
            match detail.try_update(|d| d.settle(ticket, result)).flatten() {
                Some(Ok(blog)) => editor.set(EditorState::from_blog(&blog)),
                Some(Err(ApiError::Forbidden(reason))) => {
                    leptos::logging::warn!("edit refused: {reason}");
                    redirect.set(Some(HOME_PATH.to_owned()));
                }
                Some(Err(_)) | None => {}
            }
        });
    });
    on_cleanup(move || detail.update(BlogDetailState::abandon));

    let on_submit = Callback::new(move |()| {
        let Some(blog) = detail.get_untracked().blog else {
            return;
        };
        if !editor.try_update(EditorState::begin_submit).unwrap_or(false) {
            return;
        }
        let (title, content) = editor.with_untracked(|e| (e.title.clone(), e.content.clone()));
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            match submit_update(&controller, &blog, &title, &content).await {
                Ok(updated) => redirect.set(Some(format!("/blog/{}", updated.id))),
                Err(err) => editor.update(|e| e.fail(&err)),
            }
        });
    });

    let load_error = Signal::derive(move || detail.with(|d| d.error.clone()));
    let cancel_href = move || {
        detail.with(|d| d.blog.as_ref().map_or_else(|| HOME_PATH.to_owned(), |b| format!("/blog/{}", b.id)))
    };

    view! {
        <div class="page editor-page">
            <Show when=move || detail.with(|d| d.loading)>
                <p class="page__loading">"Loading..."</p>
            </Show>
            <Banner message=load_error/>
            <Show when=move || detail.with(|d| d.blog.is_some())>
                <h1>"Edit Blog Post"</h1>
                <p class="page__subtitle">"Make changes to your blog post"</p>
                <BlogForm
                    editor
                    submit_label="Update Blog"
                    busy_label="Saving..."
                    cancel_href=cancel_href()
                    on_submit
                />
            </Show>
        </div>
    }
}
