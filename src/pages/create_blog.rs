//! New post form.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::blog_form::BlogForm;
use crate::components::redirect::use_redirect;
use crate::state::editor::{EditorState, submit_create};

#[component]
pub fn CreateBlogPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let redirect = use_redirect();
    let editor = RwSignal::new(EditorState::default());

    let on_submit = Callback::new(move |()| {
        if !editor.try_update(EditorState::begin_submit).unwrap_or(false) {
            return;
        }
        let (title, content) = editor.with_untracked(|e| (e.title.clone(), e.content.clone()));
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            match submit_create(&controller, &title, &content).await {
                Ok(blog) => redirect.set(Some(format!("/blog/{}", blog.id))),
                Err(err) => editor.update(|e| e.fail(&err)),
            }
        });
    });

    view! {
        <div class="page editor-page">
            <h1>"Create New Blog Post"</h1>
            <p class="page__subtitle">"Share your thoughts with the world"</p>
            <BlogForm
                editor
                submit_label="Publish Blog"
                busy_label="Publishing..."
                cancel_href="/".to_owned()
                on_submit
            />
        </div>
    }
}
