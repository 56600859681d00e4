//! Title + content form shared by the create and edit pages.

use leptos::prelude::*;

use crate::pages::{Banner, FieldError};
use crate::state::editor::EditorState;

#[component]
pub fn BlogForm(
    editor: RwSignal<EditorState>,
    submit_label: &'static str,
    busy_label: &'static str,
    cancel_href: String,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field_errors = Signal::derive(move || editor.with(|e| e.field_errors.clone()));
    let banner = Signal::derive(move || editor.with(|e| e.error.clone()));
    let submitting = move || editor.with(|e| e.submitting);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <Banner message=banner/>
        <form class="form blog-form" on:submit=handle_submit>
            <label class="form__label" for="title">"Title"</label>
            <input
                id="title"
                class="form__input"
                type="text"
                placeholder="Enter your blog title..."
                prop:value=move || editor.with(|e| e.title.clone())
                on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
            />
            <FieldError errors=field_errors name="title"/>
            <label class="form__label" for="content">"Content"</label>
            <textarea
                id="content"
                class="form__input form__input--content"
                rows="15"
                placeholder="Write your blog content here..."
                prop:value=move || editor.with(|e| e.content.clone())
                on:input=move |ev| editor.update(|e| e.content = event_target_value(&ev))
            ></textarea>
            <FieldError errors=field_errors name="content"/>
            <div class="form__actions">
                <a class="btn" href=cancel_href>"Cancel"</a>
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || if submitting() { busy_label } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
