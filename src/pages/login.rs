//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes redirect here with the requested path in `next`. After a
//! successful login (or when a session already exists) the page resumes that
//! path, falling back to home.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::AuthContext;
use crate::components::redirect::use_redirect;
use crate::error::FieldErrors;
use crate::pages::{Banner, FieldError};
use crate::session::guard::{RESUME_PARAM, resume_path};

/// Query flag set by the signup page when the account exists but login did not follow.
pub const CREATED_PARAM: &str = "created";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let query = use_query_map();
    let redirect = use_redirect();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let resume = move || resume_path(query.with_untracked(|q| q.get(RESUME_PARAM)).as_deref());
    let just_created = move || query.with(|q| q.get(CREATED_PARAM).is_some());

    Effect::new(move || {
        if auth.session().is_authenticated() && !busy.get_untracked() {
            redirect.set(Some(resume()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        field_errors.set(FieldErrors::new());
        banner.set(None);
        let controller = auth.controller();
        let email_value = email.get();
        let password_value = password.get();
        leptos::task::spawn_local(async move {
            match controller.login(&email_value, &password_value).await {
                Ok(_) => redirect.set(Some(resume())),
                Err(err) => {
                    let (fields, message) = err.form_feedback();
                    field_errors.set(fields);
                    banner.set(message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=just_created>
                    <div class="banner banner--info">"Account created. Please log in."</div>
                </Show>
                <Banner message=banner/>
                <form class="form" on:submit=on_submit>
                    <label class="form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors=field_errors name="email"/>
                    <label class="form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError errors=field_errors name="password"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
