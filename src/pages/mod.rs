//! Routed page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages own their page-scoped state signals, start
//! loads from effects, and run submissions in `spawn_local` against the auth
//! controller from context.


pub mod blog_detail;
pub mod create_blog;
pub mod edit_blog;
pub mod home;
pub mod login;
pub mod my_blogs;
pub mod signup;

use leptos::prelude::*;

use crate::error::FieldErrors;

/// Inline message for one form field, if it has one.
#[component]
pub fn FieldError(#[prop(into)] errors: Signal<FieldErrors>, name: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(name).cloned())
            .map(|message| view! { <p class="form__error">{message}</p> })
    }
}

/// Page-level error banner.
#[component]
pub fn Banner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <div class="banner banner--error">{text}</div> })
}

/// Numeric `:id` route parameter, if present and a positive integer.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|r| r.trim().parse().ok()).filter(|id| *id > 0)
}

/// Browser confirmation dialog. Always declines outside the browser.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
