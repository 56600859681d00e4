//! Deferred navigation for async handlers.
//!
//! Handlers running inside `spawn_local` or `Show` children cannot hold the
//! router's navigate closure. They write a path into the returned signal and
//! an effect owned by the page performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Signal that navigates to whatever path is written into it.
pub fn use_redirect() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    target
}
