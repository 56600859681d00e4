//! Route wrapper that renders its children only for an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation into a protected page re-checks token expiry, then
//! evaluates the guard. Anonymous visitors are sent to login with the
//! requested path attached; while a persisted session is being restored the
//! wrapper waits instead of redirecting.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AuthContext;
use crate::components::redirect::use_redirect;
use crate::session::guard::{GuardDecision, evaluate, target_path};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let redirect = use_redirect();

    Effect::new(move || {
        let target = target_path(&location.pathname.get(), &location.search.get());
        auth.ensure_valid();
        if let GuardDecision::Redirected { to } = evaluate(&target, &auth.session()) {
            leptos::logging::log!("protected route requires login");
            redirect.set(Some(to));
        }
    });

    view! {
        <Show
            when=move || auth.session().is_authenticated()
            fallback=move || {
                view! {
                    <div class="page page--pending">
                        <p>
                            {move || {
                                if auth.session().is_restoring() { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
