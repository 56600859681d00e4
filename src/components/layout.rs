//! Page chrome: navigation bar and main content area.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::redirect::use_redirect;
use crate::session::guard::LOGIN_PATH;

/// Navigation bar plus routed content.
///
/// Authenticated users see Create Blog, My Blogs, their username, and
/// Logout; everyone else sees Login and Sign Up.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let redirect = use_redirect();

    let username = move || auth.session().current_user.map(|u| u.username).unwrap_or_default();
    let on_logout = move |_| {
        auth.logout();
        redirect.set(Some(LOGIN_PATH.to_owned()));
    };

    view! {
        <div class="layout">
            <nav class="nav">
                <a class="nav__brand" href="/">"Blog"</a>
                <a class="nav__link" href="/">"Home"</a>
                <span class="nav__spacer"></span>
                <Show
                    when=move || auth.session().is_authenticated()
                    fallback=move || {
                        view! {
                            <Show when=move || !auth.session().is_restoring()>
                                <a class="nav__link" href="/login">"Login"</a>
                                <a class="nav__link nav__link--primary" href="/signup">"Sign Up"</a>
                            </Show>
                        }
                    }
                >
                    <a class="nav__link" href="/create">"Create Blog"</a>
                    <a class="nav__link" href="/my-blogs">"My Blogs"</a>
                    <span class="nav__user">{username}</span>
                    <button class="btn nav__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
