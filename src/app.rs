//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected_route::RequireAuth;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    blog_detail::BlogDetailPage, create_blog::CreateBlogPage, edit_blog::EditBlogPage, home::HomePage,
    login::LoginPage, my_blogs::MyBlogsPage, signup::SignupPage,
};
use crate::session::controller::AuthController;
use crate::session::selector::SessionView;
use crate::session::store::{BrowserStorage, TokenStore};

/// Auth controller wired to the browser: REST over `fetch`, token in `localStorage`.
pub type Controller = AuthController<HttpApi, BrowserStorage>;

/// Session handle shared through context.
///
/// The controller is not reactive on its own; its store bumps `revision`
/// after every change so views reading `session()` re-render. All fields are
/// arena handles, so the context is `Copy` and moves freely into view closures.
#[derive(Clone, Copy)]
pub struct AuthContext {
    controller: StoredValue<Controller>,
    revision: RwSignal<u64>,
    settled: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig) -> Self {
        let revision = RwSignal::new(0_u64);
        let store = TokenStore::new(BrowserStorage::new(&config.token_key))
            .with_observer(move || revision.update(|r| *r = r.wrapping_add(1)));
        Self {
            controller: StoredValue::new(AuthController::new(HttpApi::new(config), store)),
            revision,
            settled: RwSignal::new(false),
        }
    }

    /// Handle to the controller for async flows.
    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    /// Reactive session view. Reads as restoring until the startup restore settles.
    pub fn session(&self) -> SessionView {
        self.revision.track();
        if self.settled.get() {
            self.controller.with_value(Controller::view)
        } else {
            SessionView::restoring()
        }
    }

    /// Clear an expired session before a protected render or request.
    pub fn ensure_valid(&self) -> bool {
        self.controller.with_value(Controller::ensure_valid)
    }

    pub fn logout(&self) {
        self.controller.with_value(Controller::logout);
    }

    /// Resume a persisted session once, at startup.
    fn restore_on_mount(self) {
        Effect::new(move || {
            let controller = self.controller();
            leptos::task::spawn_local(async move {
                let view = controller.restore().await;
                leptos::logging::log!("session restore settled: {:?}", view.status);
                self.settled.set(true);
            });
        });
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration and the session handle, restores any persisted
/// session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = AuthContext::new(&config);
    auth.restore_on_mount();

    provide_context(config);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/blogfront.css"/>
        <Title text="Blog"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogDetailPage/>
                    <Route
                        path=StaticSegment("create")
                        view=|| view! { <RequireAuth><CreateBlogPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><EditBlogPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("my-blogs")
                        view=|| view! { <RequireAuth><MyBlogsPage/></RequireAuth> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
