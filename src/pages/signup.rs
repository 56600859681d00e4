//! Account creation page: create the account, then log straight in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::redirect::use_redirect;
use crate::error::{ApiError, FieldErrors};
use crate::net::api::AuthApi;
use crate::pages::login::CREATED_PARAM;
use crate::pages::{Banner, FieldError};
use crate::session::controller::AuthController;
use crate::session::guard::{HOME_PATH, LOGIN_PATH};
use crate::session::store::TokenStorage;
use crate::util::validation::SignupForm;

/// Result of the two-step create-then-authenticate flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created and session established.
    LoggedIn,
    /// Account created but the follow-up login failed. Not retried.
    CreatedOnly(ApiError),
    /// Nothing was created.
    Rejected(ApiError),
}

/// Create the account, then log in with the same credentials.
pub async fn signup_then_login<A: AuthApi, S: TokenStorage>(
    ctl: &AuthController<A, S>,
    form: &SignupForm,
) -> SignupOutcome {
    if let Err(err) = ctl.signup(form).await {
        return SignupOutcome::Rejected(err);
    }
    match ctl.login(form.email.trim(), &form.password).await {
        Ok(_) => SignupOutcome::LoggedIn,
        Err(err) => {
            leptos::logging::warn!("account created but login failed: {err}");
            SignupOutcome::CreatedOnly(err)
        }
    }
}

/// Where the page goes after `outcome`, if anywhere.
pub fn destination(outcome: &SignupOutcome) -> Option<String> {
    match outcome {
        SignupOutcome::LoggedIn => Some(HOME_PATH.to_owned()),
        SignupOutcome::CreatedOnly(_) => Some(format!("{LOGIN_PATH}?{CREATED_PARAM}=1")),
        SignupOutcome::Rejected(_) => None,
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let redirect = use_redirect();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.session().is_authenticated() && !busy.get_untracked() {
            redirect.set(Some(HOME_PATH.to_owned()));
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
        let form = SignupForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        leptos::task::spawn_local(async move {
            let outcome = signup_then_login(&controller, &form).await;
            if let SignupOutcome::Rejected(err) = &outcome {
                let (fields, message) = err.form_feedback();
                field_errors.set(fields);
                banner.set(message);
            }
            busy.set(false);
            if let Some(path) = destination(&outcome) {
                redirect.set(Some(path));
            }
        });
    };

    let input = move |id: &'static str, kind: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                class="form__input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError errors=field_errors name=id/>
        }
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <Banner message=banner/>
                <form class="form" on:submit=on_submit>
                    {input("username", "text", "Username", username)}
                    {input("email", "email", "Email", email)}
                    {input("password", "password", "Password", password)}
                    {input("confirm_password", "password", "Confirm password", confirm_password)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
