//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form is checked here before any request leaves the browser; a
//! rejected form never reaches the network. The server validates again and
//! its field errors arrive through the same `ApiError::ValidationFailed`
//! shape, so pages render both sources identically.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::error::{ApiError, FieldErrors};
use crate::net::types::{BlogDraft, LoginRequest, SignupRequest};

pub const PASSWORD_MIN: usize = 6;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 80;
pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 200;
pub const CONTENT_MIN: usize = 10;

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Collects the first failure per field.
#[derive(Default)]
struct Checker {
    errors: FieldErrors,
}

impl Checker {
    fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok && !self.errors.contains_key(field) {
            self.errors.insert(field.to_owned(), message.to_owned());
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ApiError> {
        if self.errors.is_empty() { Ok(value) } else { Err(ApiError::validation(self.errors)) }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

fn check_email(checker: &mut Checker, email: &str) {
    checker.check("email", !email.is_empty(), "Email is required");
    checker.check("email", is_plausible_email(email), "Invalid email address");
}

fn check_password(checker: &mut Checker, password: &str) {
    checker.check("password", !password.is_empty(), "Password is required");
    checker.check(
        "password",
        char_len(password) >= PASSWORD_MIN,
        "Password must be at least 6 characters",
    );
}

/// Validate login input into a request body.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, ApiError> {
    let email = form.email.trim();
    let mut checker = Checker::default();
    check_email(&mut checker, email);
    check_password(&mut checker, &form.password);
    checker.finish(LoginRequest { email: email.to_owned(), password: form.password.clone() })
}

/// Validate signup input into a request body.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ApiError> {
    let username = form.username.trim();
    let email = form.email.trim();
    let mut checker = Checker::default();
    checker.check("username", !username.is_empty(), "Username is required");
    checker.check(
        "username",
        char_len(username) >= USERNAME_MIN,
        "Username must be at least 3 characters",
    );
    checker.check(
        "username",
        char_len(username) <= USERNAME_MAX,
        "Username must be less than 80 characters",
    );
    check_email(&mut checker, email);
    check_password(&mut checker, &form.password);
    checker.check(
        "confirm_password",
        !form.confirm_password.is_empty(),
        "Confirm password is required",
    );
    checker.check(
        "confirm_password",
        form.confirm_password == form.password,
        "Passwords must match",
    );
    checker.finish(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate a post title and body into a draft.
pub fn validate_blog(title: &str, content: &str) -> Result<BlogDraft, ApiError> {
    let title = title.trim();
    let content = content.trim();
    let mut checker = Checker::default();
    checker.check("title", !title.is_empty(), "Title is required");
    checker.check("title", char_len(title) >= TITLE_MIN, "Title must be at least 3 characters");
    checker.check("title", char_len(title) <= TITLE_MAX, "Title must be less than 200 characters");
    checker.check("content", !content.is_empty(), "Content is required");
    checker.check(
        "content",
        char_len(content) >= CONTENT_MIN,
        "Content must be at least 10 characters",
    );
    checker.finish(BlogDraft { title: title.to_owned(), content: content.to_owned() })
}
