//! Create, edit, and delete flows for posts.
//!
//! Every mutation validates locally, checks ownership against the session
//! user where a post already exists, and only then takes a bearer token.
//! A rejected form or a foreign post never produces a request.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::error::{ApiError, FieldErrors};
use crate::net::api::{AuthApi, BlogApi};
use crate::net::types::Blog;
use crate::session::controller::AuthController;
use crate::session::guard::{Ownership, ownership};
use crate::session::store::TokenStorage;
use crate::util::validation::validate_blog;

const SIGN_IN_REQUIRED: &str = "Please log in to continue.";

/// Form state shared by the create and edit pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub title: String,
    pub content: String,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub submitting: bool,
}

impl EditorState {
    /// Prefill from an existing post.
    pub fn from_blog(blog: &Blog) -> Self {
        Self { title: blog.title.clone(), content: blog.content.clone(), ..Self::default() }
    }

    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.field_errors.clear();
        self.error = None;
        true
    }

    /// Record a failed submission: field messages inline, anything else as a banner.
    pub fn fail(&mut self, err: &ApiError) {
        self.submitting = false;
        (self.field_errors, self.error) = err.form_feedback();
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.field_errors.get(name).cloned()
    }
}

fn require_owner<A: AuthApi, S: TokenStorage>(
    ctl: &AuthController<A, S>,
    blog: &Blog,
    action: &str,
) -> Result<(), ApiError> {
    ctl.ensure_valid();
    match ownership(&ctl.view(), blog) {
        Ownership::Owner => Ok(()),
        Ownership::NotOwner => Err(ApiError::Forbidden(format!("You can only {action} your own blogs"))),
        Ownership::Unknown => Err(ApiError::Unauthorized(SIGN_IN_REQUIRED.to_owned())),
    }
}

/// Validate and publish a new post.
///
/// # Errors
///
/// `ValidationFailed` before any request; `Unauthorized` without a live
/// session; otherwise whatever the API returned.
pub async fn submit_create<A, S>(ctl: &AuthController<A, S>, title: &str, content: &str) -> Result<Blog, ApiError>
where
    A: AuthApi + BlogApi,
    S: TokenStorage,
{
    let draft = validate_blog(title, content)?;
    let token = ctl.bearer()?;
    let created = ctl
        .api()
        .create_blog(&token, &draft)
        .await
        .inspect_err(|err| ctl.reject(err))?;
    leptos::logging::log!("created blog {}", created.id);
    Ok(created)
}

/// Fetch a post for editing, refusing posts the session user does not own.
///
/// # Errors
///
/// `NotFound` for a missing post, `Forbidden` for a foreign one.
pub async fn load_for_edit<A, S>(ctl: &AuthController<A, S>, id: i64) -> Result<Blog, ApiError>
where
    A: AuthApi + BlogApi,
    S: TokenStorage,
{
    let blog = ctl.api().get_blog(id).await?;
    require_owner(ctl, &blog, "edit")?;
    Ok(blog)
}

/// Validate and save changes to `blog`.
///
/// # Errors
///
/// `Forbidden` for a foreign post and `ValidationFailed` for a bad form,
/// both before any request; otherwise whatever the API returned.
pub async fn submit_update<A, S>(
    ctl: &AuthController<A, S>,
    blog: &Blog,
    title: &str,
    content: &str,
) -> Result<Blog, ApiError>
where
    A: AuthApi + BlogApi,
    S: TokenStorage,
{
    require_owner(ctl, blog, "edit")?;
    let draft = validate_blog(title, content)?;
    let token = ctl.bearer()?;
    let updated = ctl
        .api()
        .update_blog(&token, blog.id, &draft)
        .await
        .inspect_err(|err| ctl.reject(err))?;
    leptos::logging::log!("updated blog {}", updated.id);
    Ok(updated)
}

/// Delete `blog`.
///
/// # Errors
///
/// `Forbidden` for a foreign post before any request; otherwise whatever
/// the API returned.
pub async fn submit_delete<A, S>(ctl: &AuthController<A, S>, blog: &Blog) -> Result<(), ApiError>
where
    A: AuthApi + BlogApi,
    S: TokenStorage,
{
    require_owner(ctl, blog, "delete")?;
    let token = ctl.bearer()?;
    ctl.api()
        .delete_blog(&token, blog.id)
        .await
        .inspect_err(|err| ctl.reject(err))?;
    leptos::logging::log!("deleted blog {}", blog.id);
    Ok(())
}
