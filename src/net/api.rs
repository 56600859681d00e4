//! REST API client for the blog collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! `NetworkOrServerError` since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! Calls are grouped behind the `AuthApi` and `BlogApi` traits so the session
//! controller and editor flows can be driven against in-memory fakes. Failure
//! classification is a pure function of (operation, status, body).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
use crate::error::{ApiError, FieldErrors};
use crate::net::types::{Blog, BlogDraft, BlogPage, ErrorBody, LoginRequest, LoginResponse, SignupRequest, User};

/// Authentication endpoints used by the session controller.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /login`.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// `POST /signup`. Creates the account only; no token is issued.
    async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError>;
    /// `GET /profile` with a bearer token.
    async fn profile(&self, token: &str) -> Result<User, ApiError>;
}

/// Blog endpoints. Mutations and `/my-blogs` require a bearer token.
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    async fn list_blogs(&self, page: u32, per_page: u32) -> Result<BlogPage, ApiError>;
    async fn my_blogs(&self, token: &str, page: u32, per_page: u32) -> Result<BlogPage, ApiError>;
    async fn get_blog(&self, id: i64) -> Result<Blog, ApiError>;
    async fn create_blog(&self, token: &str, draft: &BlogDraft) -> Result<Blog, ApiError>;
    async fn update_blog(&self, token: &str, id: i64, draft: &BlogDraft) -> Result<Blog, ApiError>;
    async fn delete_blog(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

/// Which call failed; selects the fallback message and 401 semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    Profile,
    ListBlogs,
    MyBlogs,
    GetBlog,
    CreateBlog,
    UpdateBlog,
    DeleteBlog,
}

impl Operation {
    /// Message shown when the server gave none.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Signup => "Signup failed. Please try again.",
            Self::Profile => "Failed to load your profile.",
            Self::ListBlogs => "Failed to load blogs. Please try again later.",
            Self::MyBlogs => "Failed to load your blogs. Please try again later.",
            Self::GetBlog => "Failed to load blog post",
            Self::CreateBlog => "Failed to create blog post. Please try again.",
            Self::UpdateBlog => "Failed to update blog post. Please try again.",
            Self::DeleteBlog => "Failed to delete blog post. Please try again.",
        }
    }
}

/// Map a non-2xx response to the client error taxonomy.
pub fn classify_failure(op: Operation, status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .error
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| op.fallback_message().to_owned());
    match status {
        400 | 422 => ApiError::ValidationFailed { message, fields: detail_fields(parsed.details.as_ref()) },
        401 if op == Operation::Login => ApiError::InvalidCredentials(message),
        401 => ApiError::Unauthorized(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        _ => ApiError::NetworkOrServerError(message),
    }
}

/// Error for a request that never produced an HTTP response.
pub fn transport_failure(op: Operation) -> ApiError {
    ApiError::NetworkOrServerError(op.fallback_message().to_owned())
}

/// Collect `{field: [msg, ...]}` validation details, keeping each field's first message.
fn detail_fields(details: Option<&serde_json::Value>) -> FieldErrors {
    let Some(serde_json::Value::Object(map)) = details else {
        return FieldErrors::new();
    };
    map.iter()
        .filter_map(|(field, value)| {
            let message = match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_owned)),
                _ => None,
            }?;
            Some((field.clone(), message))
        })
        .collect()
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn list_endpoint(base: &str, path: &str, page: u32, per_page: u32) -> String {
    format!("{base}/{path}?page={}&per_page={}", page.max(1), per_page.max(1))
}

fn blog_endpoint(base: &str, id: i64) -> String {
    format!("{base}/blogs/{id}")
}

/// HTTP implementation of both API traits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn blogs_url(&self, page: u32, per_page: u32) -> String {
        list_endpoint(&self.base, "blogs", page, per_page)
    }

    pub fn my_blogs_url(&self, page: u32, per_page: u32) -> String {
        list_endpoint(&self.base, "my-blogs", page, per_page)
    }

    pub fn blog_url(&self, id: i64) -> String {
        blog_endpoint(&self.base, id)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{Operation, bearer_header, classify_failure, transport_failure};
    use crate::error::ApiError;

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer_header(token))
    }

    pub(super) async fn send(op: Operation, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            leptos::logging::warn!("{op:?} request failed: {e}");
            transport_failure(op)
        })
    }

    pub(super) async fn send_json<B: serde::Serialize>(
        op: Operation,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = builder.json(body).map_err(|e| {
            leptos::logging::warn!("{op:?} body encoding failed: {e}");
            transport_failure(op)
        })?;
        request.send().await.map_err(|e| {
            leptos::logging::warn!("{op:?} request failed: {e}");
            transport_failure(op)
        })
    }

    pub(super) async fn check(op: Operation, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("{op:?} rejected with status {status}");
        Err(classify_failure(op, status, &body))
    }

    pub(super) async fn read<T: DeserializeOwned>(op: Operation, resp: Response) -> Result<T, ApiError> {
        let resp = check(op, resp).await?;
        resp.json::<T>().await.map_err(|e| {
            leptos::logging::warn!("{op:?} response decode failed: {e}");
            transport_failure(op)
        })
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl AuthApi for HttpApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = http::send_json(Operation::Login, Request::post(&self.endpoint("login")), req).await?;
            http::read(Operation::Login, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::Login))
        }
    }

    async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = http::send_json(Operation::Signup, Request::post(&self.endpoint("signup")), req).await?;
            let body: crate::net::types::UserEnvelope = http::read(Operation::Signup, resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::Signup))
        }
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = http::authorized(Request::get(&self.endpoint("profile")), token);
            let resp = http::send(Operation::Profile, builder).await?;
            let body: crate::net::types::UserEnvelope = http::read(Operation::Profile, resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::Profile))
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl BlogApi for HttpApi {
    async fn list_blogs(&self, page: u32, per_page: u32) -> Result<BlogPage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = http::send(Operation::ListBlogs, Request::get(&self.blogs_url(page, per_page))).await?;
            http::read(Operation::ListBlogs, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::ListBlogs))
        }
    }

    async fn my_blogs(&self, token: &str, page: u32, per_page: u32) -> Result<BlogPage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = http::authorized(Request::get(&self.my_blogs_url(page, per_page)), token);
            let resp = http::send(Operation::MyBlogs, builder).await?;
            http::read(Operation::MyBlogs, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::MyBlogs))
        }
    }

    async fn get_blog(&self, id: i64) -> Result<Blog, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let resp = http::send(Operation::GetBlog, Request::get(&self.blog_url(id))).await?;
            let body: crate::net::types::BlogEnvelope = http::read(Operation::GetBlog, resp).await?;
            Ok(body.blog)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::GetBlog))
        }
    }

    async fn create_blog(&self, token: &str, draft: &BlogDraft) -> Result<Blog, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = http::authorized(Request::post(&self.endpoint("blogs")), token);
            let resp = http::send_json(Operation::CreateBlog, builder, draft).await?;
            let body: crate::net::types::BlogEnvelope = http::read(Operation::CreateBlog, resp).await?;
            Ok(body.blog)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::CreateBlog))
        }
    }

    async fn update_blog(&self, token: &str, id: i64, draft: &BlogDraft) -> Result<Blog, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = http::authorized(Request::put(&self.blog_url(id)), token);
            let resp = http::send_json(Operation::UpdateBlog, builder, draft).await?;
            let body: crate::net::types::BlogEnvelope = http::read(Operation::UpdateBlog, resp).await?;
            Ok(body.blog)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::UpdateBlog))
        }
    }

    async fn delete_blog(&self, token: &str, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = http::authorized(Request::delete(&self.blog_url(id)), token);
            let resp = http::send(Operation::DeleteBlog, builder).await?;
            http::check(Operation::DeleteBlog, resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(transport_failure(Operation::DeleteBlog))
        }
    }
}
