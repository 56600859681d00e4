//! Post list and post detail state.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::error::ApiError;
use crate::net::api::{AuthApi, BlogApi};
use crate::net::latest::{LatestRequest, Ticket};
use crate::net::types::{Blog, BlogPage, Pagination};
use crate::session::controller::AuthController;
use crate::session::store::TokenStorage;

const BLOG_NOT_FOUND: &str = "Blog post not found";

/// One paginated list of posts (public home or the owner's own).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogListState {
    pub blogs: Vec<Blog>,
    pub pagination: Pagination,
    pub page: u32,
    pub loading: bool,
    pub error: Option<String>,
    latest: LatestRequest,
}

impl Default for BlogListState {
    fn default() -> Self {
        Self {
            blogs: Vec::new(),
            pagination: Pagination::default(),
            page: 1,
            loading: true,
            error: None,
            latest: LatestRequest::default(),
        }
    }
}

impl BlogListState {
    /// Start loading `page`; earlier in-flight loads become stale.
    pub fn begin(&mut self, page: u32) -> Ticket {
        self.page = page.max(1);
        self.loading = true;
        self.error = None;
        self.latest.begin()
    }

    /// Apply a load result. Returns `false` when `ticket` is stale.
    pub fn apply(&mut self, ticket: Ticket, result: Result<BlogPage, ApiError>) -> bool {
        if !self.latest.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.blogs = page.blogs;
                self.pagination = page.pagination;
            }
            Err(err) => {
                self.blogs.clear();
                self.pagination = Pagination::default();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Drop a deleted post and return the page to reload: the current one,
    /// or the one before it when the deletion emptied a later page.
    pub fn remove(&mut self, id: i64) -> u32 {
        self.blogs.retain(|b| b.id != id);
        self.pagination.total = self.pagination.total.saturating_sub(1);
        if self.blogs.is_empty() && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }

    pub fn show_pager(&self) -> bool {
        self.pagination.pages > 1
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.pagination.has_prev.then(|| self.page.saturating_sub(1).max(1))
    }

    pub fn next_page(&self) -> Option<u32> {
        self.pagination.has_next.then(|| self.page.saturating_add(1))
    }
}

/// A single post being viewed or edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogDetailState {
    pub blog: Option<Blog>,
    pub loading: bool,
    pub error: Option<String>,
    latest: LatestRequest,
}

impl Default for BlogDetailState {
    fn default() -> Self {
        Self { blog: None, loading: true, error: None, latest: LatestRequest::default() }
    }
}

impl BlogDetailState {
    pub fn begin(&mut self) -> Ticket {
        self.blog = None;
        self.loading = true;
        self.error = None;
        self.latest.begin()
    }

    /// Apply a load result. Returns `false` when `ticket` is stale.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Blog, ApiError>) -> bool {
        self.settle(ticket, result).is_some()
    }

    /// Apply a load result and hand it back for follow-up work, or `None`
    /// when `ticket` is stale and nothing may act on the result.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Blog, ApiError>) -> Option<Result<Blog, ApiError>> {
        if !self.latest.is_current(ticket) {
            return None;
        }
        self.loading = false;
        match &result {
            Ok(blog) => self.blog = Some(blog.clone()),
            Err(ApiError::NotFound(_)) => self.error = Some(BLOG_NOT_FOUND.to_owned()),
            Err(err) => self.error = Some(err.to_string()),
        }
        Some(result)
    }

    /// Abandon whatever load is in flight.
    pub fn abandon(&mut self) {
        self.latest.supersede();
        self.loading = false;
    }
}

/// Fetch the signed-in user's own posts.
///
/// # Errors
///
/// `Unauthorized` without a live session (which is then cleared); otherwise
/// whatever the API returned.
pub async fn load_my_blogs<A, S>(ctl: &AuthController<A, S>, page: u32, per_page: u32) -> Result<BlogPage, ApiError>
where
    A: AuthApi + BlogApi,
    S: TokenStorage,
{
    let token = ctl.bearer()?;
    ctl.api()
        .my_blogs(&token, page, per_page)
        .await
        .inspect_err(|err| ctl.reject(err))
}
