//! In-memory API collaborator for unit tests.
//!
//! `FakeApi` behaves like the blog server closely enough to drive session and
//! editor flows end to end: it issues JWT-shaped tokens whose payload carries
//! `sub` and `exp`, enforces ownership on mutations, and records every call
//! so tests can assert that a rejected form never reached the network.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::ApiError;
use crate::net::api::{AuthApi, BlogApi};
use crate::net::types::{Blog, BlogDraft, BlogPage, LoginRequest, LoginResponse, Pagination, SignupRequest, User};
use crate::session::token;

/// JWT-shaped token for user `sub` expiring at `exp`.
pub fn make_token(sub: i64, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{sub}","exp":{exp}}}"#));
    format!("{header}.{payload}.c2ln")
}

/// A token for `sub` valid for the next hour.
pub fn live_token(sub: i64) -> String {
    make_token(sub, token::now_unix() + 3600)
}

/// A token for `sub` that expired an hour ago.
pub fn expired_token(sub: i64) -> String {
    make_token(sub, token::now_unix() - 3600)
}

pub fn user(id: i64, username: &str) -> User {
    User { id, username: username.to_owned(), email: format!("{username}@example.com"), created_at: None }
}

fn subject(raw: &str) -> Option<i64> {
    let payload = raw.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("sub")?.as_str()?.parse().ok()
}

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
pub struct FakeApi {
    accounts: RefCell<Vec<Account>>,
    blogs: RefCell<BTreeMap<i64, Blog>>,
    calls: RefCell<Vec<&'static str>>,
    fail_next: RefCell<Option<ApiError>>,
    token_ttl: Cell<Option<i64>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account directly, bypassing `signup`.
    pub fn with_account(self, id: i64, username: &str, password: &str) -> Self {
        self.accounts.borrow_mut().push(Account { user: user(id, username), password: password.to_owned() });
        self
    }

    /// Seed a post owned by `owner`.
    pub fn with_blog(self, id: i64, owner: i64, title: &str) -> Self {
        let author = self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.user.id == owner)
            .map(|a| a.user.username.clone());
        self.blogs.borrow_mut().insert(
            id,
            Blog {
                id,
                title: title.to_owned(),
                content: "Seeded content for tests.".to_owned(),
                created_at: "2024-03-01T10:00:00".to_owned(),
                updated_at: "2024-03-01T10:00:00".to_owned(),
                user_id: owner,
                author,
            },
        );
        self
    }

    /// Make the next call fail with `err`, whatever it is.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Issue login tokens that live `ttl` seconds from now (negative: already expired).
    pub fn issue_tokens_with_ttl(&self, ttl: i64) {
        self.token_ttl.set(Some(ttl));
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    pub fn blog(&self, id: i64) -> Option<Blog> {
        self.blogs.borrow().get(&id).cloned()
    }

    fn enter(&self, name: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(name);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn authenticate(&self, raw: &str) -> Result<User, ApiError> {
        if token::is_expired(raw) {
            return Err(ApiError::Unauthorized("Token has expired".to_owned()));
        }
        let id = subject(raw).ok_or_else(|| ApiError::Unauthorized("Invalid token".to_owned()))?;
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
            .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))
    }

    fn page_of(blogs: Vec<Blog>, page: u32, per_page: u32) -> BlogPage {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let total = blogs.len();
        let pages = u32::try_from(total.div_ceil(per_page as usize)).unwrap_or(u32::MAX);
        let skip = ((page - 1) * per_page) as usize;
        BlogPage {
            blogs: blogs.into_iter().skip(skip).take(per_page as usize).collect(),
            pagination: Pagination {
                page,
                pages,
                per_page,
                total: total as u64,
                has_next: page < pages,
                has_prev: page > 1,
            },
        }
    }

    fn owned_blog(&self, raw: &str, id: i64, action: &str) -> Result<Blog, ApiError> {
        let caller = self.authenticate(raw)?;
        let blog = self
            .blogs
            .borrow()
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Blog not found".to_owned()))?;
        if blog.user_id != caller.id {
            return Err(ApiError::Forbidden(format!("You can only {action} your own blogs")));
        }
        Ok(blog)
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.enter("login")?;
        let accounts = self.accounts.borrow();
        let account = accounts
            .iter()
            .find(|a| a.user.email == req.email && a.password == req.password)
            .ok_or_else(|| ApiError::InvalidCredentials("Invalid email or password".to_owned()))?;
        let ttl = self.token_ttl.get().unwrap_or(3600);
        Ok(LoginResponse { token: make_token(account.user.id, token::now_unix() + ttl), user: account.user.clone() })
    }

    async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError> {
        self.enter("signup")?;
        let mut accounts = self.accounts.borrow_mut();
        if accounts.iter().any(|a| a.user.email == req.email) {
            return Err(ApiError::validation_message("Email already registered"));
        }
        if accounts.iter().any(|a| a.user.username == req.username) {
            return Err(ApiError::validation_message("Username already taken"));
        }
        let id = accounts.iter().map(|a| a.user.id).max().unwrap_or(0) + 1;
        let created = User { id, username: req.username.clone(), email: req.email.clone(), created_at: None };
        accounts.push(Account { user: created.clone(), password: req.password.clone() });
        Ok(created)
    }

    async fn profile(&self, raw: &str) -> Result<User, ApiError> {
        self.enter("profile")?;
        self.authenticate(raw)
    }
}

impl BlogApi for FakeApi {
    async fn list_blogs(&self, page: u32, per_page: u32) -> Result<BlogPage, ApiError> {
        self.enter("list_blogs")?;
        let blogs = self.blogs.borrow().values().rev().cloned().collect();
        Ok(Self::page_of(blogs, page, per_page))
    }

    async fn my_blogs(&self, raw: &str, page: u32, per_page: u32) -> Result<BlogPage, ApiError> {
        self.enter("my_blogs")?;
        let caller = self.authenticate(raw)?;
        let blogs = self.blogs.borrow().values().rev().filter(|b| b.user_id == caller.id).cloned().collect();
        Ok(Self::page_of(blogs, page, per_page))
    }

    async fn get_blog(&self, id: i64) -> Result<Blog, ApiError> {
        self.enter("get_blog")?;
        self.blog(id).ok_or_else(|| ApiError::NotFound("Blog not found".to_owned()))
    }

    async fn create_blog(&self, raw: &str, draft: &BlogDraft) -> Result<Blog, ApiError> {
        self.enter("create_blog")?;
        let caller = self.authenticate(raw)?;
        let mut blogs = self.blogs.borrow_mut();
        let id = blogs.keys().max().copied().unwrap_or(0) + 1;
        let blog = Blog {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: "2024-03-02T09:00:00".to_owned(),
            updated_at: "2024-03-02T09:00:00".to_owned(),
            user_id: caller.id,
            author: Some(caller.username),
        };
        blogs.insert(id, blog.clone());
        Ok(blog)
    }

    async fn update_blog(&self, raw: &str, id: i64, draft: &BlogDraft) -> Result<Blog, ApiError> {
        self.enter("update_blog")?;
        let mut blog = self.owned_blog(raw, id, "edit")?;
        blog.title.clone_from(&draft.title);
        blog.content.clone_from(&draft.content);
        blog.updated_at = "2024-03-03T12:00:00".to_owned();
        self.blogs.borrow_mut().insert(id, blog.clone());
        Ok(blog)
    }

    async fn delete_blog(&self, raw: &str, id: i64) -> Result<(), ApiError> {
        self.enter("delete_blog")?;
        self.owned_blog(raw, id, "delete")?;
        self.blogs.borrow_mut().remove(&id);
        Ok(())
    }
}
