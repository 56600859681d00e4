use super::*;

// =============================================================
// Helpers
// =============================================================

fn blog_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "First post",
        "content": "Hello from the blog platform.",
        "created_at": "2024-03-01T10:00:00",
        "updated_at": "2024-03-01T10:00:00",
        "user_id": 3,
        "author": "alice"
    })
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_accepts_access_token_field() {
    let body = serde_json::json!({
        "message": "Login successful",
        "access_token": "a.b.c",
        "user": { "id": 1, "username": "alice", "email": "a@b.com", "created_at": "2024-01-01T00:00:00" }
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token, "a.b.c");
    assert_eq!(resp.user.username, "alice");
}

#[test]
fn login_response_accepts_token_field() {
    let body = serde_json::json!({
        "token": "x.y.z",
        "user": { "id": 2, "username": "bob", "email": "bob@example.com" }
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token, "x.y.z");
    assert_eq!(resp.user.created_at, None);
}

// =============================================================
// Blog + pagination
// =============================================================

#[test]
fn blog_deserializes_with_author() {
    let blog: Blog = serde_json::from_value(blog_json()).unwrap();
    assert_eq!(blog.id, 7);
    assert_eq!(blog.user_id, 3);
    assert_eq!(blog.author.as_deref(), Some("alice"));
    assert!(!blog.was_updated());
}

#[test]
fn blog_author_may_be_null() {
    let mut json = blog_json();
    json["author"] = serde_json::Value::Null;
    json["updated_at"] = serde_json::json!("2024-03-02T08:00:00");
    let blog: Blog = serde_json::from_value(json).unwrap();
    assert_eq!(blog.author, None);
    assert!(blog.was_updated());
}

#[test]
fn blog_page_reads_full_pagination() {
    let body = serde_json::json!({
        "blogs": [blog_json()],
        "pagination": { "page": 2, "pages": 3, "per_page": 10, "total": 25, "has_next": true, "has_prev": true }
    });
    let page: BlogPage = serde_json::from_value(body).unwrap();
    assert_eq!(page.blogs.len(), 1);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.total, 25);
    assert!(page.pagination.has_next && page.pagination.has_prev);
}

#[test]
fn blog_page_defaults_missing_pagination() {
    let page: BlogPage = serde_json::from_value(serde_json::json!({ "blogs": [] })).unwrap();
    assert_eq!(page.pagination, Pagination::default());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn signup_request_serializes_expected_fields() {
    let req = SignupRequest {
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        serde_json::json!({ "username": "alice", "email": "a@b.com", "password": "secret1" })
    );
}

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.error.is_none());
    assert!(body.details.is_none());
}
