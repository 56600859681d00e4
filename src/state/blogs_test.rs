use futures::executor::block_on;

use super::*;
use crate::session::store::{MemoryStorage, TokenStore};
use crate::testing::FakeApi;

fn page_of(ids: &[i64], page: u32, pages: u32) -> BlogPage {
    let api = FakeApi::new().with_account(1, "alice", "secret1");
    let api = ids.iter().fold(api, |api, id| api.with_blog(*id, 1, "Post"));
    BlogPage {
        blogs: ids.iter().filter_map(|id| api.blog(*id)).collect(),
        pagination: Pagination {
            page,
            pages,
            per_page: 10,
            total: ids.len() as u64,
            has_next: page < pages,
            has_prev: page > 1,
        },
    }
}

// =============================================================
// BlogListState
// =============================================================

#[test]
fn list_starts_loading_on_first_page() {
    let state = BlogListState::default();
    assert!(state.loading);
    assert_eq!(state.page, 1);
    assert!(!state.show_pager());
}

#[test]
fn list_apply_success_replaces_posts() {
    let mut state = BlogListState::default();
    let ticket = state.begin(2);
    assert!(state.apply(ticket, Ok(page_of(&[3, 4], 2, 3))));
    assert!(!state.loading);
    assert_eq!(state.blogs.len(), 2);
    assert!(state.show_pager());
    assert_eq!(state.prev_page(), Some(1));
    assert_eq!(state.next_page(), Some(3));
}

#[test]
fn list_ignores_stale_response() {
    let mut state = BlogListState::default();
    let first = state.begin(1);
    let second = state.begin(2);

    assert!(state.apply(second, Ok(page_of(&[7], 2, 2))));
    assert!(!state.apply(first, Ok(page_of(&[1, 2, 3], 1, 2))));

    assert_eq!(state.page, 2);
    assert_eq!(state.blogs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![7]);
}

#[test]
fn list_apply_error_sets_message() {
    let mut state = BlogListState::default();
    let ticket = state.begin(1);
    let err = ApiError::NetworkOrServerError("Failed to load blogs. Please try again later.".to_owned());
    state.apply(ticket, Err(err));
    assert_eq!(state.error.as_deref(), Some("Failed to load blogs. Please try again later."));
    assert!(state.blogs.is_empty());
    assert!(!state.loading);
}

#[test]
fn list_remove_drops_post() {
    let mut state = BlogListState::default();
    let ticket = state.begin(1);
    state.apply(ticket, Ok(page_of(&[1, 2], 1, 1)));
    state.remove(1);
    assert_eq!(state.blogs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(state.pagination.total, 1);
}

#[test]
fn list_remove_reloads_same_page_while_posts_remain() {
    let mut state = BlogListState::default();
    let ticket = state.begin(2);
    state.apply(ticket, Ok(page_of(&[11, 12], 2, 2)));
    assert_eq!(state.remove(11), 2);
}

#[test]
fn list_remove_of_last_post_on_later_page_steps_back() {
    let mut state = BlogListState::default();
    let ticket = state.begin(3);
    state.apply(ticket, Ok(page_of(&[21], 3, 3)));
    assert_eq!(state.remove(21), 2);
}

#[test]
fn list_remove_of_last_post_on_first_page_stays() {
    let mut state = BlogListState::default();
    let ticket = state.begin(1);
    state.apply(ticket, Ok(page_of(&[1], 1, 1)));
    assert_eq!(state.remove(1), 1);
    assert!(state.blogs.is_empty());
}

#[test]
fn single_page_has_no_neighbours() {
    let mut state = BlogListState::default();
    let ticket = state.begin(1);
    state.apply(ticket, Ok(page_of(&[1], 1, 1)));
    assert_eq!(state.prev_page(), None);
    assert_eq!(state.next_page(), None);
    assert!(!state.show_pager());
}

// =============================================================
// BlogDetailState
// =============================================================

#[test]
fn detail_not_found_has_fixed_message() {
    let mut state = BlogDetailState::default();
    let ticket = state.begin();
    state.apply(ticket, Err(ApiError::NotFound("Blog not found".to_owned())));
    assert_eq!(state.error.as_deref(), Some("Blog post not found"));
    assert_eq!(state.blog, None);
}

#[test]
fn detail_other_error_keeps_server_message() {
    let mut state = BlogDetailState::default();
    let ticket = state.begin();
    state.apply(ticket, Err(ApiError::NetworkOrServerError("Failed to load blog post".to_owned())));
    assert_eq!(state.error.as_deref(), Some("Failed to load blog post"));
}

#[test]
fn detail_ignores_response_after_abandon() {
    let api = FakeApi::new().with_account(1, "alice", "secret1").with_blog(3, 1, "Kept");
    let mut state = BlogDetailState::default();
    let ticket = state.begin();
    state.abandon();
    assert!(!state.apply(ticket, Ok(api.blog(3).unwrap())));
    assert_eq!(state.blog, None);
    assert!(!state.loading);
}

#[test]
fn detail_settle_hands_back_current_post() {
    let api = FakeApi::new().with_account(1, "alice", "secret1").with_blog(4, 1, "Current");
    let mut state = BlogDetailState::default();
    let ticket = state.begin();

    let settled = state.settle(ticket, Ok(api.blog(4).unwrap()));

    assert_eq!(settled.unwrap().unwrap().id, 4);
    assert_eq!(state.blog.as_ref().map(|b| b.id), Some(4));
}

#[test]
fn detail_settle_drops_superseded_post_and_refusal() {
    let api = FakeApi::new()
        .with_account(1, "alice", "secret1")
        .with_blog(1, 1, "Older")
        .with_blog(2, 1, "Newer");
    let mut state = BlogDetailState::default();
    let first = state.begin();
    let second = state.begin();

    assert!(state.settle(second, Ok(api.blog(2).unwrap())).is_some());
    assert!(state.settle(first, Ok(api.blog(1).unwrap())).is_none());
    let refusal = ApiError::Forbidden("You can only edit your own blogs".to_owned());
    assert!(state.settle(first, Err(refusal)).is_none());

    assert_eq!(state.blog.as_ref().map(|b| b.title.as_str()), Some("Newer"));
    assert_eq!(state.error, None);
}

#[test]
fn detail_settle_passes_current_refusal_through() {
    let mut state = BlogDetailState::default();
    let ticket = state.begin();
    let refusal = ApiError::Forbidden("You can only edit your own blogs".to_owned());

    let settled = state.settle(ticket, Err(refusal));

    assert!(matches!(settled, Some(Err(ApiError::Forbidden(_)))));
    assert_eq!(state.blog, None);
}

// =============================================================
// load_my_blogs
// =============================================================

#[test]
fn my_blogs_returns_only_own_posts() {
    let api = FakeApi::new()
        .with_account(1, "alice", "secret1")
        .with_account(2, "bob", "secret2")
        .with_blog(1, 1, "Mine")
        .with_blog(2, 2, "Theirs");
    let ctl = AuthController::new(api, TokenStore::new(MemoryStorage::default()));
    block_on(ctl.login("alice@example.com", "secret1")).unwrap();

    let page = block_on(load_my_blogs(&ctl, 1, 10)).unwrap();

    assert_eq!(page.blogs.iter().map(|b| b.title.as_str()).collect::<Vec<_>>(), vec!["Mine"]);
}

#[test]
fn my_blogs_without_session_never_reaches_network() {
    let ctl = AuthController::new(FakeApi::new(), TokenStore::new(MemoryStorage::default()));
    let err = block_on(load_my_blogs(&ctl, 1, 10)).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(ctl.api().call_count("my_blogs"), 0);
}
