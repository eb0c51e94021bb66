//! Query layer integration tests
//!
//! Cache hits, invalidation after mutations, and query state transitions.
//!
//! Run with: cargo test -p integration-tests --test query_tests

use axum::http::Method;
use integration_tests::{fixtures, TestServer};
use poorroom_cache::{ChallengeKeys, MyPageKeys, UserKeys};
use poorroom_core::{ChallengeFilter, ChallengeId, UserUpdateRequest};
use poorroom_query::MutationStatus;

#[tokio::test]
async fn test_detail_query_served_from_cache() {
    let server = TestServer::start().await.unwrap();
    server.respond(
        Method::GET,
        "/challenge/1",
        200,
        &fixtures::envelope(fixtures::challenge(1, "Lunchbox month")),
    );
    let ctx = server.context().unwrap();

    let first = ctx.challenges().detail(ChallengeId::new(1));
    assert!(first.state().is_idle());
    first.fetch().await.unwrap();
    assert!(first.state().is_success());

    // A second handle for the same key hits the cache.
    let second = ctx.challenges().detail(ChallengeId::new(1));
    let data = second.fetch().await.unwrap();

    assert_eq!(data.result.title, "Lunchbox month");
    assert_eq!(server.requests_to(&Method::GET, "/challenge/1").len(), 1);
}

#[tokio::test]
async fn test_failed_query_is_not_cached() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::GET, "/user/info", 503, "busy");
    let ctx = server.context().unwrap();

    let info = ctx.users().info();
    let err = info.fetch().await.unwrap_err();
    assert!(err.is_server_error());
    assert!(info.state().is_error());
    assert!(!ctx.cache().contains(&UserKeys::info()));

    server.respond(
        Method::GET,
        "/user/info",
        200,
        &fixtures::envelope(fixtures::user_info("saver")),
    );
    let data = info.fetch().await.unwrap();
    assert_eq!(data.result.nickname, "saver");
    assert_eq!(server.requests_to(&Method::GET, "/user/info").len(), 2);
}

#[tokio::test]
async fn test_list_key_ignores_filter_order() {
    let server = TestServer::start().await.unwrap();
    server.respond(
        Method::GET,
        "/challenge/search",
        200,
        &fixtures::envelope(fixtures::search_result(&[1])),
    );
    let ctx = server.context().unwrap();

    let a = ChallengeFilter::default().with("category", "food").with("keyword", "");
    let b = ChallengeFilter::default().with("keyword", "").with("category", "food");
    assert_eq!(ChallengeKeys::list(&a), ChallengeKeys::list(&b));

    ctx.challenges().list(&a).fetch().await.unwrap();
    ctx.challenges().list(&b).fetch().await.unwrap();

    assert_eq!(server.requests_to(&Method::GET, "/challenge/search").len(), 1);
}

#[tokio::test]
async fn test_join_invalidates_detail_and_my_challenges() {
    let server = TestServer::start().await.unwrap();
    let id = ChallengeId::new(2);
    server.respond(
        Method::GET,
        "/challenge/2",
        200,
        &fixtures::envelope(fixtures::challenge(2, "Walk to work")),
    );
    server.respond(
        Method::GET,
        "/mypage/challenges",
        200,
        &fixtures::envelope(fixtures::my_challenges(&[])),
    );
    server.respond(Method::POST, "/challenge/join/2", 200, &fixtures::ack());
    let ctx = server.context().unwrap();

    ctx.challenges().detail(id).fetch().await.unwrap();
    ctx.users().my_challenges().fetch().await.unwrap();
    assert!(ctx.cache().contains(&ChallengeKeys::detail(id)));

    let join = ctx.challenges().join(Some(id));
    join.mutate(()).await.unwrap();

    assert_eq!(join.status(), MutationStatus::Success);
    assert!(!ctx.cache().contains(&ChallengeKeys::detail(id)));
    assert!(!ctx.cache().contains(&MyPageKeys::challenges()));

    // Next read goes back to the server.
    ctx.challenges().detail(id).fetch().await.unwrap();
    assert_eq!(server.requests_to(&Method::GET, "/challenge/2").len(), 2);
}

#[tokio::test]
async fn test_failed_join_keeps_cache() {
    let server = TestServer::start().await.unwrap();
    let id = ChallengeId::new(6);
    server.respond(
        Method::GET,
        "/challenge/6",
        200,
        &fixtures::envelope(fixtures::challenge(6, "Full room")),
    );
    server.respond_raw(Method::POST, "/challenge/join/6", 409, r#"{"message":"full"}"#);
    let ctx = server.context().unwrap();

    ctx.challenges().detail(id).fetch().await.unwrap();

    let join = ctx.challenges().join(Some(id));
    let err = join.mutate(()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(409));
    assert_eq!(join.status(), MutationStatus::Error);
    assert_eq!(join.last_error().and_then(|e| e.status_code()), Some(409));
    assert!(ctx.cache().contains(&ChallengeKeys::detail(id)));
}

#[tokio::test]
async fn test_profile_update_invalidates_user_queries() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::GET, "/mypage", 200, &fixtures::envelope(fixtures::my_page()));
    server.respond(
        Method::GET,
        "/user/info",
        200,
        &fixtures::envelope(fixtures::user_info("saver")),
    );
    server.respond(
        Method::GET,
        "/mypage/challenges",
        200,
        &fixtures::envelope(fixtures::my_challenges(&[1])),
    );
    server.respond(Method::PATCH, "/mypage/profile", 200, &fixtures::ack());
    let ctx = server.context().unwrap();

    ctx.users().my_page().fetch().await.unwrap();
    ctx.users().info().fetch().await.unwrap();
    ctx.users().my_challenges().fetch().await.unwrap();

    ctx.users()
        .update_profile()
        .mutate(UserUpdateRequest::new("renamed"))
        .await
        .unwrap();

    assert!(!ctx.cache().contains(&MyPageKeys::all()));
    assert!(!ctx.cache().contains(&UserKeys::info()));
    assert!(ctx.cache().contains(&MyPageKeys::challenges()));
}

#[tokio::test]
async fn test_leave_invalidates_my_challenges_and_detail() {
    let server = TestServer::start().await.unwrap();
    let id = ChallengeId::new(4);
    server.respond(
        Method::GET,
        "/challenge/4",
        200,
        &fixtures::envelope(fixtures::challenge(4, "No taxi")),
    );
    server.respond(
        Method::GET,
        "/mypage/challenges",
        200,
        &fixtures::envelope(fixtures::my_challenges(&[4])),
    );
    server.respond(Method::DELETE, "/mypage/challenge/4", 200, &fixtures::ack());
    let ctx = server.context().unwrap();

    ctx.challenges().detail(id).fetch().await.unwrap();
    ctx.users().my_challenges().fetch().await.unwrap();

    ctx.users().leave_challenge().mutate(id).await.unwrap();

    assert!(ctx.cache().is_empty());
}
