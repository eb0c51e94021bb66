//! Feed integration tests
//!
//! Optimistic reactions end to end: feed board, query-layer mutations, and
//! the stub API.
//!
//! Run with: cargo test -p integration-tests --test feed_tests

use std::sync::Arc;

use axum::http::Method;
use integration_tests::{fixtures, TestServer};
use poorroom_core::{ChallengeId, EmojiType, FeedRecord, ReactionMutator, RecordId};
use poorroom_feed::FeedBoard;
use poorroom_query::MutationStatus;

fn record(id: u64, crazy: u32, selected: Option<&str>) -> FeedRecord {
    serde_json::from_value(fixtures::feed_record(id, crazy, selected)).unwrap()
}

#[tokio::test]
async fn test_reaction_kept_on_success() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::POST, "/feed/1/emoji", 200, &fixtures::ack());
    let ctx = server.context().unwrap();

    let mutations = Arc::new(ctx.emojis().mutator());
    let mutator: Arc<dyn ReactionMutator> = mutations.clone();
    let board = FeedBoard::new(ChallengeId::new(5), mutator);
    let item = board.mount(record(1, 2, None));

    let handle = item.on_reaction_click(EmojiType::Crazy).unwrap();
    handle.await.unwrap().unwrap();

    let model = item.render();
    assert_eq!(model.reactions[0].count, 3);
    assert!(model.reactions[0].selected);
    assert_eq!(model.detail_link, "/my-poor-room/5/1");
    assert_eq!(model.time_label, "오후 11:10");
    assert_eq!(model.current_charge, "12,000원");
    assert_eq!(mutations.add_status(), MutationStatus::Success);

    let requests = server.requests_to(&Method::POST, "/feed/1/emoji");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json(), serde_json::json!({"type": "CRAZY"}));
}

#[tokio::test]
async fn test_reaction_rolled_back_on_server_error() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::POST, "/feed/2/emoji", 500, "boom");
    let ctx = server.context().unwrap();

    let board = FeedBoard::new(ChallengeId::new(5), Arc::new(ctx.emojis().mutator()));
    board.mount(record(2, 2, Some("CRAZY")));
    let before = board.reactions(RecordId::new(2)).unwrap();

    // Switch CRAZY -> REGRETFUL, then let the server reject it.
    let handle = board.click(RecordId::new(2), EmojiType::Regretful).unwrap();
    let optimistic = board.reactions(RecordId::new(2)).unwrap();
    assert_eq!(optimistic.selected(), Some(EmojiType::Regretful));
    assert_eq!(optimistic.count(EmojiType::Crazy), 1);

    let err = handle.await.unwrap().unwrap_err();
    assert_eq!(err.code(), "REACTION_REJECTED");
    assert_eq!(err.to_string(), "Reaction rejected by server: HTTP 500: boom");

    assert_eq!(board.reactions(RecordId::new(2)).unwrap(), before);
    assert_eq!(server.requests_to(&Method::POST, "/feed/2/emoji").len(), 1);
    assert!(server.requests_to(&Method::DELETE, "/feed/2/emoji").is_empty());
}

#[tokio::test]
async fn test_unselect_sends_delete() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::DELETE, "/feed/3/emoji", 200, &fixtures::ack());
    let ctx = server.context().unwrap();

    let board = FeedBoard::new(ChallengeId::new(5), Arc::new(ctx.emojis().mutator()));
    board.mount(record(3, 1, Some("CRAZY")));

    board
        .click(RecordId::new(3), EmojiType::Crazy)
        .unwrap()
        .await
        .unwrap()
        .unwrap();

    let reactions = board.reactions(RecordId::new(3)).unwrap();
    assert_eq!(reactions.count(EmojiType::Crazy), 0);
    assert_eq!(reactions.selected(), None);

    let requests = server.requests_to(&Method::DELETE, "/feed/3/emoji");
    assert_eq!(requests[0].json(), serde_json::json!({"type": "CRAZY"}));
}

#[tokio::test]
async fn test_comment_click_sends_nothing() {
    let server = TestServer::start().await.unwrap();
    let ctx = server.context().unwrap();

    let board = FeedBoard::new(ChallengeId::new(5), Arc::new(ctx.emojis().mutator()));
    let item = board.mount(record(4, 0, None));
    let before = item.render();

    assert!(item.on_reaction_click(EmojiType::Comment).is_none());
    assert_eq!(item.render(), before);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_unmounted_record_keeps_late_state() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::POST, "/feed/5/emoji", 500, "boom");
    let ctx = server.context().unwrap();

    let board = FeedBoard::new(ChallengeId::new(5), Arc::new(ctx.emojis().mutator()));
    let item = board.mount(record(5, 0, None));

    let handle = item.on_reaction_click(EmojiType::WellDone).unwrap();
    let optimistic = item.machine().reactions();
    assert!(board.unmount(RecordId::new(5)));

    assert!(handle.await.unwrap().is_err());
    assert_eq!(item.machine().reactions(), optimistic);
}
