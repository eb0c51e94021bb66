//! REST client integration tests
//!
//! Drive `ApiClient` against the stub API.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use axum::http::Method;
use integration_tests::{fixtures, unreachable_config, TestServer, TEST_TOKEN};
use poorroom_client::ApiClient;
use poorroom_common::ClientError;
use poorroom_core::{
    ChallengeFilter, ChallengeId, EmojiType, ImageFile, ProfileImage, RecordId, Status,
    UserUpdateRequest,
};

// ============================================================================
// Envelope and error mapping
// ============================================================================

#[tokio::test]
async fn test_challenge_detail_envelope() {
    let server = TestServer::start().await.unwrap();
    server.respond(
        Method::GET,
        "/challenge/3",
        200,
        &fixtures::envelope(fixtures::challenge(3, "No coffee week")),
    );

    let api = server.api().unwrap();
    let response = api.challenges().get(ChallengeId::new(3)).await.unwrap();

    assert_eq!(response.result.challenge_id, ChallengeId::new(3));
    assert_eq!(response.result.title, "No coffee week");
    assert_eq!(response.result.participant_count, 4);
    assert_eq!(response.result.extra["leaderNickname"], "host");
    assert_eq!(response.meta.success, Some(true));

    let request = &server.requests_to(&Method::GET, "/challenge/3")[0];
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Bearer {TEST_TOKEN}").as_str())
    );
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::GET, "/user/info", 401, r#"{"message":"expired"}"#);

    let err = server.api().unwrap().users().info().await.unwrap_err();

    match err {
        ClientError::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("expired"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparsable_success_body_is_decode_error() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::GET, "/mypage", 200, "<html>maintenance</html>");

    let err = server.api().unwrap().users().profile().await.unwrap_err();
    assert_eq!(err.error_code(), "DECODE_ERROR");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let api = ApiClient::from_config(&unreachable_config().unwrap()).unwrap();

    let err = api.challenges().get(ChallengeId::new(1)).await.unwrap_err();
    assert!(err.is_network(), "unexpected error: {err:?}");
    assert_eq!(err.status_code(), None);
}

// ============================================================================
// Challenges
// ============================================================================

#[tokio::test]
async fn test_search_sends_normalized_filters() {
    let server = TestServer::start().await.unwrap();
    server.respond(
        Method::GET,
        "/challenge/search",
        200,
        &fixtures::envelope(fixtures::search_result(&[1, 2])),
    );

    let filter = ChallengeFilter::default()
        .with("keyword", "coffee")
        .with("category", "food")
        .with("status", "");
    let response = server.api().unwrap().challenges().search(&filter).await.unwrap();

    assert_eq!(response.result.challenges.len(), 2);
    assert_eq!(response.result.total_count, Some(2));

    let request = &server.requests_to(&Method::GET, "/challenge/search")[0];
    assert_eq!(request.query.as_deref(), Some("category=food&keyword=coffee"));
}

#[tokio::test]
async fn test_join_without_id_sends_nothing() {
    let server = TestServer::start().await.unwrap();

    let err = server.api().unwrap().challenges().join(None).await.unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(
        err.to_string(),
        "Validation error: Missing required identity: challenge id"
    );
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_join_accepts_empty_body() {
    let server = TestServer::start().await.unwrap();
    server.respond_raw(Method::POST, "/challenge/join/8", 200, "");

    let ack = server
        .api()
        .unwrap()
        .challenges()
        .join(Some(ChallengeId::new(8)))
        .await
        .unwrap();

    assert!(ack.result.is_null());
    assert_eq!(server.requests_to(&Method::POST, "/challenge/join/8").len(), 1);
}

// ============================================================================
// User
// ============================================================================

#[tokio::test]
async fn test_my_page_and_challenges() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::GET, "/mypage", 200, &fixtures::envelope(fixtures::my_page()));
    server.respond(
        Method::GET,
        "/mypage/challenges",
        200,
        &fixtures::envelope(fixtures::my_challenges(&[4, 5])),
    );

    let api = server.api().unwrap();
    let page = api.users().profile().await.unwrap().into_result();
    assert_eq!(page.profile.name, "saver");
    assert_eq!(page.user_challenge_result.total(), 6);

    let joined = api.users().challenges().await.unwrap().into_result();
    let first = &joined.participated_challenges[0];
    assert_eq!(first.status, Status::Proceeding);
    assert_eq!(first.status.label(), "참가중");
    assert_eq!(first.remaining_seats(), 6);
}

#[tokio::test]
async fn test_profile_update_uploads_before_patch() {
    let server = TestServer::start().await.unwrap();
    let base_url = server.base_url();
    server.respond(
        Method::POST,
        "/image/presigned-url",
        200,
        &fixtures::envelope(fixtures::presigned(&base_url, "me.png")),
    );
    server.respond_raw(Method::PUT, "/upload/me.png", 200, "");
    server.respond(Method::PATCH, "/mypage/profile", 200, &fixtures::ack());

    let update = UserUpdateRequest::new("saver").with_image(ProfileImage {
        image: Some(ImageFile::new("me.png", "image/png", vec![1, 2, 3])),
        image_url: "https://cdn.example.com/profile/old.png".into(),
    });
    server.api().unwrap().users().update_profile(&update).await.unwrap();

    let requests = server.requests();
    let order: Vec<_> = requests.iter().map(|r| (r.method.clone(), r.path.as_str())).collect();
    assert_eq!(
        order,
        vec![
            (Method::POST, "/image/presigned-url"),
            (Method::PUT, "/upload/me.png"),
            (Method::PATCH, "/mypage/profile"),
        ]
    );

    assert_eq!(
        requests[0].json(),
        serde_json::json!({"fileName": "me.png", "type": "image/png"})
    );

    let upload = &requests[1];
    assert_eq!(upload.body.as_ref(), &[1, 2, 3]);
    assert_eq!(upload.content_type.as_deref(), Some("image/png"));
    assert!(upload.authorization.is_none());

    assert_eq!(
        requests[2].json(),
        serde_json::json!({
            "nickName": "saver",
            "profileImgUrl": "https://cdn.example.com/profile/me.png"
        })
    );
}

#[tokio::test]
async fn test_profile_update_without_new_image_keeps_url() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::PATCH, "/mypage/profile", 200, &fixtures::ack());

    let update = UserUpdateRequest::new("renamed").with_image(ProfileImage {
        image: None,
        image_url: "https://cdn.example.com/profile/old.png".into(),
    });
    server.api().unwrap().users().update_profile(&update).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].json()["profileImgUrl"],
        "https://cdn.example.com/profile/old.png"
    );
}

#[tokio::test]
async fn test_failed_upload_skips_patch() {
    let server = TestServer::start().await.unwrap();
    let base_url = server.base_url();
    server.respond(
        Method::POST,
        "/image/presigned-url",
        200,
        &fixtures::envelope(fixtures::presigned(&base_url, "me.png")),
    );
    server.respond_raw(Method::PUT, "/upload/me.png", 403, "SignatureDoesNotMatch");

    let update = UserUpdateRequest::new("saver").with_image(ProfileImage {
        image: Some(ImageFile::new("me.png", "image/png", vec![9])),
        image_url: String::new(),
    });
    let err = server.api().unwrap().users().update_profile(&update).await.unwrap_err();

    assert_eq!(err.status_code(), Some(403));
    assert!(server.requests_to(&Method::PATCH, "/mypage/profile").is_empty());
}

// ============================================================================
// Emoji
// ============================================================================

#[tokio::test]
async fn test_emoji_add_and_remove() {
    let server = TestServer::start().await.unwrap();
    server.respond(Method::POST, "/feed/11/emoji", 200, &fixtures::ack());
    server.respond(Method::DELETE, "/feed/11/emoji", 200, &fixtures::ack());

    let api = server.api().unwrap();
    api.emojis().add(RecordId::new(11), EmojiType::WellDone).await.unwrap();
    api.emojis().remove(RecordId::new(11), EmojiType::WellDone).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].json(), serde_json::json!({"type": "WELLDONE"}));
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].json(), serde_json::json!({"type": "WELLDONE"}));
}
