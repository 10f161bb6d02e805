//! 网关接口适配层的契约测试：用 wiremock 模拟
//! { "result": ... } 信封以及各种失败响应。

use planhub_client::api::{ApiClient, AuthApi, FollowApi, IdentityProvider, UsersApi};
use planhub_client::api::{RelationshipFetcher, UserDirectory};
use planhub_client::models::{ProfileStats, RelationKind};
use planhub_client::services::{FollowActionRelay, MyProfilePanel, ProfileTab};
use planhub_client::{AppError, Config};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, token: Option<&str>) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        api_timeout_secs: 5,
        auth_bearer_token: token.map(str::to_string),
        environment: "test".to_string(),
        log_level: "debug".to_string(),
    }
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&test_config(&server.uri(), None)).unwrap()
}

#[tokio::test]
async fn followers_listing_decodes_envelope_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/p-1/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "id": "u-2", "username": "beta" },
                { "id": "u-1", "username": "alpha" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    let records = api.get_followers("p-1").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].username.as_deref(), Some("beta"));
    assert_eq!(records[1].username.as_deref(), Some("alpha"));
}

#[tokio::test]
async fn followings_listing_hits_its_own_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/p-9/followings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "id": "u-1", "email": "a@b.com" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    let records = api
        .fetch(RelationKind::Followings, "p-9")
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert!(records[0].username.is_none());
}

#[tokio::test]
async fn missing_result_field_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/p-1/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    assert!(api.get_followers("p-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_recoverable_external_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/p-1/followers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    match api.get_followers("p-1").await {
        Err(AppError::ExternalService(_)) => {}
        other => panic!("expected external service error, got {:?}", other),
    }
}

#[tokio::test]
async fn unresolvable_profile_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/ghost/followers"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    match api.get_followers("ghost").await {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn identity_lookup_returns_current_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/myInfo"))
        .and(header("Authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "id": "u-me", "email": "me@planhub.dev" }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&test_config(&server.uri(), Some("token-1"))).unwrap();
    let api = AuthApi::new(client);
    let user = api.current_user().await.unwrap();

    assert_eq!(user.id, "u-me");
    assert_eq!(user.email.as_deref(), Some("me@planhub.dev"));
}

#[tokio::test]
async fn identity_failure_is_an_error_the_caller_treats_as_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/myInfo"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = AuthApi::new(client_for(&server).await);
    assert!(api.current_user().await.is_err());
}

#[tokio::test]
async fn user_directory_lists_raw_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "id": "u-1", "username": "alice", "roles": ["USER"] },
                { "id": "u-2", "roles": ["ADMIN"] }
            ]
        })))
        .mount(&server)
        .await;

    let api = UsersApi::new(client_for(&server).await);
    let records = assert_ok!(api.list_users().await);

    assert_eq!(records.len(), 2);
    assert!(!records[0].is_admin());
    assert!(records[1].is_admin());
}

#[tokio::test]
async fn panel_reactivation_reaches_the_gateway_twice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/follows/p-1/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "id": "u-1", "username": "alice" }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let api = FollowApi::new(client_for(&server).await);
    let stats = Arc::new(RwLock::new(ProfileStats::default()));
    let panel = MyProfilePanel::new(
        Arc::new(api),
        Some("p-1".to_string()),
        FollowActionRelay::new(stats),
    );

    // 切回旧标签重新拉取，不做记忆化
    panel.activate_tab(ProfileTab::Followers).await;
    panel.activate_tab(ProfileTab::Followers).await;
}
