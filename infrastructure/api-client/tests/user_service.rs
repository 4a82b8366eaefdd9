use std::sync::Arc;

use api_client::{ApiClient, UserServiceHttp};
use business::domain::errors::ClientError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::gateway::UserGateway;
use business::domain::user::model::UserPatch;
use httpmock::prelude::*;
use serde_json::json;
use storage::InMemoryTokenStore;

fn service(server: &MockServer) -> UserServiceHttp {
    let store = InMemoryTokenStore::with_token("admin-token");
    let client = ApiClient::new(server.base_url(), Arc::new(store));
    UserServiceHttp::new(Arc::new(client))
}

fn user_json(id: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "name": name, "email": format!("{}@example.com", id)})
}

#[tokio::test]
async fn should_decode_enveloped_user_list() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .header("authorization", "Bearer admin-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "success": true,
                    "data": [user_json("u1", "Ada"), user_json("u2", "Grace")]
                })
                .to_string(),
            );
    });

    let users = service(&server).list().await.unwrap();

    mock.assert();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, UserId::new("u2"));
    assert_eq!(users[1].email, "u2@example.com");
}

#[tokio::test]
async fn should_return_empty_list_when_envelope_has_no_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"success": true}).to_string());
    });

    let users = service(&server).list().await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn should_get_single_user_from_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/u1");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"success": true, "data": user_json("u1", "Ada")}).to_string());
    });

    let user = service(&server).get(&UserId::new("u1")).await.unwrap();

    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn should_report_unexpected_shape_when_user_is_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/u1");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"success": true, "data": null}).to_string());
    });

    let result = service(&server).get(&UserId::new("u1")).await;

    assert!(matches!(result, Err(ClientError::UnexpectedShape(_))));
}

#[tokio::test]
async fn should_send_only_changed_fields_on_user_update() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/users/u1")
            .json_body(json!({"name": "Ada L."}));
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"success": true, "data": user_json("u1", "Ada L.")}).to_string());
    });
    let patch = UserPatch {
        name: Some("Ada L.".to_string()),
        email: None,
    };

    let user = service(&server)
        .update(&UserId::new("u1"), &patch)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(user.name, "Ada L.");
}

#[tokio::test]
async fn should_surface_server_message_when_user_delete_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/users/u1");
        then.status(403)
            .header("content-type", "application/json")
            .body(json!({"success": false, "message": "Forbidden"}).to_string());
    });

    let result = service(&server).delete(&UserId::new("u1")).await;

    assert_eq!(result, Err(ClientError::api(403, "Forbidden")));
}

#[tokio::test]
async fn should_delete_user() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/users/u1");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"success": true}).to_string());
    });

    let result = service(&server).delete(&UserId::new("u1")).await;

    mock.assert();
    assert_eq!(result, Ok(()));
}
