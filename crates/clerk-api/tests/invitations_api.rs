use clerk_api::{ClerkClient, ClerkError, InvitationCreate, InvitationStatus, Pagination};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

fn client(server: &mockito::ServerGuard) -> ClerkClient {
    ClerkClient::new("sk_test_invites", server.url()).expect("client builds")
}

#[tokio::test]
async fn create_invitation_posts_exactly_required_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/org_1/invitations")
        .match_body(Matcher::Json(json!({
            "email_address": "a@b.com",
            "role": "org:member",
        })))
        .with_status(200)
        .with_body(r#"{"id":"orginv_1","status":"pending"}"#)
        .create_async()
        .await;

    let value = client(&server)
        .create_invitation("org_1", &InvitationCreate::new("a@b.com", "org:member"))
        .await
        .expect("create succeeds");

    mock.assert_async().await;
    assert_eq!(value["status"], "pending");
}

#[tokio::test]
async fn create_invitation_with_optional_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/org_1/invitations")
        .match_body(Matcher::Json(json!({
            "email_address": "a@b.com",
            "role": "org:admin",
            "inviter_user_id": "user_1",
            "redirect_url": "https://app.example/welcome",
        })))
        .with_status(200)
        .with_body(r#"{"id":"orginv_2"}"#)
        .create_async()
        .await;

    let create = InvitationCreate {
        inviter_user_id: Some("user_1".into()),
        redirect_url: Some("https://app.example/welcome".into()),
        ..InvitationCreate::new("a@b.com", "org:admin")
    };
    client(&server)
        .create_invitation("org_1", &create)
        .await
        .expect("create succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn create_invitation_requires_email() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .create_invitation("org_1", &InvitationCreate::new("", "org:member"))
        .await
        .expect_err("blank email");
    assert!(matches!(err, ClerkError::Validation(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn list_invitations_filters_by_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/organizations/org_1/invitations")
        .match_query(Matcher::Exact("limit=10&offset=0&status=pending".into()))
        .with_status(200)
        .with_body(r#"{"data":[],"total_count":0}"#)
        .create_async()
        .await;

    client(&server)
        .list_invitations("org_1", Pagination::default(), Some(InvitationStatus::Pending))
        .await
        .expect("list succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn get_invitation_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/organizations/org_1/invitations/orginv_1")
        .with_status(200)
        .with_body(r#"{"id":"orginv_1"}"#)
        .create_async()
        .await;

    client(&server)
        .get_invitation("org_1", "orginv_1")
        .await
        .expect("get succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn revoke_without_requesting_user_sends_no_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/org_1/invitations/orginv_1/revoke")
        .match_body("")
        .with_status(200)
        .with_body(r#"{"id":"orginv_1","status":"revoked"}"#)
        .create_async()
        .await;

    let value = client(&server)
        .revoke_invitation("org_1", "orginv_1", None)
        .await
        .expect("revoke succeeds");

    mock.assert_async().await;
    assert_eq!(value["status"], "revoked");
}

#[tokio::test]
async fn revoke_with_requesting_user_attributes_it() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/org_1/invitations/orginv_1/revoke")
        .match_body(Matcher::Json(json!({"requesting_user_id": "user_admin"})))
        .with_status(200)
        .with_body(r#"{"status":"revoked"}"#)
        .create_async()
        .await;

    client(&server)
        .revoke_invitation("org_1", "orginv_1", Some("user_admin"))
        .await
        .expect("revoke succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn email_and_role_are_sent_trimmed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/organizations/org_1/invitations")
        .match_body(Matcher::Json(json!({
            "email_address": "a@b.com",
            "role": "org:member",
        })))
        .with_status(200)
        .with_body(r#"{"id":"orginv_3"}"#)
        .create_async()
        .await;

    client(&server)
        .create_invitation("org_1", &InvitationCreate::new(" a@b.com ", "org:member "))
        .await
        .expect("create succeeds");

    mock.assert_async().await;
}
