use dashboard_client::{ClientError, DashboardClient, WidgetPosition, WidgetSettings, WidgetSettingsUpdate};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn setup() -> (MockServer, DashboardClient) {
    let server = MockServer::start().await;
    let client = DashboardClient::new(&server.uri()).expect("client");
    (server, client)
}

#[tokio::test]
async fn test_get_widget_settings() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/widget/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "botToken": "tok_live",
            "primaryColor": "#ff0000",
            "textColor": "#000000",
            "fontFamily": "Verdana, sans-serif",
            "position": "bottom-left",
            "welcomeMessage": "Welcome!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = client.get_widget_settings().await.unwrap();
    assert_eq!(settings.bot_token, "tok_live");
    assert_eq!(settings.font_family, "Verdana, sans-serif");
    assert_eq!(settings.position, WidgetPosition::BottomLeft);
}

#[tokio::test]
async fn test_customize_sends_form_without_token() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/widget/customize"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "primary_color=%23123456&text_color=%23ffffff&font_family=Georgia%2C+serif\
             &position=bottom-left&welcome_message=Hi+there",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = WidgetSettings {
        bot_token: "must-not-leak".into(),
        primary_color: "#123456".into(),
        text_color: "#ffffff".into(),
        font_family: "Georgia, serif".into(),
        position: WidgetPosition::BottomLeft,
        welcome_message: "Hi there".into(),
    };
    client
        .update_widget_settings(&WidgetSettingsUpdate::from(&settings))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("must-not-leak"));
    assert!(!body.contains("token"));
}

#[tokio::test]
async fn test_regenerate_token() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/widget/regenerate-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "botToken": "tok_new" })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.regenerate_widget_token().await.unwrap(), "tok_new");
}

#[tokio::test]
async fn test_non_success_maps_to_api_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/widget/settings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
        .mount(&server)
        .await;

    match client.get_widget_settings().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_bearer_header_and_cookie_is_replayed() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s3cr3t; Path=/; HttpOnly")
                .set_body_json(json!({
                    "user": { "id": "u1", "name": "Ada", "email": "ada@example.com" }
                })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/widget/settings"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "botToken": "t",
            "primaryColor": "#007bff",
            "textColor": "#ffffff",
            "fontFamily": "Arial, sans-serif",
            "position": "bottom-right",
            "welcomeMessage": "Hi! How can I help you today?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = client.login("ada@example.com", "hunter22").await.unwrap();
    assert_eq!(auth.user.unwrap().name, "Ada");
    assert_eq!(client.session_cookies().as_deref(), Some("session=s3cr3t"));

    client.get_widget_settings().await.unwrap();

    let requests: Vec<Request> = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| !r.headers.contains_key("authorization")));
}

#[tokio::test]
async fn test_signup_error_message() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Email already in use" })),
        )
        .mount(&server)
        .await;

    let err = client
        .signup("Ada Lovelace", "ada@example.com", "Engines Ltd", "hunter22")
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Signup failed"), "Email already in use");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["full_name"], "Ada Lovelace");
    assert_eq!(sent["company_name"], "Engines Ltd");
}

#[tokio::test]
async fn test_analytics_days_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/analytics/dashboard"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalChats": 12 })))
        .expect(1)
        .mount(&server)
        .await;

    let data = client
        .analytics_dashboard(dashboard_client::DEFAULT_ANALYTICS_DAYS)
        .await
        .unwrap();
    assert_eq!(data["totalChats"], 12);
}

#[tokio::test]
async fn test_document_upload_and_delete() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d1",
            "name": "faq.txt",
            "size": 5,
            "type": "text/plain",
            "uploadedAt": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/d1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let doc = client
        .upload_document("faq.txt", b"hello".to_vec())
        .await
        .unwrap();
    assert_eq!(doc.id, "d1");
    assert!(doc.url.is_none());

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    client.delete_document("d1").await.unwrap();
}
