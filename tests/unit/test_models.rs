use assert_json_diff::assert_json_eq;
use ory_login_client::model::requests::GetLoginFlowRequest;
use ory_login_client::model::responses::GenericError;
use ory_login_client::presentation::flow::{
    AuthenticatorAssuranceLevel, FlowType, LoginFlow, LoginFlowState,
};
use ory_login_client::presentation::ui::{UiNodeType, UiTextType};
use serde_json::{Value, json};

fn api_flow_with_errors() -> Value {
    json!({
        "id": "cf1e6b3c-2d0a-4c61-a0b5-41d8a2f5e0c2",
        "type": "api",
        "expires_at": "2026-10-19T12:00:00Z",
        "issued_at": "2026-10-19T11:00:00Z",
        "created_at": "2026-10-19T11:00:00Z",
        "updated_at": "2026-10-19T11:05:00Z",
        "request_url": "https://demo.projects.oryapis.com/self-service/login/api",
        "active": "password",
        "refresh": false,
        "requested_aal": "aal2",
        "state": "sent_email",
        "organization_id": null,
        "ui": {
            "action": "https://demo.projects.oryapis.com/self-service/login?flow=cf1e6b3c",
            "method": "POST",
            "messages": [
                {"id": 4000006, "text": "The provided credentials are invalid, check for spelling mistakes in your password or username, email address, or phone number.", "type": "error", "context": {}}
            ],
            "nodes": [
                {
                    "type": "input",
                    "group": "default",
                    "attributes": {"name": "identifier", "type": "text", "value": "user@example.com", "required": true, "disabled": false, "node_type": "input"},
                    "messages": [],
                    "meta": {"label": {"id": 1070004, "text": "ID", "type": "info"}}
                },
                {
                    "type": "img",
                    "group": "totp",
                    "attributes": {"id": "totp_qr", "src": "data:image/png;base64,AAAA", "width": 256, "height": 256, "node_type": "img"},
                    "messages": [],
                    "meta": {}
                },
                {
                    "type": "input",
                    "group": "password",
                    "attributes": {"name": "password", "type": "password", "required": true, "node_type": "input"},
                    "messages": [{"id": 4000002, "text": "Property password is missing.", "type": "error", "context": {"property": "password"}}],
                    "meta": {"label": {"id": 1070001, "text": "Password", "type": "info"}}
                }
            ]
        }
    })
}

#[test]
fn test_login_flow_fields() {
    let flow: LoginFlow = serde_json::from_value(api_flow_with_errors()).unwrap();

    assert_eq!(flow.id, "cf1e6b3c-2d0a-4c61-a0b5-41d8a2f5e0c2");
    assert_eq!(flow.flow_type, FlowType::Api);
    assert_eq!(flow.active.as_deref(), Some("password"));
    assert_eq!(flow.requested_aal, Some(AuthenticatorAssuranceLevel::Aal2));
    assert_eq!(flow.state, Some(LoginFlowState::SentEmail));
    assert_eq!(flow.organization_id, None);
    assert!(flow.csrf_token().is_none());
    assert_eq!(flow.ui.nodes[1].node_type, UiNodeType::Img);
    assert_eq!(flow.ui.nodes[0].attribute_value(), Some("user@example.com"));
}

#[test]
fn test_login_flow_error_messages() {
    let flow: LoginFlow = serde_json::from_value(api_flow_with_errors()).unwrap();
    let errors = flow.error_messages();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|m| m.text_type == UiTextType::Error));
    assert_eq!(errors[1].context, Some(json!({"property": "password"})));
}

#[test]
fn test_login_flow_reserializes_without_nulls() {
    let flow: LoginFlow = serde_json::from_value(api_flow_with_errors()).unwrap();
    let mut expected = api_flow_with_errors();
    expected
        .as_object_mut()
        .unwrap()
        .remove("organization_id");
    assert_json_eq!(serde_json::to_value(&flow).unwrap(), expected);
}

#[test]
fn test_missing_required_field_fails() {
    let mut value = api_flow_with_errors();
    value.as_object_mut().unwrap().remove("ui");
    assert!(serde_json::from_value::<LoginFlow>(value).is_err());
}

#[test]
fn test_generic_error_shapes() {
    let body = r#"{"error":{"id":"security_csrf_violation","code":403,"status":"Forbidden","reason":"Please retry the flow and optionally clear your cookies.","message":"the request was rejected to protect you from Cross-Site-Request-Forgery"}}"#;
    let err = GenericError::from_body(body).unwrap();
    assert_eq!(err.id.as_deref(), Some("security_csrf_violation"));
    assert_eq!(err.status.as_deref(), Some("Forbidden"));
}

#[test]
fn test_request_serialization_skips_missing_cookie() {
    let request = GetLoginFlowRequest::new("abc");
    assert_eq!(serde_json::to_value(&request).unwrap(), json!({"id": "abc"}));
}
