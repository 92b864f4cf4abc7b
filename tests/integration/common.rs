// Common utilities for integration tests

use ory_login_client::prelude::*;
use serde_json::{Value, json};

/// Configuration pointing at a stub server, otherwise exactly what `Config::new` gives
pub fn test_config(server_url: &str) -> Config {
    Config::new("integration-test")
        .expect("valid slug")
        .with_base_url(server_url)
}

/// Client bound to a stub server
pub fn test_client(server_url: &str) -> Client {
    setup_logger();
    Client::new(test_config(server_url)).expect("client builds")
}

/// A browser login flow payload as returned by the service
pub fn login_flow_payload(id: &str) -> Value {
    json!({
        "id": id,
        "type": "browser",
        "expires_at": "2026-10-19T10:30:00Z",
        "issued_at": "2026-10-19T10:00:00Z",
        "created_at": "2026-10-19T10:00:00Z",
        "updated_at": "2026-10-19T10:00:00Z",
        "request_url": "https://integration-test.projects.oryapis.com/self-service/login/browser",
        "refresh": false,
        "requested_aal": "aal1",
        "state": "choose_method",
        "ui": {
            "action": format!("https://integration-test.projects.oryapis.com/self-service/login?flow={id}"),
            "method": "POST",
            "nodes": [
                {
                    "type": "input",
                    "group": "default",
                    "attributes": {"name": "csrf_token", "type": "hidden", "value": "csrf-secret", "required": true, "disabled": false, "node_type": "input"},
                    "messages": [],
                    "meta": {}
                },
                {
                    "type": "input",
                    "group": "password",
                    "attributes": {"name": "password", "type": "password", "required": true, "disabled": false, "node_type": "input"},
                    "messages": [],
                    "meta": {"label": {"id": 1070001, "text": "Password", "type": "info"}}
                }
            ]
        }
    })
}
