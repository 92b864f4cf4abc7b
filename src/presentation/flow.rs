/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::ui::{UiContainer, UiText, UiTextType};
use chrono::{DateTime, Duration, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How the flow was initialized
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    /// Native apps and other API clients
    Api,
    /// Browser based flows protected by CSRF cookies
    Browser,
    /// A flow type this client does not know yet
    #[serde(untagged)]
    Other(String),
}

/// Authenticator assurance level requested by the flow
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticatorAssuranceLevel {
    /// No authentication
    Aal0,
    /// First factor
    Aal1,
    /// Second factor
    Aal2,
    /// Reserved
    Aal3,
    /// A level this client does not know yet
    #[serde(untagged)]
    Other(String),
}

/// Step the login flow is currently in
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginFlowState {
    /// Waiting for the user to pick a method
    ChooseMethod,
    /// A one-time code was sent by email
    SentEmail,
    /// The challenge was passed
    PassedChallenge,
    /// A state this client does not know yet
    #[serde(untagged)]
    Other(String),
}

/// Current state of a login attempt
///
/// The schema is owned by the identity service. Fields this crate does not
/// model are kept in `extra`, so the record serializes back to what was received.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginFlow {
    /// Credential type the user is currently using, e.g. `password`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    /// When the flow was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the flow expires; submitting after this fails
    pub expires_at: DateTime<Utc>,
    /// Flow id
    pub id: String,
    /// When the flow was issued
    pub issued_at: DateTime<Utc>,
    /// OAuth2 login challenge, when the flow belongs to an OAuth2 login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2_login_challenge: Option<String>,
    /// OAuth2 login request details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2_login_request: Option<Value>,
    /// Organization the flow is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// True when the flow re-authenticates an existing session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<bool>,
    /// Initial URL of the request
    pub request_url: String,
    /// Requested assurance level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_aal: Option<AuthenticatorAssuranceLevel>,
    /// Where to send the user after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
    /// Code to exchange for a session token (native apps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token_exchange_code: Option<String>,
    /// Current step of the flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<LoginFlowState>,
    /// Data passed through to webhooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient_payload: Option<Value>,
    /// Flow type
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    /// UI to render
    pub ui: UiContainer,
    /// When the flow was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginFlow {
    /// Whether the flow has expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the flow has expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time left before expiry, `None` once expired
    #[must_use]
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        if self.is_expired_at(now) {
            None
        } else {
            Some(self.expires_at - now)
        }
    }

    /// Error messages of the flow and its nodes
    #[must_use]
    pub fn error_messages(&self) -> Vec<&UiText> {
        self.ui
            .all_messages()
            .filter(|message| message.text_type == UiTextType::Error)
            .collect()
    }

    /// CSRF token of browser flows
    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.ui
            .node_by_name("csrf_token")
            .and_then(|node| node.attribute_value())
    }
}
