use crate::auth::settings::AuthSettings;
use crate::core::logger::Logger;
use serde_json::Value;
use std::collections::HashMap;

/// Azure AD login endpoint used unless overridden on the command line.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

const USER_AGENT: &str = concat!("pmtoken/", env!("CARGO_PKG_VERSION"));

/// An access token together with the lifetime the endpoint reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub expires_in_secs: u64,
}

impl Token {
    /// Remaining lifetime in whole minutes, rounded down.
    pub fn expires_in_minutes(&self) -> u64 {
        self.expires_in_secs / 60
    }
}

/// Failure while requesting a token, covering transport problems and
/// unexpected endpoint responses alike.
#[derive(Debug)]
pub struct TokenRequestError {
    pub message: String,
    source: Option<reqwest::Error>,
}

impl TokenRequestError {
    pub fn new(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }
}

impl std::fmt::Display for TokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token request failed: {}", self.message)
    }
}

impl std::error::Error for TokenRequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for TokenRequestError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            message: e.to_string(),
            source: Some(e),
        }
    }
}

/// Requests a client credentials token from the v1 Azure AD endpoint at
/// `{authority}/{tenant}/oauth2/token`.
pub async fn acquire_token(
    authority: &str,
    settings: &AuthSettings,
) -> Result<Token, TokenRequestError> {
    let token_url = format!(
        "{}/{}/oauth2/token",
        authority.trim_end_matches('/'),
        settings.tenant_id
    );
    Logger::debug(&format!("Requesting token from {token_url}"));

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let mut params = HashMap::new();
    params.insert("grant_type", "client_credentials".to_string());
    params.insert("resource", settings.resource_uri.clone());
    params.insert("client_id", settings.client_id.clone());
    params.insert("client_secret", settings.client_secret.clone());

    let response = client.post(&token_url).form(&params).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(TokenRequestError::new(format!(
            "{token_url} returned {status}: {text}"
        )));
    }

    let payload: Value = response.json().await?;

    let access_token = payload["access_token"]
        .as_str()
        .ok_or_else(|| TokenRequestError::new("No access_token in response".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        expires_in_secs: expires_in_secs(&payload)?,
    })
}

// The v1 endpoint reports expires_in as a decimal string, other OAuth
// servers use a number.
fn expires_in_secs(payload: &Value) -> Result<u64, TokenRequestError> {
    match &payload["expires_in"] {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| TokenRequestError::new("Invalid expires_in in response".to_string())),
        Value::String(s) => s
            .parse()
            .map_err(|_| TokenRequestError::new("Invalid expires_in in response".to_string())),
        Value::Null => Err(TokenRequestError::new(
            "No expires_in in response".to_string(),
        )),
        _ => Err(TokenRequestError::new(
            "Invalid expires_in in response".to_string(),
        )),
    }
}
