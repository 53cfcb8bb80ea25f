//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account e-mail
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Build credentials from any string-like values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Account e-mail
    pub email: String,
    /// Account password
    pub password: String,
    /// Display name
    pub name: String,
}

/// Signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account e-mail
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role, e.g. "admin"
    #[serde(default)]
    pub role: String,
}

/// Response of login and register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Always "bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// The account the token belongs to
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
