/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::TOKEN_SAFETY_MARGIN_SECS;
use crate::presentation::serialization::string_or_number_opt;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of the OAuth token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Token type, typically `bearer`
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
    /// Granted scope
    #[serde(default)]
    pub scope: String,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub account_id: Option<String>,
    #[serde(rename = "user_name", default)]
    pub username: Option<String>,
}

/// An access token together with the instant it stops being valid
///
/// Tokens are never mutated; a refresh replaces the held token wholesale.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token
    pub access_token: String,
    /// Token type as reported by the server
    pub token_type: String,
    /// Granted scope
    pub scope: String,
    /// User the token was issued for
    pub user_id: Option<String>,
    /// Account the token was issued for
    pub account_id: Option<String>,
    /// Login name of the user
    pub username: Option<String>,
    /// Issue time plus the server-reported lifetime
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Builds a token from an endpoint response received at `issued_at`
    ///
    /// `expires_in` is a number of seconds.
    #[must_use]
    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            scope: response.scope,
            user_id: response.user_id,
            account_id: response.account_id,
            username: response.username,
            expires_at: issued_at + Duration::seconds(response.expires_in),
        }
    }

    /// Whether the token can still be used at `now`
    ///
    /// A token is usable only while `now` is more than the safety margin
    /// before its expiry.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_SAFETY_MARGIN_SECS) < self.expires_at
    }

    /// Whether the token can still be used now
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Seconds left before the token expires, negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }

    /// Value of the `Authorization` header, e.g. `Bearer abc123`
    ///
    /// The scheme is normalised to title case whatever the server reported.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let mut chars = self.token_type.chars();
        let scheme: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::from("Bearer"),
        };
        format!("{} {}", scheme, self.access_token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("account_id", &self.account_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
