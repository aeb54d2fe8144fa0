use serde::{Deserialize, Serialize};

/// Fixed session validity window: 14 days.
pub const SESSION_TTL_SECS: i64 = 1_209_600;

/// Identity payload embedded under the token's `data` claim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionTokenData {
    /// Customer scope the session was checked under; absent on fresh logins
    #[serde(rename = "cId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(rename = "uEmail")]
    pub user_email: String,

    /// Customer id carried on the resolved user record
    #[serde(rename = "u_cId", default, skip_serializing_if = "Option::is_none")]
    pub user_customer_id: Option<String>,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub data: SessionTokenData,
    pub iat: i64,
    pub exp: i64,
}
