use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as exposed by an identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: Option<String>,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
}
