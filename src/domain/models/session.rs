use serde::{Deserialize, Serialize};

/// The signed-in account. Built once per request by the identity provider and
/// handed to each collection; there is no process-wide current user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            email: None,
        }
    }
}
