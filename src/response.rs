use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every acknowledgement and error: `{"msg": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
