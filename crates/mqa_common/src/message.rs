//! Message record fetched from the upstream messaging API.

use serde::{Deserialize, Serialize};

/// A single member message. Values arrive as-is from upstream and carry
/// no format guarantees; missing fields are empty. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Upstream-assigned id; may be empty.
    #[serde(default)]
    pub id: String,
    /// Display name of the author; may be empty.
    #[serde(default)]
    pub member_name: String,
    /// Message body.
    #[serde(default)]
    pub text: String,
    /// Raw timestamp string, format not guaranteed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
