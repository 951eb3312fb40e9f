/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// A tenant record: a unique namespace paired with its access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub namespace: String,
    pub token: String,
}

impl Tenant {
    pub fn new(namespace: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            token: token.into(),
        }
    }
}
