use serde::{Deserialize, Serialize};

/// Role attached to an authenticated session. Immutable for the session's
/// lifetime.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Citizen,
    Administrator,
}

impl Role {
    /// Storage representation used for the persisted `userType` key.
    pub fn as_storage_str(self) -> &'static str {
        match self {
            Role::Citizen => "user",
            Role::Administrator => "admin",
        }
    }

    /// Parses the persisted `userType` key; anything but `admin` is a citizen.
    pub fn from_storage_str(value: &str) -> Self {
        if value == "admin" {
            Role::Administrator
        } else {
            Role::Citizen
        }
    }
}

/// Identity payload persisted under the `user` storage key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Backend identifier of the subject (`userId` or `adminId`).
    pub subject_id: i64,
    /// Human-readable identity (citizen email or admin username).
    pub display_identity: String,
}

/// Authenticated session. At most one is active at a time; the token is
/// opaque and forwarded on every authenticated request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn new(identity: Identity, role: Role, token: String) -> Self {
        Self {
            identity,
            role,
            token,
        }
    }
}
