//! Ledger object fetch results.
//!
//! A bulk object fetch yields one [`ObjectResponse`] per requested ID. The
//! response is a closed sum type so consumers match on it exhaustively instead
//! of probing optional fields:
//!
//! - [`ObjectResponse::Found`] - the object exists; `content`/`owner` are only
//!   populated when the matching [`FetchOptions`] flag was set
//! - [`ObjectResponse::NotFound`] - the ID does not name a live object
//! - [`ObjectResponse::Error`] - the node reported a per-object error

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ObjectID;

/// Projections requested from a bulk object fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchOptions {
    pub include_content: bool,
    pub include_owner: bool,
}

impl FetchOptions {
    /// Content and ownership, the projection profile mapping needs.
    pub fn content_and_owner() -> Self {
        Self {
            include_content: true,
            include_owner: true,
        }
    }
}

/// Outcome of fetching a single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectResponse {
    Found(ObjectData),
    NotFound { object_id: Option<ObjectID> },
    Error { object_id: Option<ObjectID>, reason: String },
}

/// Data of an object that exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    pub object_id: ObjectID,
    pub version: u64,
    pub digest: Option<String>,
    /// Parsed content; `None` when content was not requested.
    pub content: Option<ObjectContent>,
    /// Ownership; `None` when ownership was not requested.
    pub owner: Option<ObjectOwner>,
}

/// Content of an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectContent {
    /// A Move struct instance with its fields rendered as JSON.
    MoveObject { type_string: String, fields: Value },
    /// A published package.
    Package,
}

/// Object ownership information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectOwner {
    /// Owned by a single address.
    Address(ObjectID),
    /// Owned by another object (e.g. a dynamic field or wrapped child).
    Object(ObjectID),
    Shared { initial_shared_version: u64 },
    Immutable,
    /// Address-owned under consensus sequencing.
    ConsensusAddress { start_version: u64, owner: ObjectID },
    /// An ownership kind this client does not know about.
    Unknown(String),
}

impl ObjectOwner {
    /// The owning address for address- or object-owned objects.
    pub fn owned_by(&self) -> Option<ObjectID> {
        match self {
            ObjectOwner::Address(addr) | ObjectOwner::Object(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Short label for log and error messages.
    pub fn kind(&self) -> &str {
        match self {
            ObjectOwner::Address(_) => "AddressOwner",
            ObjectOwner::Object(_) => "ObjectOwner",
            ObjectOwner::Shared { .. } => "Shared",
            ObjectOwner::Immutable => "Immutable",
            ObjectOwner::ConsensusAddress { .. } => "ConsensusAddressOwner",
            ObjectOwner::Unknown(kind) => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use move_core_types::account_address::AccountAddress;

    #[test]
    fn test_owned_by_only_for_owned_kinds() {
        let addr = AccountAddress::from_hex_literal("0xa").unwrap();
        assert_eq!(ObjectOwner::Address(addr).owned_by(), Some(addr));
        assert_eq!(ObjectOwner::Object(addr).owned_by(), Some(addr));
        assert_eq!(ObjectOwner::Immutable.owned_by(), None);
        assert_eq!(
            ObjectOwner::Shared {
                initial_shared_version: 3
            }
            .owned_by(),
            None
        );
        assert_eq!(
            ObjectOwner::ConsensusAddress {
                start_version: 1,
                owner: addr
            }
            .kind(),
            "ConsensusAddressOwner"
        );
    }
}
