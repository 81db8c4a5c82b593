//! Typed profile records.
//!
//! A [`ProfileRecord`] is the decoded form of a `profile::Profile` Move object.
//! Identity fields (`id`, `owner`, `name`) are fixed once the object exists;
//! the display fields can be edited by the owner.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::address::hex_address;
use crate::{ObjectID, SuiAddress};

/// Platforms a profile can link a handle for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    X,
    Telegram,
}

impl SocialPlatform {
    /// Name of the Move struct field holding this platform's handle.
    pub fn move_field(&self) -> &'static str {
        match self {
            SocialPlatform::X => "x_account",
            SocialPlatform::Telegram => "telegram",
        }
    }

    pub const ALL: [SocialPlatform; 2] = [SocialPlatform::X, SocialPlatform::Telegram];
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialPlatform::X => f.write_str("x"),
            SocialPlatform::Telegram => f.write_str("telegram"),
        }
    }
}

/// One on-chain identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Object ID of the profile object.
    #[serde(with = "hex_address")]
    pub id: ObjectID,

    /// Address that owns the profile object.
    #[serde(with = "hex_address")]
    pub owner: SuiAddress,

    /// Registry-unique display name.
    pub name: String,

    pub image_url: String,

    pub description: String,

    /// Linked handles. Platforms without a handle are absent.
    #[serde(default)]
    pub social_handles: BTreeMap<SocialPlatform, String>,

    /// Free-form JSON payload stored alongside the profile.
    #[serde(default = "empty_object")]
    pub extra_data: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

impl ProfileRecord {
    /// Handle linked for `platform`, if any.
    pub fn handle(&self, platform: SocialPlatform) -> Option<&str> {
        self.social_handles.get(&platform).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use move_core_types::account_address::AccountAddress;

    #[test]
    fn test_profile_json_shape() {
        let mut social_handles = BTreeMap::new();
        social_handles.insert(SocialPlatform::Telegram, "alice_tg".to_string());
        let profile = ProfileRecord {
            id: AccountAddress::from_hex_literal("0x11").unwrap(),
            owner: AccountAddress::from_hex_literal("0xa").unwrap(),
            name: "alice".to_string(),
            image_url: String::new(),
            description: "hi".to_string(),
            social_handles,
            extra_data: serde_json::json!({"theme": "dark"}),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json["owner"],
            "0x000000000000000000000000000000000000000000000000000000000000000a"
        );
        assert_eq!(json["social_handles"]["telegram"], "alice_tg");
        assert_eq!(profile.handle(SocialPlatform::Telegram), Some("alice_tg"));
        assert_eq!(profile.handle(SocialPlatform::X), None);

        let back: ProfileRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
