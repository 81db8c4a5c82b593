//! Conversion of fetched ledger objects into [`ProfileRecord`]s.
//!
//! Objects must be fetched with [`FetchOptions::content_and_owner`](sui_profile_types::FetchOptions::content_and_owner).
//! Rules, in order:
//! 1. a fetch error or a missing object maps to `None`
//! 2. missing content or owner is a [`ProfileError::MalformedObject`]
//! 3. anything but a `::profile::Profile` Move object is a [`ProfileError::WrongType`]
//! 4. ownership other than address- or object-owned is a [`ProfileError::UnexpectedOwnership`]
//! 5. otherwise fields are extracted; a broken `data` JSON payload falls back to `{}`

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use sui_profile_types::address::{address_to_string, parse_address};
use sui_profile_types::{ObjectContent, ObjectResponse, ProfileRecord, SocialPlatform};

use crate::error::{ProfileError, Result};

/// Suffix of the profile struct's type tag (`<package>::profile::Profile`).
pub const PROFILE_TYPE_SUFFIX: &str = "::profile::Profile";

/// Map a fetched object to a profile.
pub fn map_to_profile(response: &ObjectResponse) -> Result<Option<ProfileRecord>> {
    let data = match response {
        ObjectResponse::Found(data) => data,
        ObjectResponse::NotFound { .. } | ObjectResponse::Error { .. } => return Ok(None),
    };
    let object_id = address_to_string(&data.object_id);

    let content = data.content.as_ref().ok_or_else(|| ProfileError::MalformedObject {
        object_id: object_id.clone(),
        reason: "missing content; fetch with content enabled".to_string(),
    })?;
    let owner = data.owner.as_ref().ok_or_else(|| ProfileError::MalformedObject {
        object_id: object_id.clone(),
        reason: "missing owner; fetch with owner enabled".to_string(),
    })?;

    let fields = match content {
        ObjectContent::MoveObject {
            type_string,
            fields,
        } if type_string.ends_with(PROFILE_TYPE_SUFFIX) => fields,
        ObjectContent::MoveObject { type_string, .. } => {
            return Err(ProfileError::WrongType {
                object_id,
                found: type_string.clone(),
            })
        }
        ObjectContent::Package => {
            return Err(ProfileError::WrongType {
                object_id,
                found: "package".to_string(),
            })
        }
    };

    let owner = owner
        .owned_by()
        .ok_or_else(|| ProfileError::UnexpectedOwnership {
            object_id: object_id.clone(),
            owner: owner.kind().to_string(),
        })?;

    let id = fields
        .get("id")
        .and_then(|id| id.get("id"))
        .and_then(Value::as_str)
        .and_then(|s| parse_address(s).ok())
        .ok_or_else(|| ProfileError::MalformedObject {
            object_id: object_id.clone(),
            reason: "missing or invalid id field".to_string(),
        })?;
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ProfileError::MalformedObject {
            object_id: object_id.clone(),
            reason: "missing name field".to_string(),
        })?
        .to_string();

    let mut social_handles = BTreeMap::new();
    for platform in SocialPlatform::ALL {
        let handle = string_field(fields, platform.move_field());
        if !handle.is_empty() {
            social_handles.insert(platform, handle);
        }
    }

    Ok(Some(ProfileRecord {
        id,
        owner,
        name,
        image_url: string_field(fields, "image_url"),
        description: string_field(fields, "description"),
        social_handles,
        extra_data: parse_extra_data(&object_id, fields.get("data")),
    }))
}

fn string_field(fields: &Value, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse the embedded JSON payload. Display data is best-effort.
fn parse_extra_data(object_id: &str, raw: Option<&Value>) -> Value {
    let raw = match raw.and_then(Value::as_str) {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Value::Object(Map::new()),
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(object_id, error = %e, "Failed to parse profile data JSON");
            Value::Object(Map::new())
        }
    }
}
