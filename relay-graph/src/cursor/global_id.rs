use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use super::error::GlobalIdError;

const SEPARATOR: char = ':';

/// An opaque identifier addressing a single node regardless of the relation
/// it was reached through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalId(String);

impl GlobalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn decode(&self) -> Result<ResolvedGlobalId, GlobalIdError> {
        decode_global_id(&self.0)
    }
}

impl std::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GlobalId> for String {
    fn from(id: GlobalId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedGlobalId {
    pub type_name: String,
    pub local_id: String,
}

pub fn encode_global_id(
    type_name: &str,
    local_id: impl std::fmt::Display,
) -> Result<GlobalId, GlobalIdError> {
    validate_type_name(type_name)?;
    let raw = format!("{type_name}{SEPARATOR}{local_id}");
    Ok(GlobalId(general_purpose::STANDARD_NO_PAD.encode(raw)))
}

/// Decodes an untrusted global id.
///
/// Only the shape is checked here. Whether the type name is actually
/// registered is up to the registry.
pub fn decode_global_id(global_id: &str) -> Result<ResolvedGlobalId, GlobalIdError> {
    let bytes = general_purpose::STANDARD_NO_PAD
        .decode(global_id.as_bytes())
        .map_err(|_| GlobalIdError::NotBase64(global_id.to_string()))?;
    let raw = String::from_utf8(bytes).map_err(|_| GlobalIdError::NotUtf8(global_id.to_string()))?;
    let (type_name, local_id) = raw
        .split_once(SEPARATOR)
        .ok_or_else(|| GlobalIdError::MissingSeparator(global_id.to_string()))?;
    if type_name.is_empty() {
        return Err(GlobalIdError::EmptyTypeName);
    }
    Ok(ResolvedGlobalId {
        type_name: type_name.to_string(),
        local_id: local_id.to_string(),
    })
}

pub(crate) fn validate_type_name(type_name: &str) -> Result<(), GlobalIdError> {
    if type_name.is_empty() {
        return Err(GlobalIdError::EmptyTypeName);
    }
    if type_name.contains(SEPARATOR) {
        return Err(GlobalIdError::InvalidTypeName(type_name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_id_round_trip() -> anyhow::Result<()> {
        for (type_name, local_id) in [
            ("User", "1"),
            ("Task", ""),
            ("Project", "a:b:c"),
            ("Viewer", "ünïcødé"),
        ] {
            let id = encode_global_id(type_name, local_id)?;
            assert_eq!(
                decode_global_id(id.as_str())?,
                ResolvedGlobalId {
                    type_name: type_name.to_string(),
                    local_id: local_id.to_string(),
                }
            );
        }
        Ok(())
    }

    #[test]
    fn distinct_pairs_do_not_collide() -> anyhow::Result<()> {
        let a = encode_global_id("User", "1")?;
        let b = encode_global_id("Use", "r1")?;
        let c = encode_global_id("User", "11")?;
        assert_ne!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn rejects_unencodable_type_names() {
        assert_eq!(encode_global_id("", "1"), Err(GlobalIdError::EmptyTypeName));
        assert_eq!(
            encode_global_id("a:b", "1"),
            Err(GlobalIdError::InvalidTypeName("a:b".to_string()))
        );
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        assert!(matches!(
            decode_global_id("not base64!"),
            Err(GlobalIdError::NotBase64(_))
        ));
        let no_separator = general_purpose::STANDARD_NO_PAD.encode("User1");
        assert!(matches!(
            decode_global_id(&no_separator),
            Err(GlobalIdError::MissingSeparator(_))
        ));
        let empty_type = general_purpose::STANDARD_NO_PAD.encode(":1");
        assert_eq!(
            decode_global_id(&empty_type),
            Err(GlobalIdError::EmptyTypeName)
        );
        let not_utf8 = general_purpose::STANDARD_NO_PAD.encode([0xff, 0xfe, b':', b'1']);
        assert!(matches!(
            decode_global_id(&not_utf8),
            Err(GlobalIdError::NotUtf8(_))
        ));
    }
}
