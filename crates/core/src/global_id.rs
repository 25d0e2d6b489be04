//! Opaque global identifiers for the API boundary.
//!
//! A global id is `base64("<TypeName>:<uuid>")`. Clients treat it as an opaque
//! token; the server decodes it back into a typed identifier and rejects ids of
//! the wrong type.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Decoded global id: the type name plus the raw uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub type_name: String,
    pub uuid: Uuid,
}

impl GlobalId {
    pub fn new(type_name: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            type_name: type_name.into(),
            uuid,
        }
    }

    /// Encode to the opaque wire token.
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.type_name, self.uuid))
    }

    /// Decode an opaque token without checking its type.
    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| DomainError::invalid_id(format!("couldn't resolve to a node: {token}")))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| DomainError::invalid_id(format!("couldn't resolve to a node: {token}")))?;
        let (type_name, id) = raw
            .split_once(':')
            .ok_or_else(|| DomainError::invalid_id(format!("couldn't resolve to a node: {token}")))?;
        let uuid = Uuid::parse_str(id)
            .map_err(|_| DomainError::invalid_id(format!("couldn't resolve to a node: {token}")))?;
        Ok(Self::new(type_name, uuid))
    }

    /// Decode a token that must name entity type `E`.
    pub fn decode_as<E>(token: &str) -> DomainResult<E::Id>
    where
        E: Entity,
        E::Id: From<Uuid>,
    {
        let gid = Self::decode(token)?;
        if gid.type_name != E::TYPE_NAME {
            return Err(DomainError::invalid_id(format!(
                "must receive a {} id, got {}",
                E::TYPE_NAME,
                gid.type_name
            )));
        }
        Ok(E::Id::from(gid.uuid))
    }
}

/// Encode an entity's id as a global id token.
pub fn to_global_id<E>(id: &E::Id) -> String
where
    E: Entity,
    E::Id: Copy + Into<Uuid>,
{
    GlobalId::new(E::TYPE_NAME, (*id).into()).encode()
}
