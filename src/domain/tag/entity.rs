// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::TagId;
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub owner_id: UserId,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<TagId>, owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_id,
            name: name.into(),
        }
    }

    /// A tag may only be attached to articles of the user who owns it.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
