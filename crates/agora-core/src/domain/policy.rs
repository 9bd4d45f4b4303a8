//! Authorization policy for post mutations.

use uuid::Uuid;

use super::Principal;
use crate::error::DomainError;

/// Who may perform an operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any authenticated principal.
    Anyone,
    /// Only the principal that authored the resource.
    AuthorOnly,
}

/// Per-operation authorization rules for the post service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostPolicy {
    pub delete_post: Capability,
    pub remove_comment: Capability,
    /// Deleting a post requires the principal to have a profile. Off by default.
    pub require_profile_on_delete: bool,
}

impl Default for PostPolicy {
    fn default() -> Self {
        Self {
            delete_post: Capability::AuthorOnly,
            remove_comment: Capability::Anyone,
            require_profile_on_delete: false,
        }
    }
}

impl PostPolicy {
    /// Check `capability` for `principal` against the resource's author.
    pub fn authorize(
        &self,
        capability: Capability,
        principal: &Principal,
        author: Uuid,
    ) -> Result<(), DomainError> {
        match capability {
            Capability::Anyone => Ok(()),
            Capability::AuthorOnly if principal.id == author => Ok(()),
            Capability::AuthorOnly => Err(DomainError::NotAuthorized),
        }
    }
}
