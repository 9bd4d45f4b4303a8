use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Profile};
use crate::error::{DomainError, RepoError};

/// A change applied to a post while the store holds it exclusively.
pub type PostMutation = Box<dyn FnOnce(Post) -> Result<Post, DomainError> + Send>;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, newest first.
    async fn find_all_by_date_desc(&self) -> Result<Vec<Post>, RepoError>;

    /// Load, mutate and persist one post with no other writer in between.
    /// Returns `Ok(None)` if the post does not exist. A mutation error
    /// leaves the stored post untouched.
    async fn update_with(
        &self,
        id: Uuid,
        mutation: PostMutation,
    ) -> Result<Option<Post>, DomainError>;
}

/// Profile repository.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;
}
