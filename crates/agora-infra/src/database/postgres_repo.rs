//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use agora_core::domain::{Post, Profile};
use agora_core::error::{DomainError, RepoError};
use agora_core::ports::{PostMutation, PostRepository, ProfileRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::profile::{self, Entity as ProfileEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL profile repository.
pub type PostgresProfileRepository = PostgresBaseRepository<ProfileEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_by_date_desc(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    /// Holds a row lock (`SELECT ... FOR UPDATE`) from read to write, so
    /// concurrent likes and comments on one post serialize instead of
    /// overwriting each other.
    async fn update_with(
        &self,
        id: Uuid,
        mutation: PostMutation,
    ) -> Result<Option<Post>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let Some(current) = PostEntity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        // Dropping the transaction on error rolls it back
        let next: post::ActiveModel = mutation(current.into())?.into();
        let saved = next
            .update(&txn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(saved.into()))
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        tracing::debug!(%user_id, "Finding profile by user");

        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}
