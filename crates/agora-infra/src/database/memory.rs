//! In-memory repositories - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use agora_core::domain::{Post, Profile};
use agora_core::error::{DomainError, RepoError};
use agora_core::ports::{BaseRepository, PostMutation, PostRepository, ProfileRepository};

/// In-memory post store. Keeps insertion order so equal dates list stably.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_by_date_desc(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn update_with(
        &self,
        id: Uuid,
        mutation: PostMutation,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(slot) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let next = mutation(slot.clone())?;
        *slot = next.clone();
        Ok(Some(next))
    }
}

/// In-memory profile store.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Profile, Uuid> for InMemoryProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepoError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepoError> {
        let mut profiles = self.profiles.write().await;
        if profiles
            .iter()
            .any(|p| p.user_id == profile.user_id && p.id != profile.id)
        {
            return Err(RepoError::Constraint(
                "Profile already exists for user".to_string(),
            ));
        }
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut profiles = self.profiles.write().await;
        let index = profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        profiles.remove(index);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::domain::PostInput;
    use chrono::{Duration, Utc};

    fn post_at(offset_secs: i64) -> Post {
        Post::new(
            Uuid::new_v4(),
            PostInput {
                text: "some post text".to_string(),
                ..PostInput::default()
            },
            Utc::now() + Duration::seconds(offset_secs),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = post_at(0);

        repo.save(post.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(post_at(0)).await.unwrap();

        let liked = post.with_like(Uuid::new_v4()).unwrap();
        repo.save(liked.clone()).await.unwrap();

        let all = repo.find_all_by_date_desc().await.unwrap();
        assert_eq!(all, vec![liked]);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryPostRepository::new();
        let older = repo.save(post_at(-60)).await.unwrap();
        let newer = repo.save(post_at(0)).await.unwrap();

        let ids: Vec<Uuid> = repo
            .find_all_by_date_desc()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_concurrent_likes_are_all_kept() {
        let repo = std::sync::Arc::new(InMemoryPostRepository::new());
        let id = repo.save(post_at(0)).await.unwrap().id;

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                let user = Uuid::new_v4();
                tokio::spawn(async move {
                    repo.update_with(id, Box::new(move |p: Post| p.with_like(user)))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.likes.len(), 16);
    }

    #[tokio::test]
    async fn test_update_with_rejected_mutation_keeps_post() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(post_at(0)).await.unwrap();

        let result = repo
            .update_with(post.id, Box::new(|p: Post| p.without_like(Uuid::new_v4())))
            .await;

        assert!(matches!(result, Err(DomainError::NotLiked)));
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn test_update_with_missing_post() {
        let repo = InMemoryPostRepository::new();

        let result = repo
            .update_with(Uuid::new_v4(), Box::new(Ok::<Post, DomainError>))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = InMemoryPostRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_profile_unique_per_user() {
        let repo = InMemoryProfileRepository::new();
        let user = Uuid::new_v4();
        repo.save(Profile::new(user, "alice".to_string(), Utc::now()))
            .await
            .unwrap();

        let result = repo
            .save(Profile::new(user, "alice2".to_string(), Utc::now()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(
            repo.find_by_user_id(user).await.unwrap().unwrap().handle,
            "alice"
        );
    }
}
