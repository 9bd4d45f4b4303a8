//! Post aggregate service - every read and mutation of a post goes through here.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, Post, PostInput, PostPolicy, Principal};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, PostInputValidator, PostMutation, PostRepository, ProfileRepository};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    profiles: Arc<dyn ProfileRepository>,
    validator: Arc<dyn PostInputValidator>,
    clock: Arc<dyn Clock>,
    policy: PostPolicy,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        profiles: Arc<dyn ProfileRepository>,
        validator: Arc<dyn PostInputValidator>,
        clock: Arc<dyn Clock>,
        policy: PostPolicy,
    ) -> Self {
        Self {
            posts,
            profiles,
            validator,
            clock,
            policy,
        }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all_by_date_desc().await?)
    }

    pub async fn get(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.load(post_id).await
    }

    pub async fn create(
        &self,
        principal: &Principal,
        input: PostInput,
    ) -> Result<Post, DomainError> {
        self.validator.validate(&input).into_result()?;

        let post = Post::new(principal.id, input, self.clock.now());
        let saved = self.posts.save(post).await?;

        tracing::info!(post_id = %saved.id, user_id = %principal.id, "Post created");
        Ok(saved)
    }

    /// Delete a post. The profile check and the authorship check are
    /// independent preconditions.
    pub async fn delete(&self, principal: &Principal, post_id: Uuid) -> Result<(), DomainError> {
        if self.policy.require_profile_on_delete {
            self.profiles
                .find_by_user_id(principal.id)
                .await?
                .ok_or_else(|| DomainError::profile_not_found(principal.id))?;
        }

        let post = self.load(post_id).await?;
        self.policy
            .authorize(self.policy.delete_post, principal, post.user_id)
            .inspect_err(|_| {
                tracing::warn!(%post_id, user_id = %principal.id, "Delete rejected: not the author");
            })?;

        match self.posts.delete(post_id).await {
            Ok(()) => {}
            Err(RepoError::NotFound) => return Err(DomainError::post_not_found(post_id)),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(%post_id, user_id = %principal.id, "Post deleted");
        Ok(())
    }

    pub async fn like(&self, principal: &Principal, post_id: Uuid) -> Result<Post, DomainError> {
        let user_id = principal.id;
        let saved = self
            .mutate(post_id, Box::new(move |post: Post| post.with_like(user_id)))
            .await?;

        tracing::debug!(%post_id, %user_id, likes = saved.likes.len(), "Post liked");
        Ok(saved)
    }

    pub async fn unlike(&self, principal: &Principal, post_id: Uuid) -> Result<Post, DomainError> {
        let user_id = principal.id;
        let saved = self
            .mutate(post_id, Box::new(move |post: Post| post.without_like(user_id)))
            .await?;

        tracing::debug!(%post_id, %user_id, likes = saved.likes.len(), "Post unliked");
        Ok(saved)
    }

    pub async fn add_comment(
        &self,
        principal: &Principal,
        post_id: Uuid,
        input: PostInput,
    ) -> Result<Post, DomainError> {
        self.validator.validate(&input).into_result()?;

        let comment = Comment::new(principal.id, input, self.clock.now());
        let comment_id = comment.id;
        let saved = self
            .mutate(post_id, Box::new(move |post: Post| Ok(post.with_comment(comment))))
            .await?;

        tracing::info!(%post_id, %comment_id, user_id = %principal.id, "Comment added");
        Ok(saved)
    }

    pub async fn remove_comment(
        &self,
        principal: &Principal,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Post, DomainError> {
        let (policy, caller) = (self.policy, *principal);
        let saved = self
            .mutate(
                post_id,
                Box::new(move |post: Post| {
                    let author = post
                        .comment(comment_id)
                        .map(|c| c.user_id)
                        .ok_or(DomainError::CommentNotFound { id: comment_id })?;
                    policy.authorize(policy.remove_comment, &caller, author)?;
                    post.without_comment(comment_id)
                }),
            )
            .await?;

        tracing::info!(%post_id, %comment_id, user_id = %principal.id, "Comment removed");
        Ok(saved)
    }

    async fn mutate(&self, post_id: Uuid, mutation: PostMutation) -> Result<Post, DomainError> {
        self.posts
            .update_with(post_id, mutation)
            .await?
            .ok_or_else(|| DomainError::post_not_found(post_id))
    }

    async fn load(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(post_id))
    }
}
