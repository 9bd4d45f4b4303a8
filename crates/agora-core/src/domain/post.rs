use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Payload shared by post creation and commenting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A single like - at most one per user on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "user")]
    pub user_id: Uuid,
}

/// A comment owned by a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment authored by `user_id`.
    pub fn new(user_id: Uuid, input: PostInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: input.text,
            name: input.name,
            avatar: input.avatar,
            user_id,
            created_at,
        }
    }
}

/// Post aggregate - a post together with the likes and comments it owns.
///
/// Likes and comments are kept newest first. Mutations never touch `self`;
/// they return the next version of the aggregate so a failed write leaves
/// the stored post as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post with no likes or comments.
    pub fn new(user_id: Uuid, input: PostInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: input.text,
            name: input.name,
            avatar: input.avatar,
            user_id,
            created_at,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == comment_id)
    }

    /// Prepend a like from `user_id`.
    pub fn with_like(&self, user_id: Uuid) -> Result<Self, DomainError> {
        if self.is_liked_by(user_id) {
            return Err(DomainError::AlreadyLiked);
        }

        let mut next = self.clone();
        next.likes.insert(0, Like { user_id });
        Ok(next)
    }

    /// Remove the like left by `user_id`.
    pub fn without_like(&self, user_id: Uuid) -> Result<Self, DomainError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user_id == user_id)
            .ok_or(DomainError::NotLiked)?;

        let mut next = self.clone();
        next.likes.remove(index);
        Ok(next)
    }

    /// Prepend a comment.
    pub fn with_comment(&self, comment: Comment) -> Self {
        let mut next = self.clone();
        next.comments.insert(0, comment);
        next
    }

    /// Remove the comment identified by `comment_id`.
    pub fn without_comment(&self, comment_id: Uuid) -> Result<Self, DomainError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(DomainError::CommentNotFound { id: comment_id })?;

        let mut next = self.clone();
        next.comments.remove(index);
        Ok(next)
    }
}
