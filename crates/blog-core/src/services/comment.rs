use std::sync::Arc;

use blog_shared::dto::{CommentDto, CommentRequest};

use crate::domain::{Comment, NewComment, Post};
use crate::error::{DomainError, DomainResult};
use crate::ports::{CommentRepository, PostRepository};

use super::missing;

/// Comment operations, always scoped to a parent post.
#[derive(Clone)]
pub struct CommentService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Attach a new comment to `post_id`.
    pub async fn create_comment(
        &self,
        post_id: i64,
        req: CommentRequest,
    ) -> DomainResult<CommentDto> {
        let post = self.find_post(post_id).await?;
        let comment = self.comments.create(NewComment::new(post.id, req)).await?;
        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        Ok(comment.into())
    }

    /// Every comment attached to `post_id`.
    ///
    /// The post itself is not looked up: an unknown id yields an empty list.
    pub async fn list_comments_by_post(&self, post_id: i64) -> DomainResult<Vec<CommentDto>> {
        let comments = self.comments.find_by_post_id(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get_comment(&self, post_id: i64, comment_id: i64) -> DomainResult<CommentDto> {
        self.find_owned(post_id, comment_id).await.map(Into::into)
    }

    /// Replace name, email and body of a comment owned by `post_id`.
    pub async fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        req: CommentRequest,
    ) -> DomainResult<CommentDto> {
        let mut comment = self.find_owned(post_id, comment_id).await?;
        comment.apply(req);

        let updated = self
            .comments
            .update(comment)
            .await
            .map_err(missing("Comment", comment_id))?;
        tracing::info!(post_id, comment_id, "Comment updated");
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> DomainResult<()> {
        let comment = self.find_owned(post_id, comment_id).await?;
        self.comments
            .delete(comment.id)
            .await
            .map_err(missing("Comment", comment_id))?;
        tracing::info!(post_id, comment_id, "Comment deleted");
        Ok(())
    }

    /// Resolve the post, then the comment, then check the comment is attached
    /// to that post.
    async fn find_owned(&self, post_id: i64, comment_id: i64) -> DomainResult<Comment> {
        let post = self.find_post(post_id).await?;

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::not_found("Comment", comment_id))?;

        if !comment.belongs_to(post.id) {
            tracing::debug!(
                post_id,
                comment_id,
                owner_id = comment.post_id,
                "Comment requested under a foreign post"
            );
            return Err(DomainError::InvalidRelationship(
                "Comment does not belong to post".to_string(),
            ));
        }

        Ok(comment)
    }

    async fn find_post(&self, post_id: i64) -> DomainResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::not_found("Post", post_id))
    }
}
