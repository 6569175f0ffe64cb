use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, Page, PageRequest, Post};
use crate::error::RepoError;

/// Generic repository trait defining the operations every table supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist the current state of an existing entity.
    ///
    /// Fails with [`RepoError::NotFound`] if no row has the entity's id.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a post and return it with its generated id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// One sorted page of posts plus the total row count.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError>;

    /// Delete a post and every comment attached to it as one atomic unit.
    async fn delete_with_comments(&self, id: i64) -> Result<(), RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    /// Insert a comment and return it with its generated id.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// All comments attached to `post_id`, in id order.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}
