//! In-memory storage - used when no database is configured.
//!
//! Both repositories share one set of tables behind a single async `RwLock`,
//! so a cascade delete or a uniqueness check sees a consistent snapshot.
//! Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Comment, NewComment, NewPost, Page, PageRequest, Post, SortDirection};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CommentRepository, PostRepository};

#[derive(Default)]
struct Tables {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    last_post_id: i64,
    last_comment_id: i64,
}

impl Tables {
    fn check_title(&self, title: &str, own_id: Option<i64>) -> Result<(), RepoError> {
        let taken = self
            .posts
            .values()
            .any(|p| p.title == title && Some(p.id) != own_id);

        if taken {
            return Err(RepoError::Constraint(
                "a post with this title already exists".to_string(),
            ));
        }
        Ok(())
    }

    fn check_post_exists(&self, post_id: i64) -> Result<(), RepoError> {
        if !self.posts.contains_key(&post_id) {
            return Err(RepoError::Constraint(
                "the referenced post does not exist".to_string(),
            ));
        }
        Ok(())
    }

    fn remove_post(&mut self, id: i64) -> Result<usize, RepoError> {
        self.posts.remove(&id).ok_or(RepoError::NotFound)?;

        let before = self.comments.len();
        self.comments.retain(|_, c| c.post_id != id);
        Ok(before - self.comments.len())
    }
}

/// Shared in-memory tables for posts and comments.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repository(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn comment_repository(&self) -> InMemoryCommentRepository {
        InMemoryCommentRepository {
            tables: self.tables.clone(),
        }
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    tables: Arc<RwLock<Tables>>,
}

/// In-memory comment repository.
pub struct InMemoryCommentRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        tables.check_title(&post.title, Some(post.id))?;

        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // Same cascade the foreign key applies in Postgres.
        let mut tables = self.tables.write().await;
        tables.remove_post(id).map(|_| ())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        tables.check_title(&new_post.title, None)?;

        tables.last_post_id += 1;
        let post = Post {
            id: tables.last_post_id,
            title: new_post.title,
            description: new_post.description,
            content: new_post.content,
        };
        tables.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let tables = self.tables.read().await;
        let total = tables.posts.len() as u64;

        if request.is_beyond(total) {
            return Ok(Page::new(Vec::new(), &request, total));
        }

        // Stable sort over id order: ties keep ascending ids.
        let mut posts: Vec<&Post> = tables.posts.values().collect();
        posts.sort_by(|a, b| {
            let ordering = request.sort_by.compare(a, b);
            match request.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let offset = request
            .offset()
            .and_then(|o| usize::try_from(o).ok())
            .unwrap_or(usize::MAX);
        let limit = usize::try_from(request.page_size).unwrap_or(usize::MAX);

        let content = posts
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(content, &request, total))
    }

    async fn delete_with_comments(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        let removed = tables.remove_post(id)?;
        tracing::debug!(post_id = id, comments = removed, "Deleted post with its comments");
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.comments.contains_key(&comment.id) {
            return Err(RepoError::NotFound);
        }
        tables.check_post_exists(comment.post_id)?;

        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        tables.check_post_exists(new_comment.post_id)?;

        tables.last_comment_id += 1;
        let comment = Comment {
            id: tables.last_comment_id,
            post_id: new_comment.post_id,
            name: new_comment.name,
            email: new_comment.email,
            body: new_comment.body,
        };
        tables.comments.insert(comment.id, comment.clone());

        Ok(comment)
    }

    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}
