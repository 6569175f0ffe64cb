use std::sync::Arc;

use blog_shared::dto::{PostDto, PostRequest, PostResponse};

use crate::domain::{NewPost, Page, PageRequest, Post};
use crate::error::{DomainError, DomainResult};
use crate::ports::PostRepository;

use super::missing;

/// Post operations: CRUD plus the paginated listing.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Persist a new post. A duplicate title fails with `ConstraintViolation`.
    pub async fn create_post(&self, req: PostRequest) -> DomainResult<PostDto> {
        let post = self.posts.create(NewPost::from(req)).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post.into())
    }

    /// One page of posts ordered by `sort_by` in direction `sort_dir`.
    pub async fn list_posts(
        &self,
        page_no: u64,
        page_size: u64,
        sort_by: &str,
        sort_dir: &str,
    ) -> DomainResult<PostResponse> {
        let request = PageRequest::new(page_no, page_size, sort_by, sort_dir)?;
        tracing::debug!(
            page_no,
            page_size,
            sort_by = %request.sort_by,
            direction = ?request.direction,
            "Listing posts"
        );

        let page = self.posts.find_page(request).await?;
        Ok(to_response(page))
    }

    pub async fn get_post_by_id(&self, id: i64) -> DomainResult<PostDto> {
        self.find(id).await.map(Into::into)
    }

    /// Replace title, description and content of an existing post.
    pub async fn update_post(&self, id: i64, req: PostRequest) -> DomainResult<PostDto> {
        let mut post = self.find(id).await?;
        post.apply(NewPost::from(req));

        let updated = self.posts.update(post).await.map_err(missing("Post", id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(updated.into())
    }

    /// Delete a post together with all of its comments.
    pub async fn delete_post_by_id(&self, id: i64) -> DomainResult<()> {
        let post = self.find(id).await?;
        self.posts
            .delete_with_comments(post.id)
            .await
            .map_err(missing("Post", id))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> DomainResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Post", id))
    }
}

fn to_response(page: Page<Post>) -> PostResponse {
    let page = page.map(PostDto::from);
    PostResponse {
        content: page.content,
        page_no: page.page_no,
        page_size: page.page_size,
        total_elements: page.total_elements,
        total_pages: page.total_pages,
        last: page.last,
        first: page.first,
    }
}
