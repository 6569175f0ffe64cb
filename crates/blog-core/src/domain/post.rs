use blog_shared::dto::{PostDto, PostRequest};

/// Post entity - a blog post, unique by title.
///
/// `id` is assigned by the store when the post is first persisted and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
}

impl Post {
    /// Overwrite the mutable fields, keeping the id.
    pub fn apply(&mut self, changes: NewPost) {
        self.title = changes.title;
        self.description = changes.description;
        self.content = changes.content;
    }
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub content: String,
}

impl From<PostRequest> for NewPost {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            content: req.content,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            content: post.content,
        }
    }
}
