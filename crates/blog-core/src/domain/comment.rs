use blog_shared::dto::{CommentDto, CommentRequest};

/// Comment entity - always attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    /// Whether this comment is attached to `post_id`.
    pub fn belongs_to(&self, post_id: i64) -> bool {
        self.post_id == post_id
    }

    /// Overwrite name, email and body. The owning post never changes.
    pub fn apply(&mut self, changes: CommentRequest) {
        self.name = changes.name;
        self.email = changes.email;
        self.body = changes.body;
    }
}

/// A comment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl NewComment {
    pub fn new(post_id: i64, req: CommentRequest) -> Self {
        Self {
            post_id,
            name: req.name,
            email: req.email,
            body: req.body,
        }
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
        }
    }
}
